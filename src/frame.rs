use crate::constants::*;
use crate::core::model::LogoMesh;
use crate::core::texture::RgbaImage;
use crate::core::{
    episode_at, episode_material, logo_mesh_model, logo_plane_model, primitive_for_episode,
    Camera, CameraRig, EpisodeKind, EpisodeObject, FollowRates, JourneyLayout, UiSnapshot,
    ViewState,
};
use crate::render::{self, ObjectDraw, SceneFrame};
use crate::{dom, input, overlay, panel};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub view: Rc<RefCell<ViewState>>,
    pub layout: Rc<JourneyLayout>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub pick_spheres: Rc<RefCell<Vec<(Vec3, f32)>>>,
    pub objects: Vec<EpisodeObject>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub tooltips: Option<overlay::Tooltips>,

    pub gpu: Option<render::GpuState<'a>>,
    /// Decoded fallback image waiting for upload on the next frame.
    pub pending_logo: Rc<RefCell<Option<RgbaImage>>>,
    /// Parsed logo model waiting for upload; replaces the fallback plane.
    pub pending_model: Rc<RefCell<Option<LogoMesh>>>,

    pub start_instant: Instant,
    pub last_instant: Instant,
    pub last_ui: Option<UiSnapshot>,
    pub last_hovered: Option<usize>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let elapsed_sec = (now - self.start_instant).as_secs_f32();
        let now_ms = dom::now_ms();

        let (progress, active) = {
            let mut view = self.view.borrow_mut();
            view.progress.poll_snap(now_ms, self.layout.stops());
            view.progress.advance(dt_sec);
            view.sync_active(&self.layout);
            (view.progress.current(), view.active())
        };

        let width = self.canvas.width().max(1) as f32;
        let height = self.canvas.height().max(1) as f32;
        let desired = self.layout.pose_at(progress);
        let camera = {
            let mut rig = self.rig.borrow_mut();
            rig.follow(
                &desired,
                dt_sec,
                now_ms,
                FollowRates {
                    eye: CAMERA_FOLLOW_RATE,
                    target: TARGET_FOLLOW_RATE,
                },
            );
            rig.camera(width / height)
        };

        let draws = self.animate_objects(elapsed_sec, dt_sec, active);
        self.update_hover(&camera, width, height);
        self.sync_ui();

        if let Some(t) = &self.tooltips {
            let css_scale = self.canvas.client_width().max(1) as f32 / width;
            let positions: Vec<Vec3> = self.objects.iter().map(|o| o.position).collect();
            t.update(&self.view.borrow(), &camera, &positions, width, height, css_scale);
        }

        if let Some(g) = &mut self.gpu {
            if let Some(image) = self.pending_logo.borrow_mut().take() {
                g.set_logo_image(&image);
            }
            if let Some(model) = self.pending_model.borrow_mut().take() {
                g.set_logo_mesh(&model);
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = SceneFrame {
                camera: &camera,
                objects: &draws,
                logo_plane: logo_plane_model(&camera),
                logo_mesh: logo_mesh_model(&camera),
                elapsed_sec,
            };
            match g.render(&scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost, reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }

    fn animate_objects(
        &mut self,
        elapsed_sec: f32,
        dt_sec: f32,
        active: Option<usize>,
    ) -> Vec<ObjectDraw> {
        let mut spheres = self.pick_spheres.borrow_mut();
        spheres.clear();
        let mut draws = Vec::with_capacity(self.objects.len());
        for obj in self.objects.iter_mut() {
            let weight = if active == Some(obj.index) { 1.0 } else { 0.0 };
            obj.animate(elapsed_sec, dt_sec, weight);
            let radius = primitive_for_episode(obj.index).bounding_radius() * obj.scale;
            spheres.push((obj.position, radius + PICK_RADIUS_PADDING));
            let kind = episode_at(obj.index).map_or(EpisodeKind::Narrative, |e| e.kind);
            draws.push(ObjectDraw {
                model: obj.model_matrix(),
                material: episode_material(kind, weight),
            });
        }
        draws
    }

    fn update_hover(&mut self, camera: &Camera, width: f32, height: f32) {
        let ms = *self.mouse.borrow();
        let coarse = self.view.borrow().coarse_pointer;
        let hovered = if ms.over_canvas && !coarse {
            let (ro, rd) = camera.screen_ray(ms.x, ms.y, width, height);
            input::pick_nearest(ro, rd, &self.pick_spheres.borrow())
        } else {
            None
        };
        self.view.borrow_mut().hovered = hovered;
        if hovered != self.last_hovered {
            self.last_hovered = hovered;
            let cursor = if hovered.is_some() { "pointer" } else { "grab" };
            _ = self.canvas.style().set_property("cursor", cursor);
        }
    }

    /// Push view changes into the DOM, touching only what differs from last frame.
    fn sync_ui(&mut self) {
        let (snap, episode) = {
            let view = self.view.borrow();
            (view.snapshot(), view.selected_episode())
        };
        let prev = self.last_ui;
        if prev == Some(snap) {
            return;
        }
        self.last_ui = Some(snap);

        if prev.map(|p| p.active) != Some(snap.active) {
            overlay::set_title(&self.document, snap.active);
        }
        if prev.map(|p| p.hint_visible) != Some(snap.hint_visible) {
            overlay::set_hint_visible(&self.document, snap.hint_visible);
        }
        if prev.map(|p| p.selected) != Some(snap.selected) {
            if let Err(e) = panel::render(&self.document, episode, snap.moving) {
                log::warn!("[ui] panel render failed: {:?}", e);
            }
        } else if prev.map(|p| p.moving) != Some(snap.moving) {
            panel::set_compact(&self.document, snap.moving);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    layout: &JourneyLayout,
) -> anyhow::Result<render::GpuState<'static>> {
    // the surface borrows the canvas for the lifetime of the page
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let primitives: Vec<_> = (0..layout.episode_count()).map(primitive_for_episode).collect();
    render::GpuState::new(leaked_canvas, &primitives).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
