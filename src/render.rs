use crate::constants::LOGO_PLACEHOLDER_SIZE;
use crate::core::mesh::Primitive;
use crate::core::model::LogoMesh;
use crate::core::texture::{self, RgbaImage};
use crate::core::{
    linear_rgb, logo_mesh_material, srgb_rgb, Camera, Material, AMBIENT_INTENSITY,
    LOGO_PLANE_EMISSIVE_INTENSITY, NARRATIVE_EMISSIVE_HEX, POINT_LIGHT_HEX, POINT_LIGHT_INTENSITY,
    POINT_LIGHT_POS, STARFIELD_SEED, STARFIELD_SIZE, STARFIELD_STARS,
};
use glam::Mat4;
use web_sys as web;

mod backdrop;
mod helpers;
mod logo;
mod meshes;
mod targets;

use backdrop::{create_backdrop_resources, BackdropResources};
use logo::{create_logo_resources, LogoResources};
use meshes::{create_mesh_resources, MeshResources, ObjectUniforms};
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    resolution_time: [f32; 4],
}

/// One episode object as the renderer needs it this frame.
pub struct ObjectDraw {
    pub model: Mat4,
    pub material: Material,
}

/// Everything that changes between frames.
pub struct SceneFrame<'f> {
    pub camera: &'f Camera,
    pub objects: &'f [ObjectDraw],
    /// Fallback plane, drawn until the logo mesh is uploaded.
    pub logo_plane: Mat4,
    pub logo_mesh: Mat4,
    pub elapsed_sec: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,

    backdrop: BackdropResources,
    meshes: MeshResources,
    logo: LogoResources,
    logo_material: Option<Material>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        primitives: &[Primitive],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let depth = DepthTarget::new(&device, width, height);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let globals_buffer = helpers::uniform_buffer::<Globals>(&device, "globals");
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let stars = texture::starfield(STARFIELD_SIZE, STARFIELD_SEED, STARFIELD_STARS);
        let backdrop = create_backdrop_resources(&device, &queue, &globals_bgl, format, &stars);
        let meshes = create_mesh_resources(&device, &globals_bgl, format, primitives);
        let placeholder =
            texture::logo_placeholder(LOGO_PLACEHOLDER_SIZE, srgb_rgb(NARRATIVE_EMISSIVE_HEX));
        let logo = create_logo_resources(&device, &queue, &globals_bgl, format, &placeholder);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            globals_buffer,
            globals_bg,
            backdrop,
            meshes,
            logo,
            logo_material: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.0006,
                g: 0.0009,
                b: 0.0024,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Re-apply the current surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, self.width, self.height);
    }

    pub fn set_logo_image(&mut self, image: &RgbaImage) {
        self.logo.set_image(&self.device, &self.queue, image);
        log::info!("[gpu] logo texture {}x{}", image.width, image.height);
    }

    /// Replace the fallback plane with the hub logo mesh.
    pub fn set_logo_mesh(&mut self, logo: &LogoMesh) {
        self.meshes.set_logo(&self.device, &logo.mesh);
        let material = logo_mesh_material(logo.base_color, logo.roughness, logo.metalness);
        self.logo_material = Some(material);
        log::info!("[gpu] logo mesh {} triangles", logo.mesh.triangle_count());
    }

    pub fn render(&mut self, frame_in: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        let cam = frame_in.camera;
        let [lr, lg, lb] = linear_rgb(POINT_LIGHT_HEX);
        let globals = Globals {
            view_proj: cam.view_proj().to_cols_array_2d(),
            eye: cam.eye.extend(1.0).to_array(),
            light_pos: POINT_LIGHT_POS.extend(POINT_LIGHT_INTENSITY).to_array(),
            light_color: [lr, lg, lb, AMBIENT_INTENSITY],
            resolution_time: [
                self.width as f32,
                self.height as f32,
                frame_in.elapsed_sec,
                0.0,
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        for (i, obj) in frame_in.objects.iter().enumerate() {
            self.meshes
                .write(&self.queue, i, &ObjectUniforms::new(obj.model, &obj.material));
        }
        match &self.logo_material {
            Some(material) if self.meshes.has_logo() => {
                let uniforms = ObjectUniforms::new(frame_in.logo_mesh, material);
                self.meshes.write_logo(&self.queue, &uniforms);
            }
            _ => self.logo.write(&self.queue, frame_in.logo_plane, LOGO_PLANE_EMISSIVE_INTENSITY),
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.backdrop.pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_bind_group(1, &self.backdrop.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            self.meshes
                .draw(&mut rpass, &self.globals_bg, frame_in.objects.len());
            if !self.meshes.has_logo() {
                // transparent, drawn last
                self.logo.draw(&mut rpass, &self.globals_bg);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
