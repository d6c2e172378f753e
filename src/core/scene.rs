use super::camera::Camera;
use super::constants::*;
use super::episodes::EpisodeKind;
use super::journey::damp;
use super::mesh::Primitive;
use glam::{Mat4, Quat, Vec3};

/// Decorative primitive per episode, by position in the table.
pub const EPISODE_PRIMITIVES: [Primitive; EPISODE_COUNT] = [
    Primitive::Box {
        width: 0.22,
        height: 0.14,
        depth: 0.02,
    },
    Primitive::Box {
        width: 0.2,
        height: 0.2,
        depth: 0.2,
    },
    Primitive::Cylinder {
        radius_top: 0.08,
        radius_bottom: 0.08,
        height: 0.24,
        segments: 12,
    },
    Primitive::Sphere {
        radius: 0.12,
        width_segments: 16,
        height_segments: 16,
    },
    Primitive::Octahedron { radius: 0.14 },
    Primitive::Torus {
        radius: 0.12,
        tube: 0.04,
        radial_segments: 12,
        tubular_segments: 24,
    },
    Primitive::Cone {
        radius: 0.12,
        height: 0.24,
        segments: 12,
    },
    Primitive::Torus {
        radius: 0.11,
        tube: 0.035,
        radial_segments: 10,
        tubular_segments: 6,
    },
];

#[inline]
pub fn primitive_for_episode(index: usize) -> Primitive {
    EPISODE_PRIMITIVES[index % EPISODE_PRIMITIVES.len()]
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Decode a `0xRRGGBB` sRGB colour into linear RGB.
pub fn linear_rgb(hex: u32) -> [f32; 3] {
    srgb_rgb(hex).map(srgb_to_linear)
}

/// Split a `0xRRGGBB` colour into sRGB channels in [0, 1].
pub fn srgb_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub base_color: [f32; 3],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub roughness: f32,
    pub metalness: f32,
}

/// Material for an episode object; `active_weight` is 1 for the active stop and 0 otherwise.
pub fn episode_material(kind: EpisodeKind, active_weight: f32) -> Material {
    let w = active_weight.clamp(0.0, 1.0);
    match kind {
        EpisodeKind::CameoHunt => Material {
            base_color: linear_rgb(CAMEO_HEX),
            emissive: linear_rgb(CAMEO_HEX),
            emissive_intensity: 1.2 + 1.8 * w,
            roughness: 0.25,
            metalness: 0.2,
        },
        EpisodeKind::Narrative => Material {
            base_color: linear_rgb(NARRATIVE_BASE_HEX),
            emissive: linear_rgb(NARRATIVE_EMISSIVE_HEX),
            emissive_intensity: 0.6 + 1.4 * w,
            roughness: 0.4,
            metalness: 0.05,
        },
    }
}

/// Animated transform of one episode object: soft bob, idle spin and an eased active scale.
#[derive(Clone, Debug)]
pub struct EpisodeObject {
    pub index: usize,
    pub home: Vec3,
    pub position: Vec3,
    pub yaw: f32,
    pub scale: f32,
}

impl EpisodeObject {
    pub fn new(index: usize, home: Vec3) -> Self {
        Self {
            index,
            home,
            position: home,
            yaw: 0.0,
            scale: 1.0,
        }
    }

    pub fn animate(&mut self, elapsed_sec: f32, dt_sec: f32, active_weight: f32) {
        self.position = Vec3::new(
            self.home.x,
            (elapsed_sec * BOB_FREQUENCY + self.home.x).sin() * BOB_AMPLITUDE,
            self.home.z,
        );
        self.yaw = (self.yaw + dt_sec * IDLE_SPIN_PER_SEC) % std::f32::consts::TAU;
        let goal = 1.0 + ACTIVE_SCALE_BOOST * active_weight;
        self.scale = damp(self.scale, goal, SCALE_DAMPING, dt_sec);
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw),
            self.position,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillboardMode {
    /// Copy the camera orientation.
    Full,
    /// Turn around Y only so the object stays upright.
    YawOnly,
}

/// Heading that turns an object at `object_pos` to face `camera_pos` around Y.
#[inline]
pub fn billboard_yaw(object_pos: Vec3, camera_pos: Vec3) -> f32 {
    let dx = camera_pos.x - object_pos.x;
    let dz = camera_pos.z - object_pos.z;
    dx.atan2(dz)
}

pub fn billboard_rotation(mode: BillboardMode, object_pos: Vec3, camera: &Camera) -> Quat {
    match mode {
        BillboardMode::Full => camera.orientation(),
        BillboardMode::YawOnly => Quat::from_rotation_y(billboard_yaw(object_pos, camera.eye)),
    }
}

/// Model matrix of the fallback logo plane, facing the camera head-on.
pub fn logo_plane_model(camera: &Camera) -> Mat4 {
    Mat4::from_quat(billboard_rotation(BillboardMode::Full, Vec3::ZERO, camera))
}

/// Model matrix of the hub logo mesh: stood upright from its flat authoring
/// pose, then turned around Y toward the camera.
pub fn logo_mesh_model(camera: &Camera) -> Mat4 {
    let pos = Vec3::ZERO;
    let rotation = billboard_rotation(BillboardMode::YawOnly, pos, camera)
        * Quat::from_rotation_x(LOGO_MODEL_BASE_PITCH);
    Mat4::from_scale_rotation_translation(Vec3::splat(LOGO_MODEL_SCALE), rotation, pos)
}

/// Lit material for the logo mesh: its own base colour with a fixed cyan glow.
pub fn logo_mesh_material(base_color: [f32; 3], roughness: f32, metalness: f32) -> Material {
    Material {
        base_color,
        emissive: linear_rgb(LOGO_MODEL_EMISSIVE_HEX),
        emissive_intensity: LOGO_MODEL_EMISSIVE_INTENSITY,
        roughness,
        metalness,
    }
}
