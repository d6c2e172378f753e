use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    fn push(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let idx = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        });
        idx
    }

    #[inline]
    fn tri(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Decorative primitives, parameterised like their scene-graph counterparts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Octahedron { radius: f32 },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Plane { width: f32, height: f32 },
}

impl Primitive {
    pub fn build(&self) -> MeshData {
        match *self {
            Primitive::Box {
                width,
                height,
                depth,
            } => cuboid(width, height, depth),
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => cylinder(radius_top, radius_bottom, height, segments),
            Primitive::Sphere {
                radius,
                width_segments,
                height_segments,
            } => sphere(radius, width_segments, height_segments),
            Primitive::Octahedron { radius } => octahedron(radius),
            Primitive::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(radius, tube, radial_segments, tubular_segments),
            Primitive::Cone {
                radius,
                height,
                segments,
            } => cylinder(0.0, radius, height, segments),
            Primitive::Plane { width, height } => plane(width, height),
        }
    }

    /// Radius of a sphere enclosing the primitive, used for picking.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Primitive::Box {
                width,
                height,
                depth,
            } => Vec3::new(width, height, depth).length() * 0.5,
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
                ..
            } => Vec3::new(radius_top.max(radius_bottom), height * 0.5, 0.0).length(),
            Primitive::Sphere { radius, .. } | Primitive::Octahedron { radius } => radius,
            Primitive::Torus { radius, tube, .. } => radius + tube,
            Primitive::Cone { radius, height, .. } => {
                Vec3::new(radius, height * 0.5, 0.0).length()
            }
            Primitive::Plane { width, height } => Vec3::new(width, height, 0.0).length() * 0.5,
        }
    }
}

pub fn plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let mut m = MeshData::default();
    let n = Vec3::Z;
    let a = m.push(Vec3::new(-hw, -hh, 0.0), n, [0.0, 1.0]);
    let b = m.push(Vec3::new(hw, -hh, 0.0), n, [1.0, 1.0]);
    let c = m.push(Vec3::new(hw, hh, 0.0), n, [1.0, 0.0]);
    let d = m.push(Vec3::new(-hw, hh, 0.0), n, [0.0, 0.0]);
    m.tri(a, b, c);
    m.tri(a, c, d);
    m
}

pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let h = Vec3::new(width, height, depth) * 0.5;
    let mut m = MeshData::default();
    // (normal, u axis, v axis) per face; corners are n*h ± u*h ± v*h
    let faces = [
        (Vec3::X, -Vec3::Z, Vec3::Y),
        (-Vec3::X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, -Vec3::Z),
        (-Vec3::Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (-Vec3::Z, -Vec3::X, Vec3::Y),
    ];
    for (n, u, v) in faces {
        let center = n * h;
        let (du, dv) = (u * h, v * h);
        let a = m.push(center - du - dv, n, [0.0, 1.0]);
        let b = m.push(center + du - dv, n, [1.0, 1.0]);
        let c = m.push(center + du + dv, n, [1.0, 0.0]);
        let d = m.push(center - du + dv, n, [0.0, 0.0]);
        m.tri(a, b, c);
        m.tri(a, c, d);
    }
    m
}

/// Open-ended frustum with caps; a zero top radius makes a cone.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half = height * 0.5;
    let slope = (radius_bottom - radius_top) / height.max(1e-6);
    let mut m = MeshData::default();

    // torso: row 0 at the top, row 1 at the bottom
    let row = segments + 1;
    for (y, r, v) in [(half, radius_top, 0.0), (-half, radius_bottom, 1.0)] {
        for i in 0..=segments {
            let u = i as f32 / segments as f32;
            let theta = u * TAU;
            let (s, c) = theta.sin_cos();
            let normal = Vec3::new(s, slope, c).normalize();
            m.push(Vec3::new(r * s, y, r * c), normal, [u, v]);
        }
    }
    for i in 0..segments {
        let a = i;
        let b = row + i;
        let c = row + i + 1;
        let d = i + 1;
        m.tri(a, b, d);
        m.tri(b, c, d);
    }

    for (top, r) in [(true, radius_top), (false, radius_bottom)] {
        if r <= 0.0 {
            continue;
        }
        let (y, n) = if top { (half, Vec3::Y) } else { (-half, -Vec3::Y) };
        let center = m.push(Vec3::new(0.0, y, 0.0), n, [0.5, 0.5]);
        let first = m.vertices.len() as u32;
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            m.push(Vec3::new(r * s, y, r * c), n, [s * 0.5 + 0.5, c * 0.5 + 0.5]);
        }
        for i in 0..segments {
            let (a, b) = (first + i, first + i + 1);
            if top {
                m.tri(a, b, center);
            } else {
                m.tri(b, a, center);
            }
        }
    }
    m
}

pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut m = MeshData::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let dir = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            m.push(dir * radius, dir.normalize_or_zero(), [u, v]);
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                m.tri(a, b, d);
            }
            if iy != hs - 1 {
                m.tri(b, c, d);
            }
        }
    }
    m
}

/// Flat-shaded octahedron; each face gets its own vertices.
pub fn octahedron(radius: f32) -> MeshData {
    let p = [
        Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z,
    ];
    let faces: [[usize; 3]; 8] = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    let mut m = MeshData::default();
    for f in faces {
        let (a, b, c) = (p[f[0]] * radius, p[f[1]] * radius, p[f[2]] * radius);
        let n = (b - a).cross(c - a).normalize();
        let ia = m.push(a, n, [0.0, 0.0]);
        let ib = m.push(b, n, [1.0, 0.0]);
        let ic = m.push(c, n, [0.5, 1.0]);
        m.tri(ia, ib, ic);
    }
    m
}

/// Torus in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let rs = radial_segments.max(3);
    let ts = tubular_segments.max(3);
    let mut m = MeshData::default();
    for j in 0..=rs {
        let v = j as f32 / rs as f32 * TAU;
        for i in 0..=ts {
            let u = i as f32 / ts as f32 * TAU;
            let pos = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            m.push(
                pos,
                (pos - center).normalize_or_zero(),
                [i as f32 / ts as f32, j as f32 / rs as f32],
            );
        }
    }
    let row = ts + 1;
    for j in 1..=rs {
        for i in 1..=ts {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            m.tri(a, b, d);
            m.tri(b, c, d);
        }
    }
    m
}
