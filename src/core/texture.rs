use super::error::HubError;
use rand::prelude::*;

/// Tightly packed RGBA8 pixels, row-major from the top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    /// Additively blend `rgb` scaled by `amount` into a pixel, saturating at 255.
    fn add(&mut self, x: u32, y: u32, rgb: [f32; 3], amount: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        for (c, v) in rgb.iter().enumerate() {
            let cur = self.pixels[i + c] as f32;
            self.pixels[i + c] = (cur + v * amount * 255.0).min(255.0) as u8;
        }
        let a = self.pixels[i + 3] as f32;
        self.pixels[i + 3] = (a + amount * 255.0).min(255.0) as u8;
    }
}

/// Decode a JPEG or PNG into RGBA8.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, HubError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(HubError::EmptyImage { width, height });
    }
    Ok(RgbaImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Sparse starfield on a transparent background; the same seed gives the same sky.
pub fn starfield(size: u32, seed: u64, count: usize) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        let x = rng.gen_range(0..size);
        let y = rng.gen_range(0..size);
        let brightness: f32 = rng.gen_range(0.25..1.0);
        // a few cool-tinted stars, the rest near white
        let tint = if rng.gen_bool(0.2) {
            [0.55, 0.85, 1.0]
        } else {
            [0.95, 0.96, 1.0]
        };
        img.add(x, y, tint, brightness);
        if brightness > 0.85 {
            for (dx, dy) in [(1i32, 0i32), (-1, 0), (0, 1), (0, -1)] {
                let nx = (x as i32 + dx).rem_euclid(size as i32) as u32;
                let ny = (y as i32 + dy).rem_euclid(size as i32) as u32;
                img.add(nx, ny, tint, brightness * 0.3);
            }
        }
    }
    img
}

/// Soft cyan halo with a bright ring; stands in for the logo while it streams.
pub fn logo_placeholder(size: u32, rgb: [f32; 3]) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let c = (size as f32 - 1.0) * 0.5;
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 - c) / c.max(1.0);
            let dy = (y as f32 - c) / c.max(1.0);
            let r = (dx * dx + dy * dy).sqrt();
            let halo = (1.0 - r).max(0.0).powi(2) * 0.45;
            let ring = (-((r - 0.55) / 0.06).powi(2)).exp();
            let amount = (halo + ring).min(1.0);
            if amount > 1.0 / 255.0 {
                img.add(x, y, rgb, amount);
            }
        }
    }
    img
}
