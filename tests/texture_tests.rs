// Host-side tests for procedural textures and logo decoding.

#![allow(dead_code)]
mod hub {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod texture {
        include!("../src/core/texture.rs");
    }
}

use hub::error::HubError;
use hub::texture::*;
use std::io::Cursor;

fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = image::RgbaImage::new(width, height);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = image::Rgba([x as u8 * 40, y as u8 * 40, 200, 255]);
    }
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("png encode");
    out.into_inner()
}

#[test]
fn starfield_is_deterministic_per_seed() {
    let a = starfield(64, 9, 80);
    let b = starfield(64, 9, 80);
    let c = starfield(64, 10, 80);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn starfield_has_expected_size_and_some_stars() {
    let img = starfield(32, 3, 40);
    assert_eq!((img.width, img.height), (32, 32));
    assert_eq!(img.pixels.len(), 32 * 32 * 4);
    assert_eq!(img.bytes_per_row(), 128);
    let lit = img.pixels.chunks(4).filter(|p| p[3] > 0).count();
    assert!(lit > 0 && lit < 32 * 32);
}

#[test]
fn empty_starfield_is_transparent() {
    let img = starfield(16, 1, 0);
    assert!(img.pixels.iter().all(|&b| b == 0));
}

#[test]
fn logo_placeholder_glows_in_the_middle_and_fades_at_corners() {
    let size = 64;
    let img = logo_placeholder(size, [0.5, 0.9, 1.0]);
    let alpha = |x: u32, y: u32| img.pixels[((y * size + x) * 4 + 3) as usize];
    assert_eq!(alpha(0, 0), 0);
    assert!(alpha(size / 2, size / 2) > 0);
    // the ring sits around 55% of the half-width
    let ring_x = size / 2 + (0.55 * (size as f32 / 2.0)) as u32;
    assert!(alpha(ring_x, size / 2) > alpha(size / 2, size / 2));
}

#[test]
fn decode_png_to_rgba() {
    let bytes = encode_png(3, 2);
    let img = decode_image(&bytes).expect("decodes");
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(img.pixels.len(), 3 * 2 * 4);
    assert_eq!(&img.pixels[4..8], &[40, 0, 200, 255]);
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, HubError::Decode(_)));
    assert!(err.to_string().starts_with("image decode failed"));
}
