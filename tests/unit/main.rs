//! Unit tests mirroring the `src/` module tree


use image::{DynamicImage, Rgba, RgbaImage};

/// Image whose pixel at `(x, y)` encodes its own coordinates
fn coordinate_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, 0, 255])
    }))
}

/// PNG-encoded bytes of `image`
fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}
