use super::{solid, solid_argb};
use crate::graphics::bitmap::PixelFormat;
use crate::graphics::color::Color;
use crate::page::side::Side;
use crate::page::texture::{pad_to_power_of_two, TextureRect};
use crate::page::Page;

#[test]
fn padded_size_is_smallest_power_of_two_per_axis() {
    let sizes = [1u32, 2, 3, 5, 17, 64, 100, 129];
    for &w in &sizes {
        for &h in &sizes {
            let padded = pad_to_power_of_two(&solid(w, h, Color::RED)).unwrap();
            let (pw, ph) = (w.next_power_of_two(), h.next_power_of_two());

            assert_eq!((padded.bitmap.width(), padded.bitmap.height()), (pw, ph));
            assert_eq!(
                padded.rect,
                TextureRect::new(0.0, 0.0, w as f32 / pw as f32, h as f32 / ph as f32)
            );
        }
    }
}

#[test]
fn power_of_two_input_is_not_padded() {
    let padded = pad_to_power_of_two(&solid(64, 32, Color::BLUE)).unwrap();

    assert_eq!((padded.bitmap.width(), padded.bitmap.height()), (64, 32));
    assert_eq!(padded.rect, TextureRect::new(0.0, 0.0, 1.0, 1.0));
    assert!(padded.bitmap.pixels().all(|p| p == Color::BLUE));
}

#[test]
fn image_lands_in_top_left_corner() {
    let padded = pad_to_power_of_two(&solid(3, 5, Color::RED)).unwrap();
    let bitmap = &padded.bitmap;

    assert_eq!((bitmap.width(), bitmap.height()), (4, 8));
    assert_eq!(padded.rect, TextureRect::new(0.0, 0.0, 0.75, 0.625));
    assert_eq!(padded.rect.width(), 0.75);
    for y in 0..5 {
        for x in 0..3 {
            assert_eq!(bitmap.pixel(x, y), Some(Color::RED));
        }
    }
    assert_ne!(bitmap.pixel(3, 0), Some(Color::RED));
    assert_ne!(bitmap.pixel(0, 5), Some(Color::RED));
}

#[test]
fn padding_keeps_format_and_is_transparent_with_alpha() {
    let half_red = Color::with_alpha(255, 0, 0, 128);
    let padded = pad_to_power_of_two(&solid_argb(3, 3, half_red)).unwrap();

    assert_eq!(padded.bitmap.format(), PixelFormat::Argb8888);
    assert_eq!(padded.bitmap.pixel(1, 1), Some(half_red));
    assert_eq!(padded.bitmap.pixel(3, 3), Some(Color::TRANSPARENT));
}

#[test]
fn page_texture_reads_requested_side() {
    let mut page = Page::new().unwrap();
    page.set_texture(Some(solid(300, 200, Color::RED)), Side::Front).unwrap();
    page.set_texture(Some(solid(10, 10, Color::BLUE)), Side::Back).unwrap();

    let front = page.texture(Side::Front).unwrap();
    assert_eq!((front.bitmap.width(), front.bitmap.height()), (512, 256));
    assert_eq!(front.rect.right, 300.0 / 512.0);
    assert_eq!(front.rect.bottom, 200.0 / 256.0);
    assert_eq!(front.bitmap.pixel(299, 199), Some(Color::RED));

    let back = page.texture(Side::Back).unwrap();
    assert_eq!((back.bitmap.width(), back.bitmap.height()), (16, 16));
    assert_eq!(back.bitmap.pixel(0, 0), Some(Color::BLUE));

    let both = page.texture(Side::Both).unwrap();
    assert_eq!(both.bitmap, back.bitmap);
}

#[test]
fn placeholder_texture_pads_to_one_pixel() {
    let page = Page::new().unwrap();
    let padded = page.texture(Side::Front).unwrap();

    assert_eq!((padded.bitmap.width(), padded.bitmap.height()), (1, 1));
    assert_eq!(padded.rect, TextureRect::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(padded.bitmap.pixel(0, 0), Some(Color::WHITE));
}

#[test]
fn reading_texture_does_not_touch_dirty_flag() {
    let mut page = Page::new().unwrap();
    page.texture(Side::Front).unwrap();
    assert!(!page.textures_changed());

    page.set_texture(Some(solid(5, 5, Color::GREEN)), Side::Front).unwrap();
    page.texture(Side::Front).unwrap();
    assert!(page.textures_changed());
}
