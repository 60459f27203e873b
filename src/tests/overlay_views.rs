use super::{all_pixels, solid, solid_argb, CountingCompositor};
use crate::config::PageConfig;
use crate::error::PageError;
use crate::graphics::color::Color;
use crate::page::side::Side;
use crate::page::Page;

fn counting_page() -> Page<CountingCompositor> {
    Page::with_compositor(PageConfig::default(), CountingCompositor::default()).unwrap()
}

#[test]
fn toggles_require_a_baseline() {
    let mut page = counting_page();
    let overlay = solid_argb(2, 2, Color::RED);

    assert_eq!(page.change_with_views(&overlay), Err(PageError::MissingBaseline));
    assert_eq!(page.change_without_views(), Err(PageError::MissingBaseline));
    assert_eq!(page.compositor().calls, 0);
    assert!(!page.textures_changed());
}

#[test]
fn overlay_is_composited_onto_baseline() {
    let mut page = counting_page();
    page.set_texture(Some(solid(4, 4, Color::WHITE)), Side::Front).unwrap();
    page.recycle().unwrap();
    assert!(!page.textures_changed());

    page.change_with_views(&solid_argb(2, 2, Color::RED)).unwrap();

    let front = page.front_texture();
    assert_eq!((front.width(), front.height()), (4, 4));
    assert_eq!(front.pixel(0, 0), Some(Color::RED));
    assert_eq!(front.pixel(1, 1), Some(Color::RED));
    assert_eq!(front.pixel(2, 2), Some(Color::WHITE));
    assert_eq!(front.pixel(3, 0), Some(Color::WHITE));
    assert!(page.textures_changed());
    assert!(page.has_overlay_cache());
}

#[test]
fn composite_is_built_only_once() {
    let mut page = counting_page();
    page.set_texture(Some(solid(4, 4, Color::WHITE)), Side::Front).unwrap();

    page.change_with_views(&solid_argb(4, 4, Color::RED)).unwrap();
    page.change_with_views(&solid_argb(4, 4, Color::BLUE)).unwrap();
    page.change_with_views(&solid_argb(4, 4, Color::GREEN)).unwrap();

    assert_eq!(page.compositor().calls, 1);
    assert!(all_pixels(page.front_texture(), Color::RED));
}

#[test]
fn without_views_restores_last_set_texture() {
    let mut page = counting_page();
    page.set_texture(Some(solid(4, 4, Color::BLUE)), Side::Front).unwrap();
    page.change_with_views(&solid_argb(4, 4, Color::RED)).unwrap();
    assert!(all_pixels(page.front_texture(), Color::RED));

    page.recycle().unwrap();
    page.change_without_views().unwrap();

    assert!(page.textures_changed());
    assert_eq!(page.front_texture().width(), 4);
    assert!(all_pixels(page.front_texture(), Color::BLUE));
}

#[test]
fn set_texture_updates_baseline_but_keeps_composite() {
    let mut page = counting_page();
    page.set_texture(Some(solid(4, 4, Color::WHITE)), Side::Front).unwrap();
    page.change_with_views(&solid_argb(4, 4, Color::RED)).unwrap();

    page.set_texture(Some(solid(2, 2, Color::GREEN)), Side::Front).unwrap();
    page.change_without_views().unwrap();
    assert!(all_pixels(page.front_texture(), Color::GREEN));

    // stale composite is reused until a baseline capture
    page.change_with_views(&solid_argb(2, 2, Color::BLUE)).unwrap();
    assert_eq!(page.compositor().calls, 1);
    assert_eq!(page.front_texture().width(), 4);
    assert!(all_pixels(page.front_texture(), Color::RED));
}

#[test]
fn capture_baseline_invalidates_composite() {
    let mut page = counting_page();
    page.set_texture(Some(solid(4, 4, Color::WHITE)), Side::Front).unwrap();
    page.change_with_views(&solid_argb(2, 2, Color::RED)).unwrap();
    page.change_without_views().unwrap();

    page.capture_baseline().unwrap();
    assert!(!page.has_overlay_cache());

    page.change_with_views(&solid_argb(2, 2, Color::BLUE)).unwrap();
    assert_eq!(page.compositor().calls, 2);
    assert_eq!(page.front_texture().pixel(0, 0), Some(Color::BLUE));
    assert_eq!(page.front_texture().pixel(3, 3), Some(Color::WHITE));
}

#[test]
fn capture_baseline_snapshots_current_front() {
    let mut page = counting_page();
    page.set_texture(Some(solid(2, 2, Color::RED)), Side::Front).unwrap();
    page.change_with_views(&solid_argb(1, 1, Color::BLUE)).unwrap();

    // the composited front becomes the new baseline
    page.capture_baseline().unwrap();
    page.set_texture(Some(solid(2, 2, Color::GREEN)), Side::Back).unwrap();
    page.change_without_views().unwrap();

    assert_eq!(page.front_texture().pixel(0, 0), Some(Color::BLUE));
    assert_eq!(page.front_texture().pixel(1, 1), Some(Color::RED));
}

#[test]
fn overlay_cache_survives_recycle() {
    let mut page = counting_page();
    page.set_texture(Some(solid(4, 4, Color::WHITE)), Side::Front).unwrap();
    page.change_with_views(&solid_argb(4, 4, Color::RED)).unwrap();

    page.reset().unwrap();
    assert!(page.has_overlay_cache());

    page.change_with_views(&solid_argb(4, 4, Color::BLUE)).unwrap();
    assert_eq!(page.compositor().calls, 1);
    assert!(all_pixels(page.front_texture(), Color::RED));
}

#[test]
fn toggling_shared_page_keeps_back_face() {
    let mut page = counting_page();
    page.set_texture(Some(solid(4, 4, Color::WHITE)), Side::Both).unwrap();
    assert!(!page.has_back_texture());

    page.change_with_views(&solid_argb(4, 4, Color::RED)).unwrap();

    assert!(page.has_back_texture());
    assert!(all_pixels(page.front_texture(), Color::RED));
    assert!(all_pixels(page.back_texture(), Color::WHITE));
}

#[test]
fn translucent_overlay_blends_with_baseline() {
    let mut page = counting_page();
    page.set_texture(Some(solid(2, 2, Color::BLACK)), Side::Front).unwrap();

    page.change_with_views(&solid_argb(2, 2, Color::with_alpha(255, 255, 255, 128)))
        .unwrap();

    let pixel = page.front_texture().pixel(0, 0).unwrap();
    assert!(pixel.is_opaque());
    assert_eq!(pixel, Color::from_rgb565(Color::new(128, 128, 128).to_rgb565()));
}
