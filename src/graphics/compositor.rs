//! Drawing one bitmap onto another
use crate::graphics::bitmap::Bitmap;
use embedded_graphics_core::geometry::Point;

/// Composites an overlay onto a base image in place.
///
/// `Page` uses this to merge embedded view content into its front texture.
pub trait Compositor {
    fn composite(&mut self, base: &mut Bitmap, overlay: &Bitmap);
}

/// Source-over blend with the overlay anchored at the top-left corner
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceOver;

impl Compositor for SourceOver {
    fn composite(&mut self, base: &mut Bitmap, overlay: &Bitmap) {
        base.draw_bitmap(overlay, Point::zero());
    }
}

