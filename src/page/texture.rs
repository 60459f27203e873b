//! Power-of-two texture padding
//!
//! Many GPUs only accept textures whose width and height are powers of
//! two. A page image is copied into the top-left corner of the smallest
//! such canvas and the renderer samples only the sub-rectangle that holds
//! real pixels.

use crate::error::{PageError, Result};
use crate::graphics::bitmap::Bitmap;
use embedded_graphics::{image::Image, prelude::*};

/// Normalized texture coordinates, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextureRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextureRect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A padded copy of a page image plus where the image sits inside it
#[derive(Debug, Clone)]
pub struct PaddedTexture {
    pub bitmap: Bitmap,
    pub rect: TextureRect,
}

/// Largest padded edge. Bitmaps are capped at `i32::MAX` pixels per axis,
/// so `2^30` is the biggest power of two that can be allocated.
pub const MAX_PADDED_EDGE: u32 = 1 << 30;

/// Smallest power of two >= `n`. Returns `None` past `2^31`.
pub fn next_power_of_two(n: u32) -> Option<u32> {
    n.max(1).checked_next_power_of_two()
}

/// Power-of-two canvas size for a `width` x `height` image.
///
/// Fails with `InvalidDimensions` when either edge exceeds `MAX_PADDED_EDGE`.
pub fn padded_size(width: u32, height: u32) -> Result<(u32, u32)> {
    let edge = |n: u32| next_power_of_two(n).filter(|&p| p <= MAX_PADDED_EDGE);
    match (edge(width), edge(height)) {
        (Some(pw), Some(ph)) => Ok((pw, ph)),
        _ => Err(PageError::InvalidDimensions { width, height }),
    }
}

/// Copy `bitmap` into a canvas of power-of-two dimensions.
///
/// Width and height are rounded independently; the padding is left as
/// zero bytes. Images with an edge above `MAX_PADDED_EDGE` are rejected.
pub fn pad_to_power_of_two(bitmap: &Bitmap) -> Result<PaddedTexture> {
    let (w, h) = (bitmap.width(), bitmap.height());
    let (padded_w, padded_h) = padded_size(w, h)?;

    let mut padded = Bitmap::new(padded_w, padded_h, bitmap.format())?;
    Image::new(bitmap, Point::zero()).draw(&mut padded).ok();

    Ok(PaddedTexture {
        bitmap: padded,
        rect: TextureRect::new(0.0, 0.0, w as f32 / padded_w as f32, h as f32 / padded_h as f32),
    })
}
