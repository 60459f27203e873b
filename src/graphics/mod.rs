//! # Graphics Module
//!
//! Pixel buffers and colors backing page textures.
//!
//! ## Modules
//!
//! - `color`: `Color` type with common color constants and blending
//! - `bitmap`: `Bitmap` owned pixel buffer in RGB565 or ARGB8888 layout
//! - `compositor`: `Compositor` trait for drawing one bitmap onto another
//!
//! ## embedded-graphics
//!
//! `Color` implements `PixelColor`, so a `Bitmap` is both a `DrawTarget`
//! and an `ImageDrawable`. Hosts can render page content with the usual
//! primitives and text styles, and bitmaps can be placed on each other
//! with `Image::new(&bitmap, offset).draw(&mut target)`.
//!
//! Pixel storage is allocated with `try_reserve_exact`, so running out of
//! memory surfaces as `PageError::Allocation` instead of aborting.

pub mod bitmap;
pub mod color;
pub mod compositor;
