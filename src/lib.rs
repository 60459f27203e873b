//! # Curl Page
//!
//! Texture storage for a single page of a page-curl widget.
//!
//! ## Modules
//!
//! - `graphics`: `Color`, `Bitmap` pixel buffers and compositing
//! - `page`: the `Page` model, sides, texture slots and power-of-two padding
//! - `config`: `PageConfig` presets
//! - `error`: `PageError`
//!
//! ## Overview
//!
//! A `Page` owns a front and a back image plus a fallback color per side.
//! The renderer asks for power-of-two padded copies of those images through
//! `Page::texture` and watches `Page::textures_changed` to decide when to
//! upload again. The host decides when to `recycle` or `reset` a page.
//!
//! The crate is `no_std` and only needs `alloc` for pixel storage.
//!
//! ## Example
//!
//! ```ignore
//! use curl_page::{Bitmap, Color, Page, PixelFormat, Side};
//!
//! let mut page = Page::new()?;
//! page.set_color(Color::GRAY, Side::Back);
//! page.set_texture(Some(Bitmap::filled(300, 200, PixelFormat::Rgb565, Color::RED)?), Side::Front)?;
//!
//! let padded = page.texture(Side::Front)?;
//! assert_eq!((padded.bitmap.width(), padded.bitmap.height()), (512, 256));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod graphics;
pub mod page;

pub use config::PageConfig;
pub use error::{PageError, Result};
pub use graphics::bitmap::{Bitmap, PixelFormat};
pub use graphics::color::Color;
pub use graphics::compositor::{Compositor, SourceOver};
pub use page::side::Side;
pub use page::texture::{PaddedTexture, TextureRect};
pub use page::Page;
