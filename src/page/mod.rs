//! # Page Module
//!
//! Per-page visual state for the curl renderer.
//!
//! ## Modules
//!
//! - `side`: `Side` selector (front, back, both)
//! - `slots`: `TextureSlots`, exclusive ownership of the two face images
//! - `texture`: power-of-two padding and `TextureRect`
//!
//! ## Lifecycle
//!
//! 1. `Page::new` resets colors and installs 1x1 placeholders
//! 2. The host calls `set_color` / `set_texture` and the overlay toggles
//! 3. The renderer polls `textures_changed` and pulls `texture(side)`
//! 4. `recycle` drops the images and restores placeholders
//!
//! ## Overlay Views
//!
//! The front face keeps two cached variants: the baseline without
//! embedded view content, and a composite of that baseline with an
//! overlay. The composite is built once by the page's `Compositor` and
//! reused until `capture_baseline` takes a new baseline.

pub mod side;
pub mod slots;
pub mod texture;

use crate::config::PageConfig;
use crate::error::{PageError, Result};
use crate::graphics::bitmap::Bitmap;
use crate::graphics::color::Color;
use crate::graphics::compositor::{Compositor, SourceOver};
use log::{debug, trace};

use self::side::Side;
use self::slots::TextureSlots;
use self::texture::{pad_to_power_of_two, PaddedTexture};

/// Textures, fallback colors and the dirty flag of one page
#[derive(Debug)]
pub struct Page<C = SourceOver> {
    config: PageConfig,
    color_front: Color,
    color_back: Color,
    slots: TextureSlots,
    front_without_views: Option<Bitmap>,
    front_with_views: Option<Bitmap>,
    textures_changed: bool,
    compositor: C,
}

impl Page<SourceOver> {
    pub fn new() -> Result<Self> {
        Self::with_config(PageConfig::default())
    }

    pub fn with_config(config: PageConfig) -> Result<Self> {
        Self::with_compositor(config, SourceOver)
    }
}

impl<C: Compositor> Page<C> {
    pub fn with_compositor(config: PageConfig, compositor: C) -> Result<Self> {
        let placeholder = || {
            Bitmap::filled(1, 1, config.placeholder_format, config.reset_color)
        };
        // Same state `reset()` produces
        Ok(Self {
            config,
            color_front: config.reset_color,
            color_back: config.reset_color,
            slots: TextureSlots::new(placeholder()?, placeholder()?),
            front_without_views: None,
            front_with_views: None,
            textures_changed: false,
            compositor,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// Fallback color of a side. `Both` reads the back color.
    pub fn color(&self, side: Side) -> Color {
        match side {
            Side::Front => self.color_front,
            _ => self.color_back,
        }
    }

    pub fn set_color(&mut self, color: Color, side: Side) {
        match side {
            Side::Front => self.color_front = color,
            Side::Back => self.color_back = color,
            Side::Both => {
                self.color_front = color;
                self.color_back = color;
            }
        }
    }

    fn placeholder(&self, color: Color) -> Result<Bitmap> {
        Bitmap::filled(1, 1, self.config.placeholder_format, color)
    }

    /// Replace the image of `side`.
    ///
    /// `None` installs a 1x1 placeholder in the side's color (the front
    /// color for `Both`). The replaced image is dropped, except when the
    /// other side still shows it. On error the page is left untouched.
    pub fn set_texture(&mut self, texture: Option<Bitmap>, side: Side) -> Result<()> {
        let texture = match texture {
            Some(texture) => texture,
            None => {
                let color = match side {
                    Side::Back => self.color_back,
                    _ => self.color_front,
                };
                self.placeholder(color)?
            }
        };
        trace!(
            "set {:?} texture {}x{} {}",
            side,
            texture.width(),
            texture.height(),
            texture.format()
        );

        // The baseline mirrors the front image this call leaves in place
        let baseline = match side {
            Side::Back => self.slots.front().copy(self.slots.front().format())?,
            _ => texture.copy(texture.format())?,
        };

        match side {
            Side::Front => self.slots.replace_front(texture),
            Side::Back => self.slots.replace_back(texture),
            Side::Both => self.slots.replace_both(texture),
        }
        self.front_without_views = Some(baseline);
        self.textures_changed = true;
        Ok(())
    }

    /// Power-of-two padded copy of the side's image. `Both` reads the back.
    pub fn texture(&self, side: Side) -> Result<PaddedTexture> {
        match side {
            Side::Front => pad_to_power_of_two(self.slots.front()),
            _ => pad_to_power_of_two(self.slots.back()),
        }
    }

    pub fn front_texture(&self) -> &Bitmap {
        self.slots.front()
    }

    pub fn back_texture(&self) -> &Bitmap {
        self.slots.back()
    }

    /// Not cleared by reading; the renderer tracks what it consumed
    pub fn textures_changed(&self) -> bool {
        self.textures_changed
    }

    /// True when the back face has its own image rather than sharing the front
    pub fn has_back_texture(&self) -> bool {
        self.slots.is_back_distinct()
    }

    /// Drop both images and install placeholders in the current colors
    pub fn recycle(&mut self) -> Result<()> {
        let front = self.placeholder(self.color_front)?;
        let back = self.placeholder(self.color_back)?;
        self.slots = TextureSlots::new(front, back);
        self.textures_changed = false;
        debug!("page recycled");
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.color_front = self.config.reset_color;
        self.color_back = self.config.reset_color;
        self.recycle()
    }

    /// Show the baseline with `overlay` composited on top.
    ///
    /// The composite is built on the first call after a baseline capture
    /// and reused afterwards, whatever overlay is passed.
    pub fn change_with_views(&mut self, overlay: &Bitmap) -> Result<()> {
        let format = self.config.snapshot_format;
        let composite = match self.front_with_views.take() {
            Some(composite) => composite,
            None => {
                let baseline = self
                    .front_without_views
                    .as_ref()
                    .ok_or(PageError::MissingBaseline)?;
                let mut composite = baseline.copy(format)?;
                self.compositor.composite(&mut composite, overlay);
                debug!(
                    "built overlay composite {}x{}",
                    composite.width(),
                    composite.height()
                );
                composite
            }
        };

        let front = composite.copy(format);
        self.front_with_views = Some(composite);
        self.slots.replace_front(front?);
        self.textures_changed = true;
        Ok(())
    }

    /// Show the baseline without overlay content
    pub fn change_without_views(&mut self) -> Result<()> {
        let front = self
            .front_without_views
            .as_ref()
            .ok_or(PageError::MissingBaseline)?
            .copy(self.config.snapshot_format)?;
        self.slots.replace_front(front);
        self.textures_changed = true;
        Ok(())
    }

    /// Snapshot the current front image as the new baseline and drop the
    /// cached overlay composite
    pub fn capture_baseline(&mut self) -> Result<()> {
        let baseline = self.slots.front().copy(self.config.snapshot_format)?;
        self.front_without_views = Some(baseline);
        self.front_with_views = None;
        debug!("captured front baseline");
        Ok(())
    }

    pub fn has_baseline(&self) -> bool {
        self.front_without_views.is_some()
    }

    pub fn has_overlay_cache(&self) -> bool {
        self.front_with_views.is_some()
    }
}
