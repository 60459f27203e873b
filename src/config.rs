use crate::graphics::bitmap::PixelFormat;
use crate::graphics::color::Color;

/// Page defaults applied on reset and when synthesizing images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    /// Color given to both sides by `Page::reset`
    pub reset_color: Color,
    /// Format of the 1x1 placeholders standing in for missing textures
    pub placeholder_format: PixelFormat,
    /// Format of front baselines and overlay composites
    pub snapshot_format: PixelFormat,
}

impl PageConfig {
    /// White pages, 16 bit images
    pub fn white() -> Self {
        Self {
            reset_color: Color::WHITE,
            placeholder_format: PixelFormat::Rgb565,
            snapshot_format: PixelFormat::Rgb565,
        }
    }

    /// Black pages, 16 bit images
    pub fn dark() -> Self {
        Self {
            reset_color: Color::BLACK,
            ..Self::white()
        }
    }

    /// White pages with 32 bit images so overlay transparency survives
    pub fn with_alpha() -> Self {
        Self {
            placeholder_format: PixelFormat::Argb8888,
            snapshot_format: PixelFormat::Argb8888,
            ..Self::white()
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::white()
    }
}
