//! Color representation and manipulation
use embedded_graphics_core::pixelcolor::{raw::RawU32, PixelColor, Rgb565, Rgb888, RgbColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    pub const RED: Color = Color {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const GREEN: Color = Color {
        r: 0,
        g: 255,
        b: 0,
        a: 255,
    };
    pub const BLUE: Color = Color {
        r: 0,
        g: 0,
        b: 255,
        a: 255,
    };
    pub const GRAY: Color = Color {
        r: 128,
        g: 128,
        b: 128,
        a: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Bytes in memory order (R, G, B, A)
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Packed `0xAARRGGBB` integer, the usual color encoding of UI toolkits
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
            a: (argb >> 24) as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Draw `other` over this color using source-over alpha compositing
    pub fn blend(&self, other: &Color) -> Color {
        match other.a {
            255 => return *other,
            0 => return *self,
            _ => {}
        }

        let src_alpha = other.a as f32 / 255.0;
        let dst_alpha = self.a as f32 / 255.0 * (1.0 - src_alpha);
        let out_alpha = src_alpha + dst_alpha;
        let channel = |src: u8, dst: u8| {
            libm::roundf((src as f32 * src_alpha + dst as f32 * dst_alpha) / out_alpha) as u8
        };

        Color::with_alpha(
            channel(other.r, self.r),
            channel(other.g, self.g),
            channel(other.b, self.b),
            libm::roundf(out_alpha * 255.0) as u8,
        )
    }

    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }

    pub fn from_rgb888(color: Rgb888) -> Self {
        Self::new(color.r(), color.g(), color.b())
    }

    /// Quantize to 5-6-5 bits. Alpha is dropped.
    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::from(self.to_rgb888())
    }

    pub fn from_rgb565(color: Rgb565) -> Self {
        Self::from_rgb888(Rgb888::from(color))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

impl PixelColor for Color {
    type Raw = RawU32;
}
