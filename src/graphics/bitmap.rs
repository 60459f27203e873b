//! Owned pixel buffers used as page textures
use crate::error::{PageError, Result};
use crate::graphics::color::Color;
use alloc::vec::Vec;
use core::fmt;
use embedded_graphics::primitives::PointsIter;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    image::ImageDrawable,
    pixelcolor::{raw::RawU16, IntoStorage, Rgb565},
    primitives::Rectangle,
    Pixel,
};

/// Pixel layout of a `Bitmap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 16 bit, little endian 5-6-5. Always opaque.
    Rgb565,
    /// 32 bit, stored R, G, B, A in memory.
    Argb8888,
}

impl PixelFormat {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Argb8888 => 4,
        }
    }

    fn encode(self, color: Color, out: &mut [u8]) {
        match self {
            PixelFormat::Rgb565 => {
                let raw: u16 = color.to_rgb565().into_storage();
                out.copy_from_slice(&raw.to_le_bytes());
            }
            PixelFormat::Argb8888 => out.copy_from_slice(&color.to_bytes()),
        }
    }

    fn decode(self, bytes: &[u8]) -> Color {
        match self {
            PixelFormat::Rgb565 => {
                let raw = u16::from_le_bytes([bytes[0], bytes[1]]);
                Color::from_rgb565(Rgb565::from(RawU16::new(raw)))
            }
            PixelFormat::Argb8888 => Color::with_alpha(bytes[0], bytes[1], bytes[2], bytes[3]),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Rgb565 => write!(f, "RGB565"),
            PixelFormat::Argb8888 => write!(f, "ARGB8888"),
        }
    }
}

/// Exclusively owned width x height pixel buffer.
///
/// Dropping a bitmap releases its pixel memory; there is no separate
/// recycle step.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Bitmap {
    /// Allocate a zero-filled bitmap.
    ///
    /// Zero bytes are black for `Rgb565` and transparent for `Argb8888`.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        let len = Self::byte_len(width, height, format)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| PageError::Allocation {
                width,
                height,
                format,
            })?;
        data.resize(len, 0);

        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Allocate a bitmap with every pixel set to `color`
    pub fn filled(width: u32, height: u32, format: PixelFormat, color: Color) -> Result<Self> {
        let mut bitmap = Self::new(width, height, format)?;
        bitmap.erase_color(color);
        Ok(bitmap)
    }

    /// Build a bitmap from row-major pixels
    pub fn from_pixels(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &[Color],
    ) -> Result<Self> {
        let mut bitmap = Self::new(width, height, format)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(PageError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let bpp = format.bytes_per_pixel();
        for (chunk, color) in bitmap.data.chunks_exact_mut(bpp).zip(pixels) {
            format.encode(*color, chunk);
        }
        Ok(bitmap)
    }

    fn byte_len(width: u32, height: u32, format: PixelFormat) -> Result<usize> {
        let invalid = PageError::InvalidDimensions { width, height };
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(invalid);
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(format.bytes_per_pixel()))
            .ok_or(invalid)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    /// Raw pixel bytes, rows top to bottom, ready for upload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Fill every pixel with `color`
    pub fn erase_color(&mut self, color: Color) {
        let bpp = self.format.bytes_per_pixel();
        let mut encoded = [0u8; 4];
        self.format.encode(color, &mut encoded[..bpp]);
        for chunk in self.data.chunks_exact_mut(bpp) {
            chunk.copy_from_slice(&encoded[..bpp]);
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.stride() + x as usize * self.format.bytes_per_pixel())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let bpp = self.format.bytes_per_pixel();
        Some(self.format.decode(&self.data[offset..offset + bpp]))
    }

    /// Out of bounds writes are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(offset) = self.offset(x, y) {
            let bpp = self.format.bytes_per_pixel();
            self.format.encode(color, &mut self.data[offset..offset + bpp]);
        }
    }

    /// Row-major iterator over decoded pixels
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        let format = self.format;
        self.data
            .chunks_exact(format.bytes_per_pixel())
            .map(move |chunk| format.decode(chunk))
    }

    /// Copy into a freshly allocated bitmap, converting to `format`
    pub fn copy(&self, format: PixelFormat) -> Result<Bitmap> {
        if format == self.format {
            let mut data = Vec::new();
            data.try_reserve_exact(self.data.len())
                .map_err(|_| PageError::Allocation {
                    width: self.width,
                    height: self.height,
                    format,
                })?;
            data.extend_from_slice(&self.data);
            return Ok(Bitmap {
                width: self.width,
                height: self.height,
                format,
                data,
            });
        }

        let mut copy = Bitmap::new(self.width, self.height, format)?;
        let bpp = format.bytes_per_pixel();
        for (chunk, color) in copy.data.chunks_exact_mut(bpp).zip(self.pixels()) {
            format.encode(color, chunk);
        }
        Ok(copy)
    }

    /// Composite `src` over this bitmap with its top-left corner at `origin`.
    ///
    /// Pixels falling outside this bitmap are clipped.
    pub fn draw_bitmap(&mut self, src: &Bitmap, origin: Point) {
        // Clip in i64 first so origin + size cannot overflow i32
        let visible = |start: i32, len: u32, limit: u32| {
            (i64::from(limit) - i64::from(start)).clamp(0, i64::from(len)) as u32
        };
        let size = Size::new(
            visible(origin.x, src.width, self.width),
            visible(origin.y, src.height, self.height),
        );
        let area = Rectangle::new(origin, size).intersection(&self.bounding_box());
        for point in area.points() {
            let (x, y) = (point.x as u32, point.y as u32);
            let src_x = (point.x - origin.x) as u32;
            let src_y = (point.y - origin.y) as u32;
            if let (Some(over), Some(under)) = (src.pixel(src_x, src_y), self.pixel(x, y)) {
                self.set_pixel(x, y, under.blend(&over));
            }
        }
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .finish()
    }
}

// Implement DrawTarget for embedded-graphics
impl DrawTarget for Bitmap {
    type Color = Color;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as u32, y as u32, color);
        }
        Ok(())
    }
}

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl ImageDrawable for Bitmap {
    type Color = Color;

    fn draw<D>(&self, target: &mut D) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_contiguous(&self.bounding_box(), self.pixels())
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let area = area.intersection(&self.bounding_box());
        let pixels = area
            .points()
            .filter_map(|p| self.pixel(p.x as u32, p.y as u32));
        target.fill_contiguous(&Rectangle::new(Point::zero(), area.size), pixels)
    }
}
