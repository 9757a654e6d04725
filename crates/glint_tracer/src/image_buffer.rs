//! Pixel buffers the frame driver renders into.

use std::path::Path;

/// Color a surface is cleared to when accumulation restarts.
pub const CLEAR_COLOR: [u8; 4] = [0, 0, 0, 0];

/// An RGBA8 render target.
///
/// Addressed by (x, y) with (0, 0) at the bottom-left corner. Implementors
/// that store rows top-to-bottom flip y on access.
pub trait PixelBuffer {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Get the pixel at (x, y).
    fn get_pixel(&self, x: u32, y: u32) -> [u8; 4];

    /// Set the pixel at (x, y).
    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]);

    /// Fill every pixel with one color.
    fn clear(&mut self, rgba: [u8; 4]);
}

/// Number of pixels in a `width` x `height` surface, computed in `usize`.
pub(crate) fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Simple image buffer for storing render output.
///
/// Rows are stored top-to-bottom, the order image files and textures expect.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with the clear color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![CLEAR_COLOR; pixel_count(width, height)],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (self.height - (y + 1)) as usize * self.width as usize + x as usize
    }

    /// Raw RGBA bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Save the buffer as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

impl PixelBuffer for ImageBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[self.index(x, y)]
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let index = self.index(x, y);
        self.pixels[index] = rgba;
    }

    fn clear(&mut self, rgba: [u8; 4]) {
        self.pixels.fill(rgba);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_clear() {
        let image = ImageBuffer::new(3, 2);
        assert_eq!(image.as_bytes().len(), 3 * 2 * 4);
        assert!(image.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bottom_left_addressing() {
        let mut image = ImageBuffer::new(2, 2);
        image.set_pixel(0, 0, [1, 2, 3, 4]);

        assert_eq!(image.get_pixel(0, 0), [1, 2, 3, 4]);
        // (0, 0) is the first pixel of the last stored row
        assert_eq!(&image.as_bytes()[8..12], &[1, 2, 3, 4]);
        assert_eq!(&image.as_bytes()[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_pixel_count_does_not_overflow_u32() {
        // 65536 * 65537 wraps to 65536 in u32
        let width: u32 = 65_536;
        let height: u32 = 65_537;
        assert_eq!(width.wrapping_mul(height), 65_536);
        assert_eq!(pixel_count(width, height), 4_295_032_832);
    }

    #[test]
    fn test_clear() {
        let mut image = ImageBuffer::new(4, 4);
        image.clear([9, 9, 9, 255]);
        assert_eq!(image.get_pixel(3, 3), [9, 9, 9, 255]);

        image.clear(CLEAR_COLOR);
        assert_eq!(image.get_pixel(3, 3), CLEAR_COLOR);
    }
}
