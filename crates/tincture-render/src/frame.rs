//! BGRA pixel buffers.

use crate::error::RenderError;

/// Bytes per pixel: blue, green, red, alpha.
pub const BYTES_PER_PIXEL: usize = 4;

/// Geometry of a pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelLayout {
    width: u32,
    height: u32,
    stride: usize,
}

impl PixelLayout {
    /// Tightly packed rows (`stride = width * 4`).
    pub fn tight(width: u32, height: u32) -> Result<Self, RenderError> {
        Self::with_stride(width, height, width as usize * BYTES_PER_PIXEL)
    }

    /// Rows `stride` bytes apart; bytes past `width * 4` in each row are
    /// padding and are never written.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyFrame);
        }
        let min = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(RenderError::SizeOverflow)?;
        if stride < min {
            return Err(RenderError::StrideTooSmall { stride, min });
        }
        stride
            .checked_mul(height as usize)
            .ok_or(RenderError::SizeOverflow)?;
        Ok(Self {
            width,
            height,
            stride,
        })
    }

    /// Pixels per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Total buffer size in bytes.
    pub fn byte_len(&self) -> usize {
        self.stride * self.height as usize
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize * BYTES_PER_PIXEL
    }
}

/// An owned BGRA frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    layout: PixelLayout,
    pixels: Vec<u8>,
}

impl Frame {
    /// A zeroed frame with the given geometry.
    pub fn new(layout: PixelLayout) -> Self {
        Self {
            layout,
            pixels: vec![0; layout.byte_len()],
        }
    }

    /// Frame geometry.
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Pixels per row.
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    /// Bytes between row starts.
    pub fn stride(&self) -> usize {
        self.layout.stride
    }

    /// The raw buffer, padding included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// The raw buffer, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Pixel `(x, y)` as `[b, g, r, a]`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.layout.width || y >= self.layout.height {
            return None;
        }
        let o = self.layout.offset(x, y);
        let mut px = [0; 4];
        px.copy_from_slice(&self.pixels[o..o + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Write pixel `(x, y)` from its RGB channels, alpha opaque.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the frame.
    #[inline]
    pub fn put_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let o = self.layout.offset(x, y);
        self.pixels[o..o + BYTES_PER_PIXEL].copy_from_slice(&[b, g, r, u8::MAX]);
    }

    /// Row `y` without its padding.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.layout.stride;
        &self.pixels[start..start + self.layout.width as usize * BYTES_PER_PIXEL]
    }

    /// Zero every byte, padding included.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tight_layout_has_no_padding() {
        let l = PixelLayout::tight(10, 3).unwrap();
        assert_eq!(l.stride(), 40);
        assert_eq!(l.byte_len(), 120);
    }

    #[test]
    fn stride_too_small_rejected() {
        assert_eq!(
            PixelLayout::with_stride(10, 3, 39),
            Err(RenderError::StrideTooSmall { stride: 39, min: 40 })
        );
    }

    #[test]
    fn empty_frame_rejected() {
        assert_eq!(PixelLayout::tight(0, 4), Err(RenderError::EmptyFrame));
    }

    #[test]
    fn put_rgb_writes_bgra() {
        let mut f = Frame::new(PixelLayout::with_stride(2, 2, 12).unwrap());
        f.put_rgb(1, 1, 10, 20, 30);
        assert_eq!(f.pixel(1, 1), Some([30, 20, 10, 255]));
        assert_eq!(&f.as_bytes()[16..20], &[30, 20, 10, 255]);
        assert_eq!(f.pixel(2, 0), None);
    }

    #[test]
    fn row_excludes_padding() {
        let f = Frame::new(PixelLayout::with_stride(3, 2, 16).unwrap());
        assert_eq!(f.row(1).len(), 12);
        assert_eq!(f.as_bytes().len(), 32);
    }
}
