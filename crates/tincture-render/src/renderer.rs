//! Field-to-pixel blending.

use smallvec::SmallVec;
use tincture_core::Rgb;
use tincture_field::{FieldStore, GridShape};

use crate::error::RenderError;
use crate::frame::Frame;

/// Rescale `(r, g, b)` so no channel exceeds 1, then lift by the floor.
///
/// If `max(r, g, b) > 1` all three are divided by that maximum, keeping
/// their ratios. Each channel then becomes `c * (1 - min_brightness) +
/// min_brightness`.
///
/// ```
/// use tincture_render::normalize_color;
///
/// let [r, g, b] = normalize_color([0.0, 0.0, 0.0], 0.3);
/// assert_eq!((r, g, b), (0.3, 0.3, 0.3));
/// ```
pub fn normalize_color(rgb: [f64; 3], min_brightness: f64) -> [f64; 3] {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let scale = if max > 1.0 { 1.0 / max } else { 1.0 };
    rgb.map(|c| c * scale * (1.0 - min_brightness) + min_brightness)
}

/// Map a unit channel to a byte, truncating.
#[inline]
fn to_byte(c: f64) -> u8 {
    (c * 255.0) as u8
}

/// Renders layer intensities to BGRA pixels.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    min_brightness: f64,
}

impl FrameRenderer {
    /// Reference brightness floor.
    pub const DEFAULT_MIN_BRIGHTNESS: f64 = 0.3;

    /// Create a renderer with the given brightness floor in `[0, 1]`.
    pub fn new(min_brightness: f64) -> Result<Self, RenderError> {
        if !(0.0..=1.0).contains(&min_brightness) {
            return Err(RenderError::InvalidMinBrightness {
                value: min_brightness,
            });
        }
        Ok(Self { min_brightness })
    }

    /// Configured brightness floor.
    pub fn min_brightness(&self) -> f64 {
        self.min_brightness
    }

    /// Render `field` (one plane per colour) into `frame`.
    ///
    /// Pixel `(x, y)` comes from cell `(x, y)`. Row padding is not written.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is not `shape`-sized or if `field` does not hold
    /// exactly one plane per colour.
    pub fn render(&self, field: &[f64], shape: GridShape, colors: &[Rgb], frame: &mut Frame) {
        assert_eq!(
            (frame.width(), frame.height()),
            (shape.width(), shape.height()),
            "frame does not match grid"
        );
        let plane = shape.cell_count();
        assert_eq!(
            field.len(),
            plane * colors.len(),
            "field is not one plane per colour"
        );

        let units: SmallVec<[[f64; 3]; 16]> = colors.iter().map(|c| c.to_unit()).collect();
        for y in 0..shape.height() {
            for x in 0..shape.width() {
                let i = shape.index(x as usize, y as usize);
                let mut rgb = [0.0; 3];
                for (layer, unit) in units.iter().enumerate() {
                    let v = field[layer * plane + i];
                    rgb[0] += unit[0] * v;
                    rgb[1] += unit[1] * v;
                    rgb[2] += unit[2] * v;
                }
                let [r, g, b] = normalize_color(rgb, self.min_brightness);
                frame.put_rgb(x, y, to_byte(r), to_byte(g), to_byte(b));
            }
        }
    }

    /// Render the current buffer of `store` with its layer colours.
    pub fn render_store(&self, store: &FieldStore, frame: &mut Frame) {
        let colors: SmallVec<[Rgb; 16]> =
            store.layers().iter().map(|(_, layer)| layer.color).collect();
        self.render(store.current(), store.shape(), &colors, frame);
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self {
            min_brightness: Self::DEFAULT_MIN_BRIGHTNESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::PixelLayout;

    fn frame(w: u32, h: u32) -> Frame {
        Frame::new(PixelLayout::tight(w, h).unwrap())
    }

    #[test]
    fn invalid_floor_rejected() {
        assert!(FrameRenderer::new(-0.1).is_err());
        assert!(FrameRenderer::new(1.5).is_err());
        assert!(FrameRenderer::new(f64::NAN).is_err());
        assert!(FrameRenderer::new(1.0).is_ok());
    }

    #[test]
    fn empty_cell_renders_at_floor() {
        let g = GridShape::new(2, 2).unwrap();
        let mut f = frame(2, 2);
        FrameRenderer::default().render(&[0.0; 4], g, &[Rgb::new(200, 100, 50)], &mut f);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(f.pixel(x, y), Some([76, 76, 76, 255]));
            }
        }
    }

    #[test]
    fn saturated_cell_rescaled_to_unit_max() {
        let out = normalize_color([3.0, 1.5, 0.0], 0.0);
        assert_eq!(out, [1.0, 0.5, 0.0]);
    }

    #[test]
    fn unsaturated_cell_not_rescaled() {
        let out = normalize_color([0.5, 0.25, 0.0], 0.0);
        assert_eq!(out, [0.5, 0.25, 0.0]);
    }

    #[test]
    fn full_white_layer_renders_white() {
        let g = GridShape::new(1, 1).unwrap();
        let mut f = frame(1, 1);
        FrameRenderer::default().render(&[1.0], g, &[Rgb::new(255, 255, 255)], &mut f);
        assert_eq!(f.pixel(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn pixel_reads_field_at_same_coordinate() {
        // 3 wide, 2 tall: cell (2, 0) lit in red only
        let g = GridShape::new(3, 2).unwrap();
        let mut field = vec![0.0; 6];
        field[g.index(2, 0)] = 1.0;
        let mut f = frame(3, 2);
        FrameRenderer::new(0.0)
            .unwrap()
            .render(&field, g, &[Rgb::new(255, 0, 0)], &mut f);
        assert_eq!(f.pixel(2, 0), Some([0, 0, 255, 255]));
        assert_eq!(f.pixel(0, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    #[should_panic(expected = "frame does not match grid")]
    fn mismatched_frame_panics() {
        let g = GridShape::new(2, 2).unwrap();
        let mut f = frame(3, 2);
        FrameRenderer::default().render(&[0.0; 4], g, &[Rgb::new(50, 50, 50)], &mut f);
    }
}
