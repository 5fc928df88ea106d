//! Grid dimensions and cell indexing.

use crate::error::FieldError;

/// Dimensions of one layer plane: `width` columns (`x`) by `height` rows (`y`).
///
/// Cells are stored x-major within a plane: `index(x, y) = x * height + y`.
/// The outermost ring of cells is the border; everything else is interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    width: u32,
    height: u32,
}

impl GridShape {
    /// Maximum dimension size: seed centres are offset in `i64` and
    /// interior loops use `usize`, so each axis must fit in `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with `width * height` cells.
    ///
    /// Returns `Err(FieldError::EmptyGrid)` if either dimension is 0, or
    /// `Err(FieldError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tincture_field::GridShape;
    ///
    /// let grid = GridShape::new(200, 200).unwrap();
    /// assert_eq!(grid.cell_count(), 40_000);
    /// assert!(grid.is_interior(1, 1));
    /// assert!(!grid.is_interior(0, 5));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(FieldError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(FieldError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cells in one layer plane.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Flat index of `(x, y)` within a plane. Caller guarantees bounds.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x * self.height as usize + y
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Whether `(x, y)` is an interior cell (not on the one-cell border).
    pub fn is_interior(&self, x: u32, y: u32) -> bool {
        x >= 1 && y >= 1 && x < self.width.saturating_sub(1) && y < self.height.saturating_sub(1)
    }

    /// Number of interior cells; zero for grids narrower than 3 on either axis.
    pub fn interior_count(&self) -> usize {
        (self.width.saturating_sub(2) as usize) * (self.height.saturating_sub(2) as usize)
    }
}
