use voxspace_core::error::ConfigurationError;
use voxspace_core::math::{cell_of, wrap_index};
use voxspace_core::types::Rgb;

/// Fixed-size 2D grid stored row-major (`y * width + x`).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Terrain elevation per map cell.
pub type HeightGrid = Grid<u8>;

/// Terrain color per map cell, aligned cell-for-cell with a `HeightGrid`.
pub type ColorGrid = Grid<Rgb>;

/// Cell count for a `width` x `height` grid. `actual` is the length reported
/// when the product overflows.
fn cell_count(width: usize, height: usize, actual: usize) -> Result<usize, ConfigurationError> {
    if width == 0 || height == 0 {
        return Err(ConfigurationError::EmptyGrid);
    }
    width
        .checked_mul(height)
        .ok_or(ConfigurationError::GridDataLength {
            expected: usize::MAX,
            actual,
        })
}

impl<T: Copy> Grid<T> {
    /// Wrap existing row-major data. `cells.len()` must equal `width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self, ConfigurationError> {
        let expected = cell_count(width, height, cells.len())?;
        if cells.len() != expected {
            return Err(ConfigurationError::GridDataLength {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, ConfigurationError> {
        let len = cell_count(width, height, 0)?;
        Self::new(width, height, vec![value; len])
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, ConfigurationError> {
        let mut cells = Vec::with_capacity(cell_count(width, height, 0)?);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self::new(width, height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Cell at arbitrary integer coordinates, wrapped by floor-modulo.
    #[inline]
    pub fn get_wrapped(&self, x: i64, y: i64) -> T {
        let ix = wrap_index(x, self.width);
        let iy = wrap_index(y, self.height);
        self.cells[iy * self.width + ix]
    }
}

/// Paired height and color grids with toroidal addressing.
///
/// Both grids share dimensions; this is checked once at construction so
/// lookups never fail.
#[derive(Debug, Clone)]
pub struct TerrainMaps {
    heights: HeightGrid,
    colors: ColorGrid,
}

impl TerrainMaps {
    pub fn new(heights: HeightGrid, colors: ColorGrid) -> Result<Self, ConfigurationError> {
        if heights.dims() != colors.dims() {
            return Err(ConfigurationError::GridSizeMismatch {
                height_dims: heights.dims(),
                color_dims: colors.dims(),
            });
        }
        log::debug!(
            "Terrain maps ready: {}x{} cells",
            heights.width(),
            heights.height()
        );
        Ok(Self { heights, colors })
    }

    /// Uniform terrain of constant height and color.
    pub fn flat(
        width: usize,
        height: usize,
        terrain_height: u8,
        color: Rgb,
    ) -> Result<Self, ConfigurationError> {
        Self::new(
            Grid::filled(width, height, terrain_height)?,
            Grid::filled(width, height, color)?,
        )
    }

    pub fn width(&self) -> usize {
        self.heights.width()
    }

    pub fn height_cells(&self) -> usize {
        self.heights.height()
    }

    pub fn heights(&self) -> &HeightGrid {
        &self.heights
    }

    pub fn colors(&self) -> &ColorGrid {
        &self.colors
    }

    #[inline]
    pub fn height(&self, x: i64, y: i64) -> u8 {
        self.heights.get_wrapped(x, y)
    }

    #[inline]
    pub fn color(&self, x: i64, y: i64) -> Rgb {
        self.colors.get_wrapped(x, y)
    }

    /// Height and color of the cell containing a real map position.
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> (u8, Rgb) {
        let ix = wrap_index(cell_of(x), self.width());
        let iy = wrap_index(cell_of(y), self.height_cells());
        let idx = iy * self.width() + ix;
        (self.heights.cells[idx], self.colors.cells[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_maps() -> TerrainMaps {
        let heights = Grid::from_fn(5, 3, |x, y| (x * 10 + y) as u8).unwrap();
        let colors = Grid::from_fn(5, 3, |x, y| Rgb::new(x as u8, y as u8, 7)).unwrap();
        TerrainMaps::new(heights, colors).unwrap()
    }

    #[test]
    fn test_grid_row_major_layout() {
        let grid = Grid::from_fn(3, 2, |x, y| (y * 3 + x) as u8).unwrap();
        assert_eq!(grid.cells(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(grid.get_wrapped(2, 1), 5);
    }

    #[test]
    fn test_grid_rejects_empty() {
        assert_eq!(
            Grid::<u8>::new(0, 4, Vec::new()),
            Err(ConfigurationError::EmptyGrid)
        );
        assert_eq!(
            Grid::filled(4, 0, 0u8),
            Err(ConfigurationError::EmptyGrid)
        );
    }

    #[test]
    fn test_grid_rejects_wrong_length() {
        assert_eq!(
            Grid::new(2, 2, vec![0u8; 3]),
            Err(ConfigurationError::GridDataLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_grid_rejects_overflowing_dims() {
        let overflow = ConfigurationError::GridDataLength {
            expected: usize::MAX,
            actual: 0,
        };
        assert_eq!(Grid::filled(usize::MAX, 2, 0u8), Err(overflow.clone()));
        assert_eq!(
            Grid::from_fn(2, usize::MAX, |_, _| Rgb::BLACK),
            Err(overflow)
        );
        assert_eq!(
            Grid::new(usize::MAX / 2 + 1, 2, vec![0u8; 3]),
            Err(ConfigurationError::GridDataLength {
                expected: usize::MAX,
                actual: 3
            })
        );
    }

    #[test]
    fn test_maps_reject_mismatched_dims() {
        let heights = Grid::filled(4, 4, 0u8).unwrap();
        let colors = Grid::filled(4, 5, Rgb::BLACK).unwrap();
        let err = TerrainMaps::new(heights, colors).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::GridSizeMismatch {
                height_dims: (4, 4),
                color_dims: (4, 5)
            }
        );
    }

    #[test]
    fn test_height_wraps_in_both_directions() {
        let maps = gradient_maps();
        for x in -12i64..12 {
            for y in -7i64..7 {
                let h = maps.height(x, y);
                for k in 1..4 {
                    assert_eq!(maps.height(x + k * 5, y), h);
                    assert_eq!(maps.height(x - k * 5, y), h);
                    assert_eq!(maps.height(x, y + k * 3), h);
                    assert_eq!(maps.height(x, y - k * 3), h);
                }
            }
        }
    }

    #[test]
    fn test_negative_coords_use_floor_modulo() {
        let maps = gradient_maps();
        // x = -1 -> 4, y = -1 -> 2
        assert_eq!(maps.height(-1, -1), 42);
        assert_eq!(maps.color(-1, -1), Rgb::new(4, 2, 7));
        assert_eq!(maps.color(-6, -4), Rgb::new(4, 2, 7));
    }

    #[test]
    fn test_color_wraps_like_height() {
        let maps = gradient_maps();
        for x in -10i64..10 {
            assert_eq!(maps.color(x, 1), maps.color(x + 15, 1 - 6));
        }
    }

    #[test]
    fn test_sample_truncates_then_wraps() {
        let maps = gradient_maps();
        assert_eq!(maps.sample(2.9, 1.2), (21, Rgb::new(2, 1, 7)));
        // -0.5 truncates to cell 0, -1.5 to cell -1 which wraps to 4
        assert_eq!(maps.sample(-0.5, 0.0).0, 0);
        assert_eq!(maps.sample(-1.5, 0.0).0, 40);
    }

    #[test]
    fn test_flat_maps() {
        let maps = TerrainMaps::flat(4, 4, 17, Rgb::new(200, 150, 100)).unwrap();
        assert_eq!(maps.height(123, -456), 17);
        assert_eq!(maps.color(-9, 9), Rgb::new(200, 150, 100));
        assert_eq!(maps.width(), 4);
        assert_eq!(maps.height_cells(), 4);
    }
}
