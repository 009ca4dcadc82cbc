/// Fixed geometry of the sprite atlas grid.
///
/// The atlas is a single image of equally sized square cells; an item's
/// `iconIndex` addresses one cell in row-major order. Geometry is
/// configuration, never discovered from the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Width and height of one icon cell in pixels
    pub icon_size: u32,

    /// Grid width in cells
    pub columns: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            icon_size: 64,
            columns: 23,
        }
    }
}

impl GridConfig {
    pub fn new(icon_size: u32, columns: u32) -> Self {
        Self { icon_size, columns }
    }

    /// The atlas width this grid implies.
    pub fn atlas_width(&self) -> u32 {
        self.columns * self.icon_size
    }

    /// Pixel origin (top-left corner) of a cell.
    pub fn cell_origin(&self, index: u32) -> (u32, u32) {
        let col = index % self.columns;
        let row = index / self.columns;
        (col * self.icon_size, row * self.icon_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let grid = GridConfig::default();
        assert_eq!(grid.icon_size, 64);
        assert_eq!(grid.columns, 23);
        assert_eq!(grid.atlas_width(), 1472);
    }

    #[test]
    fn test_cell_origin_row_major() {
        let grid = GridConfig::new(64, 23);

        assert_eq!(grid.cell_origin(0), (0, 0));
        assert_eq!(grid.cell_origin(1), (64, 0));
        assert_eq!(grid.cell_origin(22), (22 * 64, 0));
        // First cell of the second row
        assert_eq!(grid.cell_origin(23), (0, 64));
        assert_eq!(grid.cell_origin(24), (64, 64));
        assert_eq!(grid.cell_origin(47), (64, 128));
    }
}
