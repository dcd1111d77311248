/// Lower half block: foreground paints the bottom half, background the top.
pub const HALF_BLOCK: char = '▄';

/// A terminal color attribute. 0 selects the terminal's default color;
/// how other values map to real colors depends on the output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attribute(pub u16);

impl Attribute {
    pub const DEFAULT: Attribute = Attribute(0);
}

/// One terminal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Attribute,
    pub bg: Attribute,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Attribute::DEFAULT,
            bg: Attribute::DEFAULT,
        }
    }
}

/// Row-major cell buffer addressed by `x + y * width`.
///
/// The terminal side owns the grid and keeps it sized to the screen;
/// renderers only mutate cells inside the current dimensions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Match new screen dimensions. Contents are reset only when the size
    /// actually changes.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, Cell::default());
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(x + y * self.width)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            self.cells.get_mut(x + y * self.width)
        } else {
            None
        }
    }

    /// Unchecked-by-contract access for renderers that already clipped
    /// their loops to the grid.
    #[inline]
    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        debug_assert!(x < self.width && y < self.height);
        &mut self.cells[x + y * self.width]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // a zero-width grid holds no cells, so the clamped chunk size yields nothing
        self.cells.chunks(self.width.max(1))
    }
}
