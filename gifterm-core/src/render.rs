use crate::frame::Frame;
use crate::grid::{CellGrid, HALF_BLOCK};
use crate::palette::AttributeTable;

/// How source pixels are packed into cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// One pixel per cell.
    Standard,
    /// Two vertically stacked pixels per cell using [`HALF_BLOCK`].
    #[default]
    HiRes,
}

impl RenderMode {
    pub fn render(self, frame: &Frame, table: &AttributeTable, grid: &mut CellGrid) {
        match self {
            RenderMode::Standard => render_frame(frame, table, grid),
            RenderMode::HiRes => render_frame_hires(frame, table, grid),
        }
    }
}

/// Paint one pixel per cell. Opaque pixels set both colors of the cell,
/// transparent pixels and everything outside the frame stay as they were.
pub fn render_frame(frame: &Frame, table: &AttributeTable, grid: &mut CellGrid) {
    let width = grid.width().min(frame.width());
    let height = grid.height().min(frame.height());

    for y in 0..height {
        for x in 0..width {
            let info = table[frame.index_at(x, y)];
            if !info.transparent {
                let cell = grid.cell_mut(x, y);
                cell.fg = info.attr;
                cell.bg = info.attr;
            }
        }
    }
}

/// Paint two source rows per cell row.
///
/// Even rows color the background (top half), odd rows the foreground
/// (bottom half). Every touched cell gets the half block glyph even when
/// both of its pixels are transparent.
pub fn render_frame_hires(frame: &Frame, table: &AttributeTable, grid: &mut CellGrid) {
    let width = grid.width().min(frame.width());
    let height = (grid.height() * 2).min(frame.height());

    for y in 0..height {
        let row = y / 2;
        for x in 0..width {
            let info = table[frame.index_at(x, y)];
            let cell = grid.cell_mut(x, row);
            cell.ch = HALF_BLOCK;
            if info.transparent {
                continue;
            }
            if y & 1 == 0 {
                cell.bg = info.attr;
            } else {
                cell.fg = info.attr;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::color::{ColorMapper, RgbCube};
    use crate::frame::{Rect, Rgba};
    use crate::grid::{Attribute, Cell};

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    const CLEAR: Rgba = Rgba::new(0, 0, 0, 0);

    fn frame(width: u16, height: u16, pixels: Vec<u8>, palette: Vec<Rgba>) -> Frame {
        let rect = Rect {
            width,
            height,
            ..Rect::default()
        };
        Frame::new(rect, width as usize, pixels, palette, 0).unwrap()
    }

    fn table(frame: &Frame) -> AttributeTable {
        AttributeTable::from_palette(frame.palette(), &RgbCube)
    }

    /// A grid where every cell is distinguishable from a freshly painted one.
    fn marked_grid(width: usize, height: usize) -> CellGrid {
        let mut grid = CellGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                *grid.get_mut(x, y).unwrap() = Cell {
                    ch: 'x',
                    fg: Attribute(1),
                    bg: Attribute(2),
                };
            }
        }
        grid
    }

    #[test]
    fn red_checkerboard_with_transparent_holes() {
        let f = frame(2, 2, vec![0, 1, 1, 0], vec![RED, CLEAR]);
        let mut grid = marked_grid(2, 2);
        let before = grid.clone();
        render_frame(&f, &table(&f), &mut grid);

        let red = Attribute(197);
        for (x, y) in [(0, 0), (1, 1)] {
            let cell = grid.get(x, y).unwrap();
            assert_eq!((cell.fg, cell.bg), (red, red));
            assert_eq!(cell.ch, 'x');
        }
        for (x, y) in [(1, 0), (0, 1)] {
            assert_eq!(grid.get(x, y), before.get(x, y));
        }
    }

    #[test]
    fn cells_outside_small_frame_untouched() {
        let f = frame(2, 1, vec![0, 0], vec![BLUE]);
        let mut grid = marked_grid(4, 3);
        let before = grid.clone();
        render_frame(&f, &table(&f), &mut grid);

        let blue = RgbCube.map(BLUE).attr;
        for y in 0..3 {
            for x in 0..4 {
                let cell = grid.get(x, y).unwrap();
                if x < 2 && y < 1 {
                    assert_eq!((cell.fg, cell.bg), (blue, blue));
                } else {
                    assert_eq!(Some(cell), before.get(x, y));
                }
            }
        }
    }

    #[test]
    fn frame_larger_than_grid_is_cropped() {
        let f = frame(3, 3, vec![0; 9], vec![RED]);
        let mut grid = CellGrid::new(2, 1);
        render_frame(&f, &table(&f), &mut grid);
        assert!(grid.cells().iter().all(|c| c.bg == Attribute(197)));

        let mut grid = CellGrid::new(2, 1);
        render_frame_hires(&f, &table(&f), &mut grid);
        let cell = grid.get(0, 0).unwrap();
        assert_eq!((cell.ch, cell.fg, cell.bg), (HALF_BLOCK, Attribute(197), Attribute(197)));
    }

    #[test]
    fn empty_frame_or_grid_paints_nothing() {
        let f = frame(0, 0, Vec::new(), Vec::new());
        let mut grid = marked_grid(2, 2);
        let before = grid.clone();
        render_frame(&f, &table(&f), &mut grid);
        render_frame_hires(&f, &table(&f), &mut grid);
        assert_eq!(grid, before);

        let f = frame(1, 1, vec![0], vec![RED]);
        let mut empty = CellGrid::new(0, 0);
        render_frame(&f, &table(&f), &mut empty);
        render_frame_hires(&f, &table(&f), &mut empty);
        assert!(empty.cells().is_empty());
    }

    #[test]
    fn hires_packs_row_pairs() {
        // column 0: red over blue, column 1: blue over transparent
        let f = frame(2, 2, vec![0, 1, 1, 2], vec![RED, BLUE, CLEAR]);
        let mut grid = marked_grid(2, 3);
        let before = grid.clone();
        render_frame_hires(&f, &table(&f), &mut grid);

        let red = RgbCube.map(RED).attr;
        let blue = RgbCube.map(BLUE).attr;
        assert_eq!(
            grid.get(0, 0),
            Some(&Cell { ch: HALF_BLOCK, fg: blue, bg: red })
        );
        assert_eq!(
            grid.get(1, 0),
            Some(&Cell { ch: HALF_BLOCK, fg: Attribute(1), bg: blue })
        );
        for y in 1..3 {
            for x in 0..2 {
                assert_eq!(grid.get(x, y), before.get(x, y));
            }
        }
    }

    #[test]
    fn hires_even_height_touches_half_the_rows() {
        let f = frame(1, 6, vec![0; 6], vec![RED]);
        let mut grid = CellGrid::new(1, 5);
        render_frame_hires(&f, &table(&f), &mut grid);
        let touched = grid.rows().filter(|r| r[0].ch == HALF_BLOCK).count();
        assert_eq!(touched, 3);

        let mut short = CellGrid::new(1, 2);
        render_frame_hires(&f, &table(&f), &mut short);
        assert!(short.cells().iter().all(|c| c.ch == HALF_BLOCK));
    }

    #[test]
    fn hires_fully_transparent_still_sets_glyph() {
        let f = frame(1, 2, vec![0, 0], vec![CLEAR]);
        let mut grid = marked_grid(1, 1);
        render_frame_hires(&f, &table(&f), &mut grid);
        assert_eq!(
            grid.get(0, 0),
            Some(&Cell { ch: HALF_BLOCK, fg: Attribute(1), bg: Attribute(2) })
        );
    }

    #[test]
    fn hires_odd_height_sets_only_top_of_last_row() {
        let f = frame(1, 3, vec![0, 0, 1], vec![RED, BLUE]);
        let mut grid = marked_grid(1, 2);
        render_frame_hires(&f, &table(&f), &mut grid);
        let last = grid.get(0, 1).unwrap();
        assert_eq!(last.bg, RgbCube.map(BLUE).attr);
        assert_eq!(last.fg, Attribute(1));
    }

    #[test]
    fn mode_dispatch() {
        let f = frame(1, 1, vec![0], vec![RED]);
        let mut grid = CellGrid::new(1, 1);
        RenderMode::Standard.render(&f, &table(&f), &mut grid);
        assert_eq!(grid.get(0, 0).unwrap().ch, ' ');
        RenderMode::HiRes.render(&f, &table(&f), &mut grid);
        assert_eq!(grid.get(0, 0).unwrap().ch, HALF_BLOCK);
    }
}
