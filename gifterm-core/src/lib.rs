//! Render indexed-color animations into a terminal cell grid.
//!
//! Frames are decoded once, each frame's palette is turned into an
//! [`AttributeTable`](palette::AttributeTable) once, and every tick the
//! current frame is painted into a [`CellGrid`](grid::CellGrid), either one
//! pixel per cell or two pixels per cell with a half block glyph.

pub mod animation;
pub mod color;
pub mod decode;
pub mod driver;
pub mod error;
pub mod frame;
pub mod grid;
pub mod palette;
pub mod render;
