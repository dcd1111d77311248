use tracing::debug;

use crate::color::ColorMapper;
use crate::frame::Frame;
use crate::grid::CellGrid;
use crate::palette::{build_tables, AttributeTable};
use crate::render::RenderMode;

/// Looping playback position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationState {
    frame_index: usize,
    frame_count: usize,
    ticks: u64,
}

impl AnimationState {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_index: 0,
            frame_count,
            ticks: 0,
        }
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Step to the next frame, wrapping to 0 after the last one.
    pub fn advance(&mut self) {
        self.ticks += 1;
        if self.frame_count == 0 {
            return;
        }
        self.frame_index = (self.ticks % self.frame_count as u64) as usize;
    }
}

/// Decoded frames together with their precomputed attribute tables.
#[derive(Debug)]
pub struct Animation {
    frames: Vec<Frame>,
    tables: Vec<AttributeTable>,
    state: AnimationState,
}

impl Animation {
    /// Tables are computed here, once, not per tick.
    pub fn new(frames: Vec<Frame>, mapper: &dyn ColorMapper) -> Self {
        let tables = build_tables(&frames, mapper);
        debug!(frames = frames.len(), "built attribute tables");
        let state = AnimationState::new(frames.len());
        Self {
            frames,
            tables,
            state,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn tables(&self) -> &[AttributeTable] {
        &self.tables
    }

    /// Paint the current frame. With `clear` the grid is blanked first so
    /// transparent pixels show the terminal default instead of the previous
    /// frame.
    pub fn paint(&self, grid: &mut CellGrid, mode: RenderMode, clear: bool) {
        if clear {
            grid.clear();
        }
        let idx = self.state.frame_index;
        if let (Some(frame), Some(table)) = (self.frames.get(idx), self.tables.get(idx)) {
            mode.render(frame, table, grid);
        }
    }

    pub fn advance(&mut self) {
        self.state.advance();
    }
}
