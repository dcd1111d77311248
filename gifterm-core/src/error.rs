use std::io;

use thiserror::Error;

use crate::color::OutputMode;

/// The terminal could not be put into the color mode the animation needs.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("terminal reports {colors} colors, {mode} output needs 256")]
    UnsupportedColorMode { mode: OutputMode, colors: u16 },

    #[error("terminal setup failed: {0}")]
    Terminal(#[from] io::Error),
}

/// Input that cannot be turned into renderable frames.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("gif decoding failed: {0}")]
    Gif(#[from] gif::DecodingError),

    #[error("frame {0} has neither a local nor a global palette")]
    NoPalette(usize),

    #[error("palette has {0} entries, at most 256 are allowed")]
    PaletteTooLarge(usize),

    #[error("stride {stride} is narrower than the frame width {width}")]
    StrideTooSmall { stride: usize, width: usize },

    #[error("pixel buffer holds {len} bytes, {needed} are needed")]
    BufferTooSmall { len: usize, needed: usize },

    #[error("pixel ({x}, {y}) uses index {index} but the palette has {palette_len} entries")]
    IndexOutOfRange {
        index: u8,
        x: usize,
        y: usize,
        palette_len: usize,
    },
}
