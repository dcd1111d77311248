use crate::error::DecodeError;

/// Largest palette a GIF frame can carry.
pub const MAX_PALETTE: usize = 256;

/// An 8-bit straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build from 16-bit channels (0..=65535) by keeping the high byte.
    pub const fn from_rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self {
            r: (r >> 8) as u8,
            g: (g >> 8) as u8,
            b: (b >> 8) as u8,
            a: (a >> 8) as u8,
        }
    }
}

/// Frame rectangle inside the logical screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

/// One decoded frame: a palette-index buffer plus the frame's own palette.
///
/// The rectangle origin is kept for information only; frames are always
/// painted from the top-left cell of the grid. Fields are private so every
/// frame has passed the checks in [`Frame::new`]:
///
/// ```compile_fail
/// use gifterm_core::frame::{Frame, Rect};
///
/// let mut frame = Frame::new(Rect::default(), 0, Vec::new(), Vec::new(), 0).unwrap();
/// frame.pixels.push(7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rect: Rect,
    /// Distance in bytes between the starts of consecutive rows.
    stride: usize,
    pixels: Vec<u8>,
    palette: Vec<Rgba>,
    /// Display time in hundredths of a second, as stored in the file.
    delay: u16,
}

impl Frame {
    /// Validate and assemble a frame.
    ///
    /// Every index inside the visible rectangle must select an entry of
    /// `palette`, so renderers can look indices up without checking.
    pub fn new(
        rect: Rect,
        stride: usize,
        pixels: Vec<u8>,
        palette: Vec<Rgba>,
        delay: u16,
    ) -> Result<Self, DecodeError> {
        if palette.len() > MAX_PALETTE {
            return Err(DecodeError::PaletteTooLarge(palette.len()));
        }

        let width = rect.width as usize;
        let height = rect.height as usize;
        if stride < width {
            return Err(DecodeError::StrideTooSmall { stride, width });
        }

        if width == 0 || height == 0 {
            return Ok(Self {
                rect,
                stride,
                pixels,
                palette,
                delay,
            });
        }

        let needed = stride * (height - 1) + width;
        if pixels.len() < needed {
            return Err(DecodeError::BufferTooSmall {
                len: pixels.len(),
                needed,
            });
        }

        for y in 0..height {
            let row = &pixels[y * stride..y * stride + width];
            if let Some(x) = row.iter().position(|&i| i as usize >= palette.len()) {
                return Err(DecodeError::IndexOutOfRange {
                    index: row[x],
                    x,
                    y,
                    palette_len: palette.len(),
                });
            }
        }

        Ok(Self {
            rect,
            stride,
            pixels,
            palette,
            delay,
        })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn palette(&self) -> &[Rgba] {
        &self.palette
    }

    pub fn delay(&self) -> u16 {
        self.delay
    }

    pub fn width(&self) -> usize {
        self.rect.width as usize
    }

    pub fn height(&self) -> usize {
        self.rect.height as usize
    }

    /// Palette index of the pixel at (x, y).
    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        self.pixels[x + y * self.stride]
    }
}
