use std::fmt;

use crate::frame::Rgba;
use crate::grid::Attribute;

/// First attribute of the 6x6x6 color cube.
pub const CUBE_BASE: u16 = 17;
/// First attribute of the grayscale ramp.
pub const GRAY_BASE: u16 = 1;
/// Luma values per grayscale step.
const GRAY_STEP: u16 = 11;

/// A palette entry translated for the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeInfo {
    pub attr: Attribute,
    /// Leave the cell as it is instead of painting it.
    pub transparent: bool,
}

impl AttributeInfo {
    /// Value of table slots no palette entry was written to.
    pub const UNUSED: AttributeInfo = AttributeInfo {
        attr: Attribute::DEFAULT,
        transparent: true,
    };

    pub const fn opaque(attr: u16) -> Self {
        Self {
            attr: Attribute(attr),
            transparent: false,
        }
    }
}

/// Maps one source color to a terminal attribute.
pub trait ColorMapper {
    fn map(&self, color: Rgba) -> AttributeInfo;
}

/// Quantizes to the 24-step grayscale ramp (attributes 1..=24).
#[derive(Clone, Copy, Debug, Default)]
pub struct Grayscale;

/// Quantizes to the 6x6x6 color cube (attributes 17..=232).
#[derive(Clone, Copy, Debug, Default)]
pub struct RgbCube;

/// Perceptual luma in 0..=255 using the ITU-R 601 weights in 16-bit fixed point.
pub fn luma(color: Rgba) -> u8 {
    let r = color.r as u32 * 0x101;
    let g = color.g as u32 * 0x101;
    let b = color.b as u32 * 0x101;
    ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
}

impl ColorMapper for Grayscale {
    fn map(&self, color: Rgba) -> AttributeInfo {
        AttributeInfo {
            attr: Attribute(luma(color) as u16 / GRAY_STEP + GRAY_BASE),
            transparent: color.a == 0,
        }
    }
}

#[inline]
fn cube_bucket(channel: u8) -> u16 {
    channel as u16 * 6 / 256
}

impl ColorMapper for RgbCube {
    fn map(&self, color: Rgba) -> AttributeInfo {
        let index = cube_bucket(color.r) * 36 + cube_bucket(color.g) * 6 + cube_bucket(color.b);
        AttributeInfo {
            attr: Attribute(index + CUBE_BASE),
            transparent: color.a == 0,
        }
    }
}

/// How attributes are turned into colors on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Attribute `a` is 256-color index `a - 1`.
    Palette256,
    /// Attribute `a` is grayscale ramp entry `a - 1` (256-color index `232 + a - 1`).
    Grayscale,
}

impl OutputMode {
    /// The 256-color index for an attribute, `None` for the default color.
    pub fn color_index(self, attr: Attribute) -> Option<u8> {
        if attr == Attribute::DEFAULT {
            return None;
        }
        let idx = attr.0 - 1;
        match self {
            OutputMode::Palette256 => u8::try_from(idx).ok(),
            OutputMode::Grayscale => u8::try_from(232 + idx.min(23)).ok(),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Palette256 => f.write_str("256-color"),
            OutputMode::Grayscale => f.write_str("grayscale"),
        }
    }
}

/// Mapper selection made once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapperKind {
    Grayscale,
    #[default]
    RgbCube,
}

impl MapperKind {
    pub fn mapper(self) -> &'static dyn ColorMapper {
        match self {
            MapperKind::Grayscale => &Grayscale,
            MapperKind::RgbCube => &RgbCube,
        }
    }

    /// Output mode whose attribute layout this mapper targets.
    pub fn output_mode(self) -> OutputMode {
        match self {
            MapperKind::Grayscale => OutputMode::Grayscale,
            MapperKind::RgbCube => OutputMode::Palette256,
        }
    }
}
