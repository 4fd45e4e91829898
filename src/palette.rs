//! Indexed color map 0.
//!
//! A [`Palette`] maps small integer indices to colors.  Index 0 is
//! the page background and index 1 the foreground used for the box,
//! the ticks and the labels.  The remaining entries are pens for the
//! data.

use std::fmt::{self, Display, Formatter};
use crate::{Error, Result};

/// An 8-bit per channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    const fn hex(v: u32) -> Self {
        Rgb { r: (v >> 16) as u8, g: (v >> 8) as u8, b: v as u8 }
    }
}

/// Formats as `#rrggbb`, which Matplotlib accepts as a color.
impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const DEFAULT: [Rgb; 16] = [
    Rgb::hex(0x000000), // black
    Rgb::hex(0xff0000), // red
    Rgb::hex(0xffff00), // yellow
    Rgb::hex(0x00ff00), // green
    Rgb::hex(0x7fffd4), // aquamarine
    Rgb::hex(0xffc0cb), // pink
    Rgb::hex(0xf5deb3), // wheat
    Rgb::hex(0xbebebe), // grey
    Rgb::hex(0xa52a2a), // brown
    Rgb::hex(0x0000ff), // blue
    Rgb::hex(0x8a2be2), // blue violet
    Rgb::hex(0x00ffff), // cyan
    Rgb::hex(0x40e0d0), // turquoise
    Rgb::hex(0xff00ff), // magenta
    Rgb::hex(0xfa8072), // salmon
    Rgb::hex(0xffffff), // white
];

const ALTERNATE: [Rgb; 16] = [
    Rgb::hex(0xffffff), // white
    Rgb::hex(0x000000), // black
    Rgb::hex(0xff0000), // red
    Rgb::hex(0x00a000), // dark green
    Rgb::hex(0x008b8b), // dark cyan
    Rgb::hex(0xff69b4), // hot pink
    Rgb::hex(0x8b4513), // saddle brown
    Rgb::hex(0x808080), // grey
    Rgb::hex(0xa52a2a), // brown
    Rgb::hex(0x0000ff), // blue
    Rgb::hex(0x8a2be2), // blue violet
    Rgb::hex(0x00bfff), // deep sky blue
    Rgb::hex(0x20b2aa), // light sea green
    Rgb::hex(0xff00ff), // magenta
    Rgb::hex(0xfa8072), // salmon
    Rgb::hex(0xd3d3d3), // light grey
];

/// Color map 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: &'static str,
    colors: Vec<Rgb>,
}

impl Default for Palette {
    /// Black background, red foreground.
    fn default() -> Self {
        Palette { name: "default", colors: DEFAULT.to_vec() }
    }
}

impl Palette {
    /// White background, black foreground.  The data pens are picked
    /// to stay readable on white.
    pub fn alternate() -> Self {
        Palette { name: "alternate", colors: ALTERNATE.to_vec() }
    }

    /// Look up one of the built-in palettes.
    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Palette::default()),
            "alternate" => Ok(Palette::alternate()),
            _ => Err(Error::UnknownPalette(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Return the color at `index`.
    pub fn get(&self, index: usize) -> Result<Rgb> {
        self.colors.get(index).copied().ok_or(Error::ColorIndex {
            index,
            len: self.colors.len(),
        })
    }

    pub fn background(&self) -> Rgb {
        self.colors[0]
    }

    pub fn foreground(&self) -> Rgb {
        self.colors[1]
    }
}
