//! Visual theme palettes
//!
//! A palette is picked by (mode, stage). The stage cycles with elapsed time;
//! the mode is a player preference toggled by the host.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` or `#rrggbbaa`
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Scene colors for one theme stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgba,
    pub ground: Rgba,
    pub cloud: Rgba,
}

/// Light or dark palette family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn palettes(self) -> &'static [Palette; PALETTE_STAGES] {
        match self {
            ThemeMode::Light => &LIGHT_PALETTES,
            ThemeMode::Dark => &DARK_PALETTES,
        }
    }

    /// Palette for `stage`, wrapping past the last one
    pub fn palette(self, stage: usize) -> Palette {
        self.palettes()[stage % PALETTE_STAGES]
    }
}

/// Number of stages in each palette family
pub const PALETTE_STAGES: usize = 5;

pub const LIGHT_PALETTES: [Palette; PALETTE_STAGES] = [
    Palette {
        background: Rgba::rgb(0xf5, 0xf7, 0xfa),
        ground: Rgba::rgb(0x3a, 0x3a, 0x3a),
        cloud: Rgba::rgba(255, 255, 255, 204),
    },
    Palette {
        background: Rgba::rgb(0xb3, 0xd9, 0xff),
        ground: Rgba::rgb(0x33, 0x66, 0x99),
        cloud: Rgba::rgba(255, 255, 255, 204),
    },
    Palette {
        background: Rgba::rgb(0xff, 0xe6, 0xcc),
        ground: Rgba::rgb(0xcc, 0x88, 0x00),
        cloud: Rgba::rgba(255, 255, 255, 179),
    },
    Palette {
        background: Rgba::rgb(0xe0, 0xf7, 0xfa),
        ground: Rgba::rgb(0x00, 0x79, 0x6b),
        cloud: Rgba::rgba(255, 255, 255, 204),
    },
    Palette {
        background: Rgba::rgb(0xf0, 0xf4, 0xc3),
        ground: Rgba::rgb(0x82, 0x77, 0x17),
        cloud: Rgba::rgba(255, 255, 255, 179),
    },
];

pub const DARK_PALETTES: [Palette; PALETTE_STAGES] = [
    Palette {
        background: Rgba::rgb(0x1a, 0x1a, 0x2e),
        ground: Rgba::rgb(0x16, 0x21, 0x3e),
        cloud: Rgba::rgba(100, 100, 150, 102),
    },
    Palette {
        background: Rgba::rgb(0x0d, 0x1b, 0x2a),
        ground: Rgba::rgb(0x1b, 0x26, 0x3b),
        cloud: Rgba::rgba(70, 90, 120, 128),
    },
    Palette {
        background: Rgba::rgb(0x2c, 0x3e, 0x50),
        ground: Rgba::rgb(0x1a, 0x25, 0x30),
        cloud: Rgba::rgba(80, 100, 130, 102),
    },
    Palette {
        background: Rgba::rgb(0x25, 0x25, 0x25),
        ground: Rgba::rgb(0x15, 0x15, 0x15),
        cloud: Rgba::rgba(80, 80, 80, 128),
    },
    Palette {
        background: Rgba::rgb(0x3e, 0x1f, 0x47),
        ground: Rgba::rgb(0x29, 0x10, 0x30),
        cloud: Rgba::rgba(120, 80, 140, 102),
    },
];
