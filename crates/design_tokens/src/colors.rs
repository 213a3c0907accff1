//! Color palettes keyed by numeric shade.

use serde::{Serialize, Serializer};

/// One palette: numeric shades (lighter is lower) mapped to hex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    shades: &'static [(u16, &'static str)],
}

impl ColorScale {
    /// Builds a palette over a static `(shade, hex)` table.
    pub const fn new(shades: &'static [(u16, &'static str)]) -> Self {
        Self { shades }
    }

    /// Returns the hex color for `shade`, if the palette defines it.
    pub fn shade(&self, shade: u16) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|(entry, _)| *entry == shade)
            .map(|(_, hex)| *hex)
    }

    /// Iterates `(shade, hex)` pairs from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> {
        self.shades.iter().copied()
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// All named palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Colors {
    /// Brand palette used for emphasis and primary actions.
    pub primary: ColorScale,
    /// Greys for text, surfaces, and outlines.
    pub neutral: ColorScale,
}

impl Colors {
    /// Returns the palette called `name`.
    pub fn palette(&self, name: &str) -> Option<&ColorScale> {
        match name {
            "primary" => Some(&self.primary),
            "neutral" => Some(&self.neutral),
            _ => None,
        }
    }
}

/// Shipped palettes.
pub const COLORS: Colors = Colors {
    primary: ColorScale::new(&[
        (50, "#f0f9ff"),
        (100, "#e0f2fe"),
        (500, "#0ea5e9"),
        (600, "#0284c7"),
        (700, "#0369a1"),
    ]),
    neutral: ColorScale::new(&[
        (50, "#fafafa"),
        (100, "#f5f5f5"),
        (500, "#737373"),
        (900, "#171717"),
    ]),
};
