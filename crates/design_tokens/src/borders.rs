//! Border widths and corner radii.

use serde::Serialize;

use crate::TokenScale;

/// Border token groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Borders {
    /// CSS `border-width` values.
    pub width: TokenScale,
    /// CSS `border-radius` values.
    pub radius: TokenScale,
}

impl Borders {
    pub(crate) fn group(&self, name: &str) -> Option<&TokenScale> {
        match name {
            "width" => Some(&self.width),
            "radius" => Some(&self.radius),
            _ => None,
        }
    }
}

/// Shipped borders.
pub const BORDERS: Borders = Borders {
    width: TokenScale::new(&[("none", "0"), ("thin", "1px"), ("thick", "2px")]),
    radius: TokenScale::new(&[
        ("none", "0"),
        ("sm", "0.25rem"),
        ("md", "0.375rem"),
        ("lg", "0.5rem"),
        ("full", "9999px"),
    ]),
};
