//! Font families, sizes, weights, and line heights.

use serde::Serialize;

use crate::TokenScale;

/// Typography token groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Typography {
    /// CSS `font-family` stacks.
    pub family: TokenScale,
    /// CSS `font-size` ramp.
    pub size: TokenScale,
    /// CSS `font-weight` values.
    pub weight: TokenScale,
    /// Unitless CSS `line-height` values.
    pub line_height: TokenScale,
}

impl Typography {
    pub(crate) fn group(&self, name: &str) -> Option<&TokenScale> {
        match name {
            "family" => Some(&self.family),
            "size" => Some(&self.size),
            "weight" => Some(&self.weight),
            "line-height" => Some(&self.line_height),
            _ => None,
        }
    }
}

/// Shipped typography.
pub const TYPOGRAPHY: Typography = Typography {
    family: TokenScale::new(&[
        ("sans", "Inter, system-ui, -apple-system, \"Segoe UI\", sans-serif"),
        ("mono", "\"JetBrains Mono\", ui-monospace, SFMono-Regular, monospace"),
    ]),
    size: TokenScale::new(&[
        ("xs", "0.75rem"),
        ("sm", "0.875rem"),
        ("md", "1rem"),
        ("lg", "1.125rem"),
        ("xl", "1.25rem"),
        ("2xl", "1.5rem"),
    ]),
    weight: TokenScale::new(&[
        ("regular", "400"),
        ("medium", "500"),
        ("semibold", "600"),
        ("bold", "700"),
    ]),
    line_height: TokenScale::new(&[("tight", "1.25"), ("normal", "1.5"), ("relaxed", "1.75")]),
};
