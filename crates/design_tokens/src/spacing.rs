//! Spacing ramp shared by padding, margins, and layout gaps.

use crate::TokenScale;

/// Shipped spacing ramp.
pub const SPACING: TokenScale = TokenScale::new(&[
    ("none", "0"),
    ("xs", "0.25rem"),
    ("sm", "0.5rem"),
    ("md", "1rem"),
    ("lg", "1.5rem"),
    ("xl", "2rem"),
    ("2xl", "3rem"),
]);
