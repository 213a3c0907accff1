//! Design tokens shared by the component library and its host apps.
//!
//! Tokens are hand-maintained `'static` tables grouped as colors, typography, spacing, shadows,
//! and borders. Consumers either read the typed constants directly, resolve a dotted path such
//! as `colors.primary.500`, or export the whole table as JSON for non-Rust hosts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod borders;
mod colors;
mod scale;
mod shadows;
mod spacing;
mod typography;

use serde::Serialize;
use thiserror::Error;

pub use borders::{Borders, BORDERS};
pub use colors::{ColorScale, Colors, COLORS};
pub use scale::TokenScale;
pub use shadows::SHADOWS;
pub use spacing::SPACING;
pub use typography::{Typography, TYPOGRAPHY};

static TOKENS: DesignTokens = DesignTokens {
    colors: COLORS,
    typography: TYPOGRAPHY,
    spacing: SPACING,
    shadows: SHADOWS,
    borders: BORDERS,
};

/// Returns the shipped token table.
pub fn tokens() -> &'static DesignTokens {
    &TOKENS
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures when resolving a dotted token path.
pub enum TokenError {
    /// The first path segment does not name a token group.
    #[error("unknown token group `{0}`")]
    UnknownGroup(String),
    /// The group exists but has no token at this path.
    #[error("unknown token `{0}`")]
    UnknownToken(String),
    /// The path has empty segments or the wrong number of segments for its group.
    #[error("malformed token path `{0}`")]
    MalformedPath(String),
}

/// The full token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignTokens {
    /// Color palettes.
    pub colors: Colors,
    /// Font families, sizes, weights, and line heights.
    pub typography: Typography,
    /// Spacing ramp.
    pub spacing: TokenScale,
    /// Shadow ramp.
    pub shadows: TokenScale,
    /// Border widths and radii.
    pub borders: Borders,
}

impl Default for DesignTokens {
    fn default() -> Self {
        TOKENS
    }
}

impl DesignTokens {
    /// Resolves a dotted token path to its CSS value.
    ///
    /// Accepted shapes are `colors.<palette>.<shade>`, `spacing.<step>`, `shadows.<step>`,
    /// `borders.<width|radius>.<step>`, and
    /// `typography.<family|size|weight|line-height>.<name>`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnknownGroup`] for an unrecognised first segment,
    /// [`TokenError::MalformedPath`] for empty segments or the wrong arity, and
    /// [`TokenError::UnknownToken`] when the group has no such token.
    pub fn resolve(&self, path: &str) -> Result<&'static str, TokenError> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(TokenError::MalformedPath(path.to_string()));
        }
        let unknown = || TokenError::UnknownToken(path.to_string());

        match segments.as_slice() {
            // Compared as text so `+500` or `0500` don't alias `500`.
            ["colors", palette, shade] => self
                .colors
                .palette(palette)
                .and_then(|scale| scale.iter().find(|(entry, _)| entry.to_string() == **shade))
                .map(|(_, hex)| hex)
                .ok_or_else(unknown),
            ["spacing", step] => self.spacing.get(step).ok_or_else(unknown),
            ["shadows", step] => self.shadows.get(step).ok_or_else(unknown),
            ["borders", group, step] => self
                .borders
                .group(group)
                .and_then(|scale| scale.get(step))
                .ok_or_else(unknown),
            ["typography", group, name] => self
                .typography
                .group(group)
                .and_then(|scale| scale.get(name))
                .ok_or_else(unknown),
            ["colors" | "spacing" | "shadows" | "borders" | "typography", ..] => {
                Err(TokenError::MalformedPath(path.to_string()))
            }
            [group, ..] => Err(TokenError::UnknownGroup((*group).to_string())),
            [] => Err(TokenError::MalformedPath(path.to_string())),
        }
    }

    /// Serializes the table as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates the `serde_json` serializer error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_shipped_colors() {
        let tokens = tokens();
        assert_eq!(tokens.resolve("colors.primary.50"), Ok("#f0f9ff"));
        assert_eq!(tokens.resolve("colors.primary.100"), Ok("#e0f2fe"));
        assert_eq!(tokens.resolve("colors.primary.500"), Ok("#0ea5e9"));
        assert_eq!(tokens.resolve("colors.primary.600"), Ok("#0284c7"));
        assert_eq!(tokens.resolve("colors.primary.700"), Ok("#0369a1"));
        assert_eq!(tokens.resolve("colors.neutral.50"), Ok("#fafafa"));
        assert_eq!(tokens.resolve("colors.neutral.100"), Ok("#f5f5f5"));
        assert_eq!(tokens.resolve("colors.neutral.500"), Ok("#737373"));
        assert_eq!(tokens.resolve("colors.neutral.900"), Ok("#171717"));
    }

    #[test]
    fn resolves_every_group() {
        let tokens = DesignTokens::default();
        assert_eq!(tokens.resolve("spacing.md"), Ok("1rem"));
        assert_eq!(tokens.resolve("shadows.none"), Ok("none"));
        assert_eq!(tokens.resolve("borders.width.thin"), Ok("1px"));
        assert_eq!(tokens.resolve("borders.radius.full"), Ok("9999px"));
        assert_eq!(tokens.resolve("typography.weight.bold"), Ok("700"));
        assert_eq!(tokens.resolve("typography.line-height.normal"), Ok("1.5"));
    }

    #[test]
    fn reports_unknown_group_and_token() {
        let tokens = tokens();
        assert_eq!(
            tokens.resolve("motion.fast"),
            Err(TokenError::UnknownGroup("motion".to_string()))
        );
        assert_eq!(
            tokens.resolve("colors.primary.900"),
            Err(TokenError::UnknownToken("colors.primary.900".to_string()))
        );
        assert_eq!(
            tokens.resolve("colors.accent.500"),
            Err(TokenError::UnknownToken("colors.accent.500".to_string()))
        );
        assert_eq!(
            tokens.resolve("colors.primary.dark"),
            Err(TokenError::UnknownToken("colors.primary.dark".to_string()))
        );
        for path in ["colors.primary.+500", "colors.primary.0500", "colors.neutral.050"] {
            assert_eq!(
                tokens.resolve(path),
                Err(TokenError::UnknownToken(path.to_string())),
                "path: {path:?}"
            );
        }
        assert_eq!(
            tokens.resolve("borders.style.solid"),
            Err(TokenError::UnknownToken("borders.style.solid".to_string()))
        );
    }

    #[test]
    fn reports_malformed_paths() {
        let tokens = tokens();
        for path in ["", "colors", "colors..500", "spacing.md.extra", "borders.width", "."] {
            assert_eq!(
                tokens.resolve(path),
                Err(TokenError::MalformedPath(path.to_string())),
                "path: {path:?}"
            );
        }
    }

    #[test]
    fn exports_nested_json() {
        let exported: serde_json::Value =
            serde_json::from_str(&tokens().to_json().expect("serialize")).expect("parse");
        assert_eq!(exported["colors"]["primary"]["500"], json!("#0ea5e9"));
        assert_eq!(exported["colors"]["neutral"]["900"], json!("#171717"));
        assert_eq!(exported["typography"]["line-height"]["tight"], json!("1.25"));
        assert_eq!(exported["spacing"]["2xl"], json!("3rem"));
        assert_eq!(exported["borders"]["radius"]["sm"], json!("0.25rem"));
    }

    #[test]
    fn error_messages_quote_the_path() {
        assert_eq!(
            TokenError::UnknownToken("spacing.huge".to_string()).to_string(),
            "unknown token `spacing.huge`"
        );
    }
}
