//! Control primitives and their token mappings.

use design_tokens::{tokens, TokenError};
use leptos::ev::MouseEvent;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button emphasis levels.
pub enum ButtonVariant {
    /// Filled brand-colored button for the main action.
    Primary,
    /// Filled neutral button for supporting actions.
    Secondary,
    /// Transparent button with a brand-colored outline.
    Outline,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
        }
    }

    // `None` background renders transparent.
    fn palette(self) -> (Option<&'static str>, &'static str, &'static str) {
        match self {
            Self::Primary => (
                Some("colors.primary.600"),
                "colors.neutral.50",
                "colors.primary.600",
            ),
            Self::Secondary => (
                Some("colors.neutral.100"),
                "colors.neutral.900",
                "colors.neutral.100",
            ),
            Self::Outline => (None, "colors.primary.700", "colors.primary.600"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Vertical padding, horizontal padding, font size.
    fn metrics(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Sm => ("spacing.xs", "spacing.sm", "typography.size.sm"),
            Self::Md => ("spacing.sm", "spacing.md", "typography.size.md"),
            Self::Lg => ("spacing.md", "spacing.lg", "typography.size.lg"),
        }
    }
}

/// Builds the inline CSS custom properties consumed by the `.ui-button` stylesheet.
pub(crate) fn button_style(variant: ButtonVariant, size: ButtonSize) -> Result<String, TokenError> {
    let table = tokens();
    let (background, foreground, border) = variant.palette();
    let (pad_y, pad_x, font_size) = size.metrics();

    let background = match background {
        Some(path) => table.resolve(path)?,
        None => "transparent",
    };

    Ok(format!(
        "--ui-button-bg:{background};--ui-button-fg:{};--ui-button-border:{};\
         --ui-button-border-width:{};--ui-button-padding:{} {};--ui-button-font-size:{};\
         --ui-button-radius:{}",
        table.resolve(foreground)?,
        table.resolve(border)?,
        table.resolve("borders.width.thin")?,
        table.resolve(pad_y)?,
        table.resolve(pad_x)?,
        table.resolve(font_size)?,
        table.resolve("borders.radius.md")?,
    ))
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Shared button primitive. Children are the label; clicks are forwarded to `on_click`.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let style = match button_style(variant, size) {
        Ok(style) => Some(style),
        Err(err) => {
            logging::warn!("button token lookup failed: {err}");
            None
        }
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            style=style
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VARIANTS: [ButtonVariant; 3] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
    ];
    const SIZES: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    #[test]
    fn defaults_match_component_props() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }

    #[test]
    fn attribute_tokens() {
        let variants: Vec<_> = VARIANTS.iter().map(|variant| variant.token()).collect();
        let sizes: Vec<_> = SIZES.iter().map(|size| size.token()).collect();
        assert_eq!(variants, vec!["primary", "secondary", "outline"]);
        assert_eq!(sizes, vec!["sm", "md", "lg"]);
    }

    #[test]
    fn every_combination_resolves() {
        for variant in VARIANTS {
            for size in SIZES {
                assert!(
                    button_style(variant, size).is_ok(),
                    "{variant:?}/{size:?} references a missing token"
                );
            }
        }
    }

    #[test]
    fn primary_medium_style() {
        assert_eq!(
            button_style(ButtonVariant::Primary, ButtonSize::Md).expect("style"),
            "--ui-button-bg:#0284c7;--ui-button-fg:#fafafa;--ui-button-border:#0284c7;\
             --ui-button-border-width:1px;--ui-button-padding:0.5rem 1rem;\
             --ui-button-font-size:1rem;--ui-button-radius:0.375rem"
        );
    }

    #[test]
    fn outline_is_transparent() {
        let style = button_style(ButtonVariant::Outline, ButtonSize::Sm).expect("style");
        assert!(style.starts_with("--ui-button-bg:transparent;--ui-button-fg:#0369a1;"));
        assert!(style.contains("--ui-button-padding:0.25rem 0.5rem;"));
    }

    #[test]
    fn merges_layout_class() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("form-submit")),
            "ui-button form-submit"
        );
        assert_eq!(bool_token(true), "true");
    }
}
