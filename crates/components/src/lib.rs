//! Shared Leptos primitives for the design system.
//!
//! Primitives stay presentational: they forward props to the DOM as `data-ui-*` attributes and
//! read colors and spacing from [`design_tokens`]. Host apps own state and behavior.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{Button, ButtonSize, ButtonVariant};
