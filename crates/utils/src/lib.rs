//! Framework-agnostic helpers shared by the design-system components and their host apps.
//!
//! Everything here is pure: no I/O, no logging, no shared mutable state. Form code calls the
//! predicates directly or parses into the typed wrappers when it wants a checked value.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod validation;

pub use validation::{
    is_valid_email, is_valid_phone_number, strip_phone_formatting, EmailAddress, PhoneNumber,
    ValidationError,
};
