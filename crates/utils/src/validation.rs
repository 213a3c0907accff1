//! Syntactic email and phone-number checks.
//!
//! The predicates classify input; they never normalize it. A valid email is
//! `local@domain.tld` where every part is a non-empty run of characters that are neither
//! whitespace nor `@`. A valid phone number, once spaces, hyphens, and parentheses are
//! removed, is an optional `+` followed by 2 to 15 digits with no leading zero.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Browser `\s`: adds U+FEFF and leaves out U+0085 compared to Unicode `White_Space`.
// Must stay in sync with `is_form_whitespace`.
const FORM_WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{FORM_WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

// `\d` would also accept non-ASCII decimal digits.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("phone pattern compiles"));

/// Returns `true` when `input` has the shape `local@domain.tld`.
///
/// Whitespace anywhere, a second `@`, or a missing `.` after the `@` all classify as invalid.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

/// Returns `true` when `input` is a plausible international phone number.
///
/// Formatting characters are removed first (see [`strip_phone_formatting`]); the remainder
/// must be an optional `+`, a digit `1`-`9`, then one to fourteen more digits.
pub fn is_valid_phone_number(input: &str) -> bool {
    PHONE_PATTERN.is_match(&strip_phone_formatting(input))
}

/// Removes whitespace, `-`, `(`, and `)` from `input`, keeping every other character in order.
///
/// Dots and slashes are left in place.
pub fn strip_phone_formatting(input: &str) -> String {
    input
        .chars()
        .filter(|c| !is_phone_formatting(*c))
        .collect()
}

fn is_phone_formatting(c: char) -> bool {
    is_form_whitespace(c) || matches!(c, '-' | '(' | ')')
}

fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejections produced when parsing the typed contact wrappers.
pub enum ValidationError {
    /// The input is not shaped like `local@domain.tld`.
    #[error("invalid email address")]
    InvalidEmail,
    /// The input is not an optional `+` followed by 2 to 15 digits without a leading zero.
    #[error("invalid phone number")]
    InvalidPhoneNumber,
}

/// An email address that passed [`is_valid_email`], stored exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Returns the address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::try_from(raw.to_string())
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if is_valid_email(&raw) {
            Ok(Self(raw))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ValidationError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number that passed [`is_valid_phone_number`].
///
/// The original formatting is kept; use [`strip_phone_formatting`] on [`PhoneNumber::as_str`]
/// when a compact form is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Returns the number as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::try_from(raw.to_string())
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if is_valid_phone_number(&raw) {
            Ok(Self(raw))
        } else {
            Err(ValidationError::InvalidPhoneNumber)
        }
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
