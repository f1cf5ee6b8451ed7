//! Token classification.
//!
//! Surrounding whitespace never changes how a token is classified, so
//! `"\t-tab\t"` is a flag and `" a"` is a value. A lone dash (or a dash
//! followed only by whitespace) is neither, while `"- a"` is still a flag.

use serde::Serialize;

/// What a single raw token represents.
///
/// # Examples
///
/// ```
/// use argmap_core::{TokenKind, classify};
///
/// assert_eq!(classify("--world"), TokenKind::Flag);
/// assert_eq!(classify("hello world"), TokenKind::Value);
/// assert_eq!(classify("- "), TokenKind::Blank);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Option marker such as `-a` or `--world`.
    Flag,
    /// Ordinary data that may be attached to the preceding flag.
    Value,
    /// Empty, whitespace-only, or a dash with nothing but whitespace after
    /// it. Ignored by parsing.
    Blank,
}

/// Classifies a token as a flag, a value, or neither.
pub fn classify(token: &str) -> TokenKind {
    if is_flag(token) {
        TokenKind::Flag
    } else if is_value(token) {
        TokenKind::Value
    } else {
        TokenKind::Blank
    }
}

/// Returns `true` if the token is a flag.
///
/// A flag starts with `-` (ignoring surrounding whitespace) and has at
/// least one non-whitespace character somewhere after the dash.
///
/// # Examples
///
/// ```
/// use argmap_core::is_flag;
///
/// assert!(is_flag("-a"));
/// assert!(is_flag("-space "));
/// assert!(is_flag("- a"));
/// assert!(!is_flag("-"));
/// assert!(!is_flag("-\t"));
/// assert!(!is_flag("a-b-c"));
/// ```
pub fn is_flag(token: &str) -> bool {
    token
        .trim()
        .strip_prefix('-')
        .is_some_and(|rest| rest.chars().any(|c| !c.is_whitespace()))
}

/// Returns `true` if the token is a value.
///
/// A value is non-blank and does not start with `-` (ignoring surrounding
/// whitespace).
///
/// # Examples
///
/// ```
/// use argmap_core::is_value;
///
/// assert!(is_value("hello world"));
/// assert!(is_value("\ta"));
/// assert!(!is_value("-1"));
/// assert!(!is_value(" \t\n"));
/// ```
pub fn is_value(token: &str) -> bool {
    let trimmed = token.trim();
    !trimmed.is_empty() && !trimmed.starts_with('-')
}

/// [`is_flag`] for a token that may be missing; `None` is never a flag.
pub fn is_flag_opt(token: Option<&str>) -> bool {
    token.is_some_and(is_flag)
}

/// [`is_value`] for a token that may be missing; `None` is never a value.
pub fn is_value_opt(token: Option<&str>) -> bool {
    token.is_some_and(is_value)
}
