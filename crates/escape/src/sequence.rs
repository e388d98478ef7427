// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape sequence formatting.
//!
//! Builds terminal-ready strings from a mix of [`EscapeCode`]s and text,
//! closing them with a reset unless the caller already did.

use crate::code::{EscapeCode, OFF};
use std::borrow::Cow;
use std::fmt;

/// One input to [`escape`]: either a code or a literal text fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<'a> {
    Code(EscapeCode),
    Text(Cow<'a, str>),
}

impl Element<'_> {
    fn is_reset(&self) -> bool {
        matches!(self, Element::Code(code) if code.is_reset())
    }
}

impl From<EscapeCode> for Element<'_> {
    fn from(code: EscapeCode) -> Self {
        Element::Code(code)
    }
}

impl<'a> From<&'a str> for Element<'a> {
    fn from(text: &'a str) -> Self {
        Element::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Element<'a> {
    fn from(text: &'a String) -> Self {
        Element::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Element<'_> {
    fn from(text: String) -> Self {
        Element::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Element<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Element::Text(text)
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Code(code) => fmt::Display::fmt(code, f),
            Element::Text(text) => f.write_str(text),
        }
    }
}

/// Write the escape sequence for `items` into `writer`.
///
/// Codes are written as `ESC [ <n> m`, text verbatim. A trailing reset is
/// appended unless the last item is [`EscapeCode::Off`]. Nothing at all is
/// written for an empty input.
pub fn write_escape<'a, W, I>(writer: &mut W, items: I) -> fmt::Result
where
    W: fmt::Write,
    I: IntoIterator,
    I::Item: Into<Element<'a>>,
{
    let mut last: Option<bool> = None;
    for item in items {
        let element = item.into();
        write!(writer, "{element}")?;
        last = Some(element.is_reset());
    }

    match last {
        Some(false) => write!(writer, "{OFF}"),
        Some(true) | None => Ok(()),
    }
}

/// Build an escape sequence from codes and text.
///
/// ```
/// use ansi_escape::{escape, Element, BOLD, GREEN, OFF};
///
/// let line = escape([
///     Element::from(BOLD),
///     Element::from(GREEN),
///     Element::from("[DEBUG] "),
///     Element::from(OFF),
///     Element::from("Here is the debug output"),
/// ]);
/// assert_eq!(
///     line,
///     "\x1b[1m\x1b[32m[DEBUG] \x1b[0mHere is the debug output\x1b[0m"
/// );
/// ```
///
/// An empty input yields an empty string.
pub fn escape<'a, I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Element<'a>>,
{
    let mut out = String::new();
    // fmt::Write for String is infallible
    let _ = write_escape(&mut out, items);
    out
}

/// Wrap `text` in `code` and a trailing reset.
///
/// The reset is always appended, even when `code` is itself [`EscapeCode::Off`].
pub fn escape_single(code: EscapeCode, text: &str) -> String {
    format!("{code}{text}{OFF}")
}

/// Build an escape sequence from a comma-separated list of codes and text.
///
/// ```
/// use ansi_escape::{BOLD, GREEN, OFF};
///
/// let line = ansi_escape::escape!(BOLD, GREEN, "[DEBUG] ", OFF, "Here is the debug output");
/// assert_eq!(
///     line,
///     "\x1b[1m\x1b[32m[DEBUG] \x1b[0mHere is the debug output\x1b[0m"
/// );
/// ```
#[macro_export]
macro_rules! escape {
    ($($item:expr),* $(,)?) => {{
        let items: ::std::vec::Vec<$crate::Element<'_>> =
            ::std::vec![$($crate::Element::from($item)),*];
        $crate::escape(items)
    }};
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
