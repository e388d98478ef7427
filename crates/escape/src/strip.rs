// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading escape sequences back out of terminal output.

use crate::code::EscapeCode;
use crate::error::EscapeError;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching ANSI SGR (Select Graphic Rendition) escape sequences.
/// Matches ESC [ followed by semicolon-separated numbers, ending with 'm'.
static SGR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[([0-9;]*)m").expect("SGR regex pattern is invalid")
});

/// Decode the parameter string of one SGR sequence (the part between `[` and `m`).
fn decode_params(params: &str) -> Result<EscapeCode, EscapeError> {
    if params.is_empty() {
        return Ok(EscapeCode::Off);
    }
    params
        .parse::<u8>()
        .map_err(|_| EscapeError::UnsupportedParams(params.to_string()))
        .and_then(|value| {
            EscapeCode::try_from(value)
                .map_err(|_| EscapeError::UnsupportedParams(params.to_string()))
        })
}

/// Strip all SGR escape sequences, returning plain text.
pub fn strip_escapes(input: &str) -> String {
    SGR_REGEX.replace_all(input, "").into_owned()
}

/// Extract the codes of every SGR sequence with its byte position.
///
/// `ESC[m` decodes as [`EscapeCode::Off`]. Compound parameter lists such as
/// `1;32` and codes outside the table decode as
/// [`EscapeError::UnsupportedParams`].
pub fn extract_codes(input: &str) -> Vec<(usize, Result<EscapeCode, EscapeError>)> {
    SGR_REGEX
        .captures_iter(input)
        .filter_map(|cap| {
            // cap.get(0) is the full match, which is always present when the regex matches
            let full_match = cap.get(0)?;
            let params = cap.get(1).map(|m| m.as_str()).unwrap_or("");
            Some((full_match.start(), decode_params(params)))
        })
        .collect()
}

#[cfg(test)]
#[path = "strip_tests.rs"]
mod tests;
