// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI escape sequence construction.
//!
//! Maps symbolic SGR codes (text attributes, foreground and background
//! colors) to raw escape strings and wraps text in start/reset pairs.
//!
//! ```
//! use ansi_escape::{escape_single, RED};
//!
//! assert_eq!(escape_single(RED, "error"), "\x1b[31merror\x1b[0m");
//! ```

mod code;
mod error;
mod sequence;
mod strip;

pub use code::*;
pub use error::EscapeError;
pub use sequence::{escape, escape_single, write_escape, Element};
pub use strip::{extract_codes, strip_escapes};
