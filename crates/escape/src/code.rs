// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SGR code table.
//!
//! Every code the crate can emit is a variant of [`EscapeCode`]; the numeric
//! SGR parameter is the enum discriminant.

use crate::error::EscapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Select Graphic Rendition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum EscapeCode {
    // General text attributes
    /// Reset all attributes: ESC[0m
    Off = 0,
    Bold = 1,
    Underline = 4,
    Blink = 5,
    Reverse = 7,
    Concealed = 8,

    // Foreground colors
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,

    // Background colors
    BgGrey = 40,
    BgRed = 41,
    BgGreen = 42,
    BgYellow = 43,
    BgBlue = 44,
    BgMagenta = 45,
    BgCyan = 46,
    BgWhite = 47,
}

pub const OFF: EscapeCode = EscapeCode::Off;
pub const BOLD: EscapeCode = EscapeCode::Bold;
pub const UNDERLINE: EscapeCode = EscapeCode::Underline;
pub const BLINK: EscapeCode = EscapeCode::Blink;
pub const REVERSE: EscapeCode = EscapeCode::Reverse;
pub const CONCEALED: EscapeCode = EscapeCode::Concealed;

pub const BLACK: EscapeCode = EscapeCode::Black;
pub const RED: EscapeCode = EscapeCode::Red;
pub const GREEN: EscapeCode = EscapeCode::Green;
pub const YELLOW: EscapeCode = EscapeCode::Yellow;
pub const BLUE: EscapeCode = EscapeCode::Blue;
pub const MAGENTA: EscapeCode = EscapeCode::Magenta;
pub const CYAN: EscapeCode = EscapeCode::Cyan;
pub const WHITE: EscapeCode = EscapeCode::White;

pub const BG_GREY: EscapeCode = EscapeCode::BgGrey;
pub const BG_RED: EscapeCode = EscapeCode::BgRed;
pub const BG_GREEN: EscapeCode = EscapeCode::BgGreen;
pub const BG_YELLOW: EscapeCode = EscapeCode::BgYellow;
pub const BG_BLUE: EscapeCode = EscapeCode::BgBlue;
pub const BG_MAGENTA: EscapeCode = EscapeCode::BgMagenta;
pub const BG_CYAN: EscapeCode = EscapeCode::BgCyan;
pub const BG_WHITE: EscapeCode = EscapeCode::BgWhite;

impl EscapeCode {
    /// Every code, in ascending numeric order.
    pub const ALL: [EscapeCode; 22] = [
        EscapeCode::Off,
        EscapeCode::Bold,
        EscapeCode::Underline,
        EscapeCode::Blink,
        EscapeCode::Reverse,
        EscapeCode::Concealed,
        EscapeCode::Black,
        EscapeCode::Red,
        EscapeCode::Green,
        EscapeCode::Yellow,
        EscapeCode::Blue,
        EscapeCode::Magenta,
        EscapeCode::Cyan,
        EscapeCode::White,
        EscapeCode::BgGrey,
        EscapeCode::BgRed,
        EscapeCode::BgGreen,
        EscapeCode::BgYellow,
        EscapeCode::BgBlue,
        EscapeCode::BgMagenta,
        EscapeCode::BgCyan,
        EscapeCode::BgWhite,
    ];

    /// The numeric SGR parameter.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            EscapeCode::Off => "off",
            EscapeCode::Bold => "bold",
            EscapeCode::Underline => "underline",
            EscapeCode::Blink => "blink",
            EscapeCode::Reverse => "reverse",
            EscapeCode::Concealed => "concealed",
            EscapeCode::Black => "black",
            EscapeCode::Red => "red",
            EscapeCode::Green => "green",
            EscapeCode::Yellow => "yellow",
            EscapeCode::Blue => "blue",
            EscapeCode::Magenta => "magenta",
            EscapeCode::Cyan => "cyan",
            EscapeCode::White => "white",
            EscapeCode::BgGrey => "bg_grey",
            EscapeCode::BgRed => "bg_red",
            EscapeCode::BgGreen => "bg_green",
            EscapeCode::BgYellow => "bg_yellow",
            EscapeCode::BgBlue => "bg_blue",
            EscapeCode::BgMagenta => "bg_magenta",
            EscapeCode::BgCyan => "bg_cyan",
            EscapeCode::BgWhite => "bg_white",
        }
    }

    pub fn is_reset(self) -> bool {
        self == EscapeCode::Off
    }

    /// Text attributes other than reset (bold, underline, ...).
    pub fn is_attribute(self) -> bool {
        matches!(self.value(), 1..=8)
    }

    pub fn is_foreground(self) -> bool {
        matches!(self.value(), 30..=37)
    }

    pub fn is_background(self) -> bool {
        matches!(self.value(), 40..=47)
    }
}

impl TryFrom<u8> for EscapeCode {
    type Error = EscapeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        EscapeCode::ALL
            .into_iter()
            .find(|code| code.value() == value)
            .ok_or(EscapeError::UnknownCode(value))
    }
}

impl FromStr for EscapeCode {
    type Err = EscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EscapeCode::ALL
            .into_iter()
            .find(|code| code.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EscapeError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for EscapeCode {
    /// Writes the control sequence `ESC [ <n> m`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.value())
    }
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;
