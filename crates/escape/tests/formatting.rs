// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end checks of the public formatting API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use ansi_escape::{
    escape, escape_single, extract_codes, strip_escapes, Element, EscapeCode, BOLD, GREEN, OFF,
    RED, UNDERLINE,
};

#[test]
fn debug_prefix_line() {
    let line = ansi_escape::escape!(BOLD, GREEN, "[DEBUG] ", OFF, "Here is the debug output");
    assert_eq!(
        line,
        "\x1b[1m\x1b[32m[DEBUG] \x1b[0mHere is the debug output\x1b[0m"
    );
    assert_eq!(strip_escapes(&line), "[DEBUG] Here is the debug output");
}

#[test]
fn plain_text_only() {
    assert_eq!(escape(["plain text"]), "plain text\x1b[0m");
}

#[test]
fn single_wrap() {
    assert_eq!(escape_single(RED, "error"), "\x1b[31merror\x1b[0m");
}

#[test]
fn explicit_trailing_reset() {
    let out = escape([
        Element::from(UNDERLINE),
        Element::from("x"),
        Element::from(OFF),
    ]);
    assert_eq!(out, "\x1b[4mx\x1b[0m");
    assert_eq!(extract_codes(&out).len(), 2);
}

#[test]
fn empty_sequence() {
    assert_eq!(escape(Vec::<Element<'_>>::new()), "");
}

#[test]
fn codes_named_in_config() {
    let names = ["bold", "bg_blue", "white"];
    let codes: Vec<EscapeCode> = names.iter().map(|n| n.parse().unwrap()).collect();
    assert_eq!(escape(codes), "\x1b[1m\x1b[44m\x1b[37m\x1b[0m");
}
