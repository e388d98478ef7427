// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for code lookups and sequence decoding.

use thiserror::Error;

/// Errors that can occur when resolving or decoding escape codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("unknown escape code: {0}")]
    UnknownCode(u8),

    #[error("unknown escape code name: '{0}'")]
    UnknownName(String),

    #[error("unsupported SGR parameters: '{0}'")]
    UnsupportedParams(String),
}
