//! Runtime error type.
//!
//! The canonical taxonomy and message text live in `prettytuple_core::errors`. This module wraps them in a
//! `thiserror` enum with `miette` diagnostic codes so callers get an ordinary `std::error::Error` and tooling gets
//! something it can render.

use miette::Diagnostic;
use prettytuple_core::{ErrorKind, PrettyError};
use thiserror::Error;

/// Errors raised while inspecting a signature, defining a record type, or building a record.
///
/// Every failure aborts the operation that raised it. Nothing is retried or partially returned.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("ValueError: {0}")]
    #[diagnostic(
        code(prettytuple::value_error),
        help("record fields come from positional-or-keyword parameters with valid, unique, non-keyword names")
    )]
    Value(String),

    #[error("TypeError: {0}")]
    #[diagnostic(code(prettytuple::type_error))]
    Type(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Value(_) => ErrorKind::ValueError,
            Error::Type(_) => ErrorKind::TypeError,
        }
    }

    /// The message without its `Kind: ` prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Value(msg) | Error::Type(msg) => msg,
        }
    }
}

impl From<PrettyError> for Error {
    fn from(err: PrettyError) -> Self {
        match err.kind {
            ErrorKind::ValueError => Error::Value(err.message),
            ErrorKind::TypeError => Error::Type(err.message),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
