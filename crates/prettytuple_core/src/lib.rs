//! Provide the shared, pure rules behind prettytuple record synthesis.
//!
//! Both front ends depend on this crate:
//! - the runtime builder API (`prettytuple`), which validates `Signature` values at runtime, and
//! - the attribute macro (`prettytuple_derive`), which validates `fn` declarations at compile time.
//!
//! Keeping the parameter-kind vocabulary, the naming rules and the user-facing error text here means a declaration
//! is rejected with the same message no matter which front end sees it.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state. Its only dependency is `unicode-ident`, for the
//!   identifier tables.
//! - Messages are Python-flavoured (`ValueError: ...`, `TypeError: ...`) because record types mirror tuple-like
//!   named records.

#![deny(clippy::unwrap_used)]

pub mod errors;
pub mod keywords;
pub mod kinds;
pub mod rules;

pub use errors::{ErrorKind, PrettyError};
pub use kinds::ParamKind;
