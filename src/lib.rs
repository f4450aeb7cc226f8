#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! prettytuple: record types from function signatures.
//!
//! A function's name becomes the record's type name, its parameters become fields, parameter defaults become field
//! defaults and parameter types become field annotations. Two front ends share one set of rules
//! (`prettytuple_core`):
//!
//! - **Runtime**: describe a signature with [`Signature`] / [`Parameter`] and call [`namedtuple_from_signature`], or
//!   describe the whole function with [`Callable`] and call [`prettytuple()`]. The result is a [`RecordType`] that
//!   builds [`Record`] instances.
//! - **Compile time**: put `#[prettytuple]` on a plain `fn` and get a real struct that implements [`RecordInfo`].
//!
//! ## Examples
//! ```rust
//! use prettytuple::{ConstructionOptions, Parameter, Signature, Value, namedtuple_from_signature};
//!
//! let sig = Signature::new([
//!     Parameter::positional_or_keyword("a"),
//!     Parameter::positional_or_keyword("b").with_default(5),
//! ])
//! .unwrap();
//! let ty = namedtuple_from_signature("Pair", &sig, None, ConstructionOptions::new()).unwrap();
//!
//! let pair = ty.positional([Value::Int(1)]).unwrap();
//! assert_eq!(pair.get("b"), Some(&Value::Int(5)));
//! ```
//!
//! ## Panic Policy
//!
//! Production code returns [`Result`] and propagates with `?`; `clippy::unwrap_used` is denied. `.unwrap()` and
//! `.expect()` are acceptable in tests.

extern crate self as prettytuple;

pub mod decorate;
pub mod errors;
pub mod info;
pub mod inspect;
pub mod prelude;
pub mod record;
pub mod signature;
pub mod synth;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use decorate::{Callable, CallableKind, prettytuple};
pub use errors::{Error, Result};
pub use info::RecordInfo;
pub use inspect::{Extracted, extract};
pub use record::{ConstructionOptions, Record, RecordType, RecordTypeBuilder};
pub use signature::{Parameter, Signature, SignatureBuilder};
pub use synth::{namedtuple_from_signature, synthesize};
pub use value::{TypeHint, Value};

pub use prettytuple_core::{ErrorKind, ParamKind};

// Attribute macro; lives in the macro namespace next to the `prettytuple` function.
pub use prettytuple_derive::prettytuple;

#[cfg(feature = "json")]
pub use json::ToJson;
