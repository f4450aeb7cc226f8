//! Prelude module for common imports.
//!
//! ```ignore
//! use prettytuple::prelude::*;
//! ```

pub use crate::decorate::{Callable, prettytuple};
pub use crate::info::RecordInfo;
pub use crate::record::{ConstructionOptions, Record, RecordType};
pub use crate::signature::{Parameter, Signature};
pub use crate::synth::namedtuple_from_signature;
pub use crate::value::{TypeHint, Value};

#[cfg(feature = "json")]
pub use crate::json::ToJson;

// The attribute macro shares its name with the runtime decorator function.
pub use prettytuple_derive::prettytuple;
