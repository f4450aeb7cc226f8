//! The decorator front end.
//!
//! A [`Callable`] describes something that could be decorated: what kind of object it is, its name, the module it
//! came from, its docstring and its signature. Only plain functions are turned into record types. A `Callable` has
//! no body, so nothing is ever invoked.

use prettytuple_core::PrettyError;

use crate::errors::Result;
use crate::record::{ConstructionOptions, RecordType};
use crate::signature::Signature;
use crate::synth::namedtuple_from_signature;

/// What kind of object a [`Callable`] describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallableKind {
    /// A plain function declaration. The only accepted kind.
    Function,
    /// A method bound to a receiver.
    BoundMethod,
    /// A function implemented by the host runtime.
    Builtin,
    /// A function with some arguments pre-applied.
    Partial,
    /// Any other object, named by its type.
    Instance(String),
}

impl CallableKind {
    /// The runtime type name reported when decoration is refused.
    pub fn type_name(&self) -> &str {
        match self {
            CallableKind::Function => "function",
            CallableKind::BoundMethod => "method",
            CallableKind::Builtin => "builtin_function_or_method",
            CallableKind::Partial => "functools.partial",
            CallableKind::Instance(name) => name,
        }
    }
}

/// Metadata of a decoratable object.
#[derive(Debug, Clone, PartialEq)]
pub struct Callable {
    kind: CallableKind,
    name: String,
    module: Option<String>,
    doc: Option<String>,
    signature: Signature,
}

impl Callable {
    fn with_kind(kind: CallableKind, name: impl Into<String>, signature: Signature) -> Self {
        Self {
            kind,
            name: name.into(),
            module: None,
            doc: None,
            signature,
        }
    }

    pub fn function(name: impl Into<String>, signature: Signature) -> Self {
        Self::with_kind(CallableKind::Function, name, signature)
    }

    pub fn bound_method(name: impl Into<String>, signature: Signature) -> Self {
        Self::with_kind(CallableKind::BoundMethod, name, signature)
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        Self::with_kind(CallableKind::Builtin, name, Signature::default())
    }

    pub fn partial(name: impl Into<String>, signature: Signature) -> Self {
        Self::with_kind(CallableKind::Partial, name, signature)
    }

    /// An arbitrary object of class `type_name`.
    pub fn instance(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self::with_kind(CallableKind::Instance(type_name.clone()), type_name, Signature::default())
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn kind(&self) -> &CallableKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

/// Turn a plain function into a record type.
///
/// The function's name becomes the type name, its parameters the fields, its docstring the type's docstring and its
/// module the type's module.
///
/// ## Errors
/// - `TypeError: prettytuple can accept a usual function only, but got: <type>` for anything but
///   [`CallableKind::Function`].
/// - Anything [`namedtuple_from_signature`] rejects.
///
/// ## Examples
/// ```rust
/// use prettytuple::{Callable, Parameter, Signature, prettytuple};
///
/// let location = Callable::function(
///     "Location",
///     Signature::new([
///         Parameter::positional_or_keyword("lat").with_annotation("float"),
///         Parameter::positional_or_keyword("long").with_annotation("float"),
///     ])
///     .unwrap(),
/// )
/// .with_doc("Geographical coordinates of a point, i.e. its latitude and longitude.");
///
/// let ty = prettytuple(&location).unwrap();
/// assert_eq!(ty.name(), "Location");
/// assert_eq!(ty.fields(), ["lat", "long"]);
/// ```
pub fn prettytuple(callable: &Callable) -> Result<RecordType> {
    if callable.kind != CallableKind::Function {
        return Err(PrettyError::not_a_function(callable.kind.type_name()).into());
    }

    let mut options = ConstructionOptions::new();
    options.module = callable.module.clone();
    namedtuple_from_signature(&callable.name, &callable.signature, callable.doc(), options)
}
