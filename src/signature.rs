//! Explicit signature descriptions.
//!
//! Rust offers no runtime reflection over function declarations, so callers describe a callable's formal
//! parameters directly. A [`Signature`] is the structured input to the inspector: ordered parameters, each with a
//! name, a [`ParamKind`], an optional default and an optional type hint.
//!
//! ## Examples
//! ```rust
//! use prettytuple::{Parameter, Signature};
//!
//! let sig = Signature::builder()
//!     .field("lat")
//!     .param(Parameter::positional_or_keyword("long").with_default(0.0))
//!     .build()
//!     .unwrap();
//! assert_eq!(sig.to_string(), "(lat, long=0.0)");
//! ```

use std::fmt;

use prettytuple_core::ParamKind;
use prettytuple_core::rules;

use crate::errors::Result;
use crate::value::{TypeHint, Value};

/// One formal parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    kind: ParamKind,
    default: Option<Value>,
    annotation: Option<TypeHint>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            annotation: None,
        }
    }

    pub fn positional_or_keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::PositionalOrKeyword)
    }

    pub fn positional_only(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::PositionalOnly)
    }

    pub fn var_positional(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::VarPositional)
    }

    pub fn keyword_only(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::KeywordOnly)
    }

    pub fn var_keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::VarKeyword)
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<TypeHint>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn annotation(&self) -> Option<&TypeHint> {
        self.annotation.as_ref()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParamKind::VarPositional => f.write_str("*")?,
            ParamKind::VarKeyword => f.write_str("**")?,
            _ => {}
        }
        f.write_str(&self.name)?;
        match (&self.annotation, &self.default) {
            (Some(hint), Some(default)) => write!(f, ": {hint} = {default}"),
            (Some(hint), None) => write!(f, ": {hint}"),
            (None, Some(default)) => write!(f, "={default}"),
            (None, None) => Ok(()),
        }
    }
}

/// Ordered formal parameters of a callable.
///
/// Parameter names are unique; [`Signature::new`] rejects repeats so nothing downstream has to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    /// ## Errors
    /// - `ValueError: duplicate parameter name: '<name>'`
    pub fn new(parameters: impl IntoIterator<Item = Parameter>) -> Result<Self> {
        let parameters: Vec<Parameter> = parameters.into_iter().collect();
        rules::check_unique_parameters(parameters.iter().map(Parameter::name))?;
        Ok(Self { parameters })
    }

    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Renders like a function header: `(a, /, b: int = 1, *args, c, **kwargs)`.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(self.parameters.len() + 2);
        let mut positional_only_open = false;
        let mut star_written = false;
        for param in &self.parameters {
            if positional_only_open && param.kind != ParamKind::PositionalOnly {
                parts.push("/".to_string());
                positional_only_open = false;
            }
            match param.kind {
                ParamKind::PositionalOnly => positional_only_open = true,
                ParamKind::VarPositional => star_written = true,
                ParamKind::KeywordOnly if !star_written => {
                    parts.push("*".to_string());
                    star_written = true;
                }
                _ => {}
            }
            parts.push(param.to_string());
        }
        if positional_only_open {
            parts.push("/".to_string());
        }
        write!(f, "({})", parts.join(", "))
    }
}

/// Accumulates parameters in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SignatureBuilder {
    parameters: Vec<Parameter>,
}

impl SignatureBuilder {
    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Shorthand for a bare positional-or-keyword parameter.
    pub fn field(self, name: impl Into<String>) -> Self {
        self.param(Parameter::positional_or_keyword(name))
    }

    pub fn build(self) -> Result<Signature> {
        Signature::new(self.parameters)
    }
}
