//! Canonical error taxonomy and user-facing messages.
//!
//! Front ends never format their own failure text. They build a [`PrettyError`] through one of the constructors
//! below and then wrap it in whatever error type fits their context (a `thiserror` enum at runtime, a `syn::Error`
//! inside the macro).

use core::fmt;

use crate::kinds::ParamKind;

/// Classify a failure the way the record mechanism reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value of the right shape was invalid (bad parameter kind, bad name, unknown field).
    ValueError,
    /// Something of the wrong type was supplied (not a function, wrong arity, misplaced defaults).
    TypeError,
}

impl ErrorKind {
    /// Return the canonical spelling used as a message prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ValueError => "ValueError",
            ErrorKind::TypeError => "TypeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified error with its canonical message.
///
/// `Display` renders `Kind: message`, the same shape both front ends surface to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyError {
    pub kind: ErrorKind,
    pub message: String,
}

impl PrettyError {
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn value(message: String) -> Self {
        Self::with_message(ErrorKind::ValueError, message)
    }

    fn type_error(message: String) -> Self {
        Self::with_message(ErrorKind::TypeError, message)
    }

    /// A parameter that is not positional-or-keyword cannot become a field.
    pub fn unsupported_kind(name: &str, kind: ParamKind) -> Self {
        Self::value(format!("parameter '{name}' has unsupported kind: {kind}"))
    }

    /// Only plain functions can be decorated. `type_name` names what was received instead.
    pub fn not_a_function(type_name: &str) -> Self {
        Self::type_error(format!(
            "prettytuple can accept a usual function only, but got: {type_name}"
        ))
    }

    pub fn duplicate_parameter(name: &str) -> Self {
        Self::value(format!("duplicate parameter name: {}", quote_name(name)))
    }

    pub fn invalid_identifier(name: &str) -> Self {
        Self::value(format!(
            "Type names and field names must be valid identifiers: {}",
            quote_name(name)
        ))
    }

    pub fn keyword_name(name: &str) -> Self {
        Self::value(format!(
            "Type names and field names cannot be a keyword: {}",
            quote_name(name)
        ))
    }

    pub fn underscore_field(name: &str) -> Self {
        Self::value(format!(
            "Field names cannot start with an underscore: {}",
            quote_name(name)
        ))
    }

    pub fn duplicate_field(name: &str) -> Self {
        Self::value(format!("Encountered duplicate field name: {}", quote_name(name)))
    }

    pub fn too_many_defaults() -> Self {
        Self::type_error("Got more default values than field names".to_string())
    }

    /// A field without a default follows one that has a default.
    pub fn non_default_after_default(name: &str) -> Self {
        Self::type_error(format!(
            "non-default argument {} follows default argument",
            quote_name(name)
        ))
    }

    pub fn too_many_positional(type_name: &str, expected: usize, given: usize) -> Self {
        let noun = if expected == 1 { "argument" } else { "arguments" };
        let verb = if given == 1 { "was" } else { "were" };
        Self::type_error(format!(
            "{type_name}() takes {expected} positional {noun} but {given} {verb} given"
        ))
    }

    pub fn unexpected_keyword(type_name: &str, keyword: &str) -> Self {
        Self::type_error(format!(
            "{type_name}() got an unexpected keyword argument {}",
            quote_name(keyword)
        ))
    }

    pub fn multiple_values(type_name: &str, keyword: &str) -> Self {
        Self::type_error(format!(
            "{type_name}() got multiple values for argument {}",
            quote_name(keyword)
        ))
    }

    /// Report every missing required field at once, listed in field order.
    pub fn missing_arguments(type_name: &str, missing: &[&str]) -> Self {
        let noun = if missing.len() == 1 { "argument" } else { "arguments" };
        Self::type_error(format!(
            "{type_name}() missing {} required positional {noun}: {}",
            missing.len(),
            join_names(missing)
        ))
    }

    pub fn wrong_length(expected: usize, given: usize) -> Self {
        Self::type_error(format!("Expected {expected} arguments, got {given}"))
    }

    pub fn unexpected_fields(names: &[&str]) -> Self {
        let listed: Vec<String> = names.iter().map(|n| quote_name(n)).collect();
        Self::value(format!("Got unexpected field names: [{}]", listed.join(", ")))
    }
}

impl fmt::Display for PrettyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PrettyError {}

/// Quote a name the way a string repr would: single quotes unless the name itself contains one.
pub fn quote_name(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// `'a'`, `'a' and 'b'`, `'a', 'b', and 'c'`.
fn join_names(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| quote_name(n)).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}
