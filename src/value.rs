//! Dynamically typed field values and advisory type hints.
//!
//! Defaults, instance fields and annotation entries all need to live in ordered maps that the runtime front end
//! builds at runtime, so they are represented by the two small types here rather than by Rust generics.

use std::any;
use std::borrow::Cow;
use std::fmt;

use prettytuple_core::errors::quote_name;

use crate::record::Record;

/// A field value.
///
/// `Display` renders a Python-like repr (`None`, `True`, `1.0`, `'text'`, `(1,)`, `[1, 2]`), which is what record
/// reprs are built from.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    /// Collect anything convertible into a `Value::Tuple`.
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Ints widen to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}

fn fmt_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        f.write_str("nan")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "inf" } else { "-inf" })
    } else if x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x:?}")
    }
}

fn fmt_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => fmt_float(f, *x),
            Value::Str(s) => f.write_str(&quote_name(s)),
            Value::Tuple(items) => {
                f.write_str("(")?;
                fmt_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::List(items) => {
                f.write_str("[")?;
                fmt_items(f, items)?;
                f.write_str("]")
            }
            Value::Record(record) => write!(f, "{record}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}

/// An advisory type descriptor for a field.
///
/// Hints are metadata only: nothing checks a field's value against its hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeHint(Cow<'static, str>);

impl TypeHint {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Name a Rust type, e.g. `TypeHint::of::<f64>()` is `f64`.
    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Borrowed(any::type_name::<T>()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeHint {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for TypeHint {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_reprs() {
        assert_eq!(Value::None.to_string(), "None");
        assert_eq!(Value::from(true).to_string(), "True");
        assert_eq!(Value::from(-3).to_string(), "-3");
        assert_eq!(Value::from(5.0).to_string(), "5.0");
        assert_eq!(Value::from(0.1).to_string(), "0.1");
        assert_eq!(Value::from(-0.25).to_string(), "-0.25");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::from("it's").to_string(), "\"it's\"");
    }

    #[test]
    fn container_reprs() {
        assert_eq!(Value::tuple(Vec::<i64>::new()).to_string(), "()");
        assert_eq!(Value::tuple([1]).to_string(), "(1,)");
        assert_eq!(Value::tuple([1, 2]).to_string(), "(1, 2)");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "['a', 'b']");
    }

    #[test]
    fn options_map_to_none() {
        assert_eq!(Value::from(None::<i64>), Value::None);
        assert_eq!(Value::from(Some(2)), Value::Int(2));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Int(2).as_float(), Some(2.0));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Int(2).as_str(), None);
        assert!(Value::None.is_none());
    }

    #[test]
    fn type_hints() {
        assert_eq!(TypeHint::new("float").to_string(), "float");
        assert_eq!(TypeHint::of::<f64>().name(), "f64");
        assert_eq!(TypeHint::from(String::from("str")), TypeHint::from("str"));
    }
}
