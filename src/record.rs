//! Record types and their instances.
//!
//! This is the construction mechanism the synthesizer delegates to. [`RecordType::define`] validates the type name,
//! the field names and the suffix-aligned defaults, then hands back a [`RecordTypeBuilder`] so the docstring and
//! annotations can be filled in before the type is frozen behind an `Arc`. Once built, a [`RecordType`] never
//! changes; it binds arguments into [`Record`] instances.
//!
//! ## Notes
//! - Record equality is tuple-like: two records are equal when their values are equal, whatever their types.
//! - Record type identity is by handle. Two separately defined types are never [`RecordType::is`] each other, even
//!   with identical metadata.
//!
//! ## Examples
//! ```rust
//! use prettytuple::{ConstructionOptions, RecordType, Value};
//!
//! let point = RecordType::define("Point", &["x", "y"], ConstructionOptions::new().with_defaults(vec![Value::Int(0)]))
//!     .unwrap()
//!     .build();
//! let p = point.positional([Value::Int(3)]).unwrap();
//! assert_eq!(p.to_string(), "Point(x=3, y=0)");
//! ```

use std::fmt;
use std::ops::Index;
use std::slice;
use std::sync::Arc;
use std::vec;

use indexmap::IndexMap;
use prettytuple_core::{PrettyError, rules};

use crate::errors::Result;
use crate::value::{TypeHint, Value};

/// Passthrough options for defining a record type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructionOptions {
    /// Defaults for the trailing fields, in field order.
    pub defaults: Option<Vec<Value>>,
    /// Module the type reports as its origin.
    pub module: Option<String>,
    /// Replace unusable field names with `_<index>` instead of failing.
    pub rename: bool,
}

impl ConstructionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(mut self, defaults: Vec<Value>) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_rename(mut self, rename: bool) -> Self {
        self.rename = rename;
        self
    }
}

#[derive(Debug)]
struct RecordTypeData {
    name: String,
    module: Option<String>,
    fields: Vec<String>,
    defaults: Vec<Value>,
    doc: String,
    annotations: IndexMap<String, TypeHint>,
}

/// Finishes a record type definition.
///
/// Obtained from [`RecordType::define`]. All metadata is attached here; the resulting [`RecordType`] is immutable.
#[derive(Debug)]
pub struct RecordTypeBuilder {
    data: RecordTypeData,
}

impl RecordTypeBuilder {
    /// Replace the generated docstring.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.data.doc = doc.into();
        self
    }

    /// Merge annotations into the type's annotation map.
    ///
    /// Incoming entries overwrite entries with the same name; unrelated entries are kept.
    pub fn merge_annotations<I, K>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = (K, TypeHint)>,
        K: Into<String>,
    {
        self.data
            .annotations
            .extend(annotations.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn build(self) -> RecordType {
        RecordType {
            inner: Arc::new(self.data),
        }
    }
}

/// An immutable record type definition.
///
/// Cheap to clone: clones share the same definition and are [`RecordType::is`] each other.
#[derive(Clone)]
pub struct RecordType {
    inner: Arc<RecordTypeData>,
}

impl RecordType {
    /// Validate and start defining a record type.
    ///
    /// ## Errors
    /// - `ValueError` for invalid, keyword, underscore-prefixed or duplicate names (see `prettytuple_core::rules`).
    /// - `TypeError: Got more default values than field names`.
    pub fn define<S: AsRef<str>>(
        type_name: &str,
        field_names: &[S],
        options: ConstructionOptions,
    ) -> Result<RecordTypeBuilder> {
        let fields: Vec<String> = if options.rename {
            let renamed = rules::rename_invalid(field_names);
            for (original, new) in field_names.iter().zip(&renamed) {
                let original: &str = original.as_ref();
                if original != new {
                    tracing::debug!(type_name, original, renamed = %new, "renamed field");
                }
            }
            renamed
        } else {
            field_names.iter().map(|f| f.as_ref().to_string()).collect()
        };
        rules::check_names(type_name, &fields, options.rename)?;

        let defaults = options.defaults.unwrap_or_default();
        rules::check_default_count(fields.len(), defaults.len())?;

        let doc = format!("{type_name}({})", fields.join(", "));
        Ok(RecordTypeBuilder {
            data: RecordTypeData {
                name: type_name.to_string(),
                module: options.module,
                fields,
                defaults,
                doc,
                annotations: IndexMap::new(),
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn module(&self) -> Option<&str> {
        self.inner.module.as_deref()
    }

    /// `module::Name`, or just `Name` without a module.
    pub fn qualified_name(&self) -> String {
        match self.module() {
            Some(module) => format!("{module}::{}", self.name()),
            None => self.name().to_string(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.inner.fields
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.inner.fields.iter().position(|f| f == name)
    }

    pub fn doc(&self) -> &str {
        &self.inner.doc
    }

    pub fn annotations(&self) -> &IndexMap<String, TypeHint> {
        &self.inner.annotations
    }

    /// Suffix-aligned defaults, one per trailing field.
    pub fn defaults(&self) -> &[Value] {
        &self.inner.defaults
    }

    /// Defaults keyed by the field they apply to, in field order.
    pub fn field_defaults(&self) -> IndexMap<String, Value> {
        let start = self.first_default_index();
        self.inner.fields[start..]
            .iter()
            .cloned()
            .zip(self.inner.defaults.iter().cloned())
            .collect()
    }

    /// Whether both handles refer to the same definition.
    pub fn is(&self, other: &RecordType) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn first_default_index(&self) -> usize {
        self.inner.fields.len() - self.inner.defaults.len()
    }

    /// Build an instance by binding positional and keyword arguments, then filling trailing defaults.
    ///
    /// ## Errors
    /// - `TypeError` for too many positional arguments, unknown or repeated keywords, and missing required fields.
    pub fn call<A, K, S>(&self, args: A, kwargs: K) -> Result<Record>
    where
        A: IntoIterator<Item = Value>,
        K: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let name = self.name();
        let fields = self.fields();
        let args: Vec<Value> = args.into_iter().collect();
        if args.len() > fields.len() {
            return Err(PrettyError::too_many_positional(name, fields.len(), args.len()).into());
        }

        let mut slots: Vec<Option<Value>> = args.into_iter().map(Some).collect();
        slots.resize(fields.len(), None);

        for (key, value) in kwargs {
            let key = key.as_ref();
            let index = self
                .field_index(key)
                .ok_or_else(|| PrettyError::unexpected_keyword(name, key))?;
            if slots[index].is_some() {
                return Err(PrettyError::multiple_values(name, key).into());
            }
            slots[index] = Some(value);
        }

        let start = self.first_default_index();
        for (slot, default) in slots[start..].iter_mut().zip(self.defaults()) {
            if slot.is_none() {
                *slot = Some(default.clone());
            }
        }

        let missing: Vec<&str> = slots
            .iter()
            .zip(fields)
            .filter(|(slot, _)| slot.is_none())
            .map(|(_, field)| field.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(PrettyError::missing_arguments(name, &missing).into());
        }

        let values: Vec<Value> = slots.into_iter().flatten().collect();
        tracing::trace!(type_name = name, arity = values.len(), "bound record arguments");
        Ok(Record {
            ty: self.clone(),
            values,
        })
    }

    /// [`RecordType::call`] with positional arguments only.
    pub fn positional<A>(&self, args: A) -> Result<Record>
    where
        A: IntoIterator<Item = Value>,
    {
        self.call(args, std::iter::empty::<(&str, Value)>())
    }

    /// [`RecordType::call`] with keyword arguments only.
    pub fn keywords<K, S>(&self, kwargs: K) -> Result<Record>
    where
        K: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        self.call(std::iter::empty(), kwargs)
    }

    /// Build an instance from exactly one value per field. Defaults are not consulted.
    ///
    /// ## Errors
    /// - `TypeError: Expected <n> arguments, got <m>`.
    pub fn make<I>(&self, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = Value>,
    {
        let values: Vec<Value> = values.into_iter().collect();
        if values.len() != self.fields().len() {
            return Err(PrettyError::wrong_length(self.fields().len(), values.len()).into());
        }
        Ok(Record {
            ty: self.clone(),
            values,
        })
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.qualified_name())
            .field("fields", &self.inner.fields)
            .field("defaults", &self.inner.defaults)
            .field("annotations", &self.inner.annotations)
            .finish()
    }
}

/// An instance of a [`RecordType`]: an ordered, immutable tuple of values with named access.
#[derive(Clone)]
pub struct Record {
    ty: RecordType,
    values: Vec<Value>,
}

impl Record {
    pub fn record_type(&self) -> &RecordType {
        &self.ty
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.ty.field_index(field).map(|i| &self.values[i])
    }

    /// Look up a field by position.
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Field names mapped to values, in field order.
    pub fn as_dict(&self) -> IndexMap<String, Value> {
        self.ty
            .fields()
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect()
    }

    /// Return a new record of the same type with some fields replaced.
    ///
    /// ## Errors
    /// - `ValueError: Got unexpected field names: [...]` listing every unknown name.
    pub fn replace<K, S>(&self, changes: K) -> Result<Record>
    where
        K: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let mut values = self.values.clone();
        let mut unknown: Vec<String> = Vec::new();
        for (key, value) in changes {
            match self.ty.field_index(key.as_ref()) {
                Some(index) => values[index] = value,
                None => unknown.push(key.as_ref().to_string()),
            }
        }
        if !unknown.is_empty() {
            let names: Vec<&str> = unknown.iter().map(String::as_str).collect();
            return Err(PrettyError::unexpected_fields(&names).into());
        }
        Ok(Record {
            ty: self.ty.clone(),
            values,
        })
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Index<usize> for Record {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.ty.name())?;
        for (i, (field, value)) in self.ty.fields().iter().zip(&self.values).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}={value}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(self.ty.name());
        for (field, value) in self.ty.fields().iter().zip(&self.values) {
            out.field(field, value);
        }
        out.finish()
    }
}

impl IntoIterator for Record {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
