//! Record synthesis from field metadata.
//!
//! [`synthesize`] turns the inspector's output into a finished [`RecordType`]; [`namedtuple_from_signature`] runs
//! both steps for a whole [`Signature`].
//!
//! ## Notes
//! - Defaults must form a contiguous run at the end of the field list. This is checked before the record type is
//!   defined, so a misplaced default is reported by name instead of silently shifting onto another field.
//! - A description replaces the generated `Name(a, b)` docstring; without one the generated docstring stays.

use indexmap::IndexMap;
use prettytuple_core::rules;

use crate::errors::Result;
use crate::inspect;
use crate::record::{ConstructionOptions, RecordType};
use crate::signature::Signature;
use crate::value::{TypeHint, Value};

/// Build a record type from ordered field names plus their default and type mappings.
///
/// ## Parameters
/// - `type_name`: name of the resulting record type.
/// - `field_names`: fields in order.
/// - `defaults`: defaults by field name. Names not in `field_names` are ignored.
/// - `types`: type hints by field name, merged into the type's annotations.
/// - `description`: docstring for the resulting type.
/// - `options`: passthrough options for [`RecordType::define`]. Its `defaults` are replaced when `defaults` is
///   non-empty.
///
/// ## Errors
/// - `TypeError: non-default argument '<name>' follows default argument`.
/// - Anything [`RecordType::define`] rejects, unchanged.
#[tracing::instrument(
    skip_all,
    fields(type_name = %type_name, field_count = field_names.len(), default_count = defaults.len())
)]
pub fn synthesize<S: AsRef<str>>(
    type_name: &str,
    field_names: &[S],
    defaults: &IndexMap<String, Value>,
    types: &IndexMap<String, TypeHint>,
    description: Option<&str>,
    mut options: ConstructionOptions,
) -> Result<RecordType> {
    if !defaults.is_empty() {
        let names: Vec<&str> = field_names.iter().map(AsRef::as_ref).collect();
        rules::check_defaults_contiguous(names.iter().map(|&f| (f, defaults.contains_key(f))))?;
        options.defaults = Some(names.iter().filter_map(|&f| defaults.get(f).cloned()).collect());
    }

    let mut builder = RecordType::define(type_name, field_names, options)?;
    if let Some(description) = description {
        builder = builder.doc(description);
    }
    if !types.is_empty() {
        builder = builder.merge_annotations(types.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    let record_type = builder.build();
    tracing::debug!(qualified_name = %record_type.qualified_name(), "synthesized record type");
    Ok(record_type)
}

/// Build a record type whose fields are the parameters of `signature`.
///
/// ## Errors
/// - `ValueError` if any parameter is not positional-or-keyword (see [`inspect::extract`]).
/// - Anything [`synthesize`] rejects.
pub fn namedtuple_from_signature(
    type_name: &str,
    signature: &Signature,
    docstring: Option<&str>,
    options: ConstructionOptions,
) -> Result<RecordType> {
    let extracted = inspect::extract(signature)?;
    synthesize(
        type_name,
        &extracted.field_names,
        &extracted.defaults,
        &extracted.types,
        docstring,
        options,
    )
}
