//! Naming and default-placement rules for record types.
//!
//! ## Notes
//! - Name checks run in a fixed order: identifier and keyword checks for the type name and every field first, then
//!   the underscore and duplicate checks for fields. The first failure wins.
//! - `_` on its own is not an identifier here; Rust reserves it as a pattern.

use std::collections::HashSet;

use crate::errors::PrettyError;
use crate::keywords;

/// Check whether `name` is a valid Rust identifier: `XID_Start` or `_`, then `XID_Continue`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {}
        _ => return false,
    }
    name != "_" && chars.all(unicode_ident::is_xid_continue)
}

/// Validate a type name together with its field names.
///
/// With `renamed` set, fields are expected to have gone through [`rename_invalid`] already, so the `_<index>`
/// placeholders it produces are accepted.
///
/// ## Errors
/// - `ValueError` for a non-identifier, a keyword, a field starting with `_`, or a repeated field.
pub fn check_names<S: AsRef<str>>(type_name: &str, field_names: &[S], renamed: bool) -> Result<(), PrettyError> {
    let all = std::iter::once(type_name).chain(field_names.iter().map(AsRef::as_ref));
    for name in all {
        if !is_identifier(name) {
            return Err(PrettyError::invalid_identifier(name));
        }
        if keywords::is_keyword(name) {
            return Err(PrettyError::keyword_name(name));
        }
    }

    let mut seen = HashSet::new();
    for name in field_names.iter().map(AsRef::as_ref) {
        if name.starts_with('_') && !renamed {
            return Err(PrettyError::underscore_field(name));
        }
        if !seen.insert(name) {
            return Err(PrettyError::duplicate_field(name));
        }
    }
    Ok(())
}

/// Replace every unusable field name with `_<index>`.
///
/// A name is unusable when it is not an identifier, is a keyword, starts with `_`, or repeats an earlier name.
pub fn rename_invalid<S: AsRef<str>>(field_names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    field_names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = name.as_ref();
            let usable = is_identifier(name)
                && !keywords::is_keyword(name)
                && !name.starts_with('_')
                && !seen.contains(name);
            seen.insert(name);
            if usable { name.to_string() } else { format!("_{index}") }
        })
        .collect()
}

/// Suffix-aligned defaults cannot outnumber the fields they apply to.
pub fn check_default_count(field_count: usize, default_count: usize) -> Result<(), PrettyError> {
    if default_count > field_count {
        return Err(PrettyError::too_many_defaults());
    }
    Ok(())
}

/// Require defaults to form a contiguous run at the end of the field list.
///
/// `fields` yields `(name, has_default)` in declaration order.
///
/// ## Errors
/// - `TypeError: non-default argument '<name>' follows default argument` naming the first offending field.
pub fn check_defaults_contiguous<'a, I>(fields: I) -> Result<(), PrettyError>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    let mut seen_default = false;
    for (name, has_default) in fields {
        if has_default {
            seen_default = true;
        } else if seen_default {
            return Err(PrettyError::non_default_after_default(name));
        }
    }
    Ok(())
}

/// Reject the second occurrence of any parameter name.
pub fn check_unique_parameters<'a, I>(names: I) -> Result<(), PrettyError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(PrettyError::duplicate_parameter(name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn identifiers() {
        assert!(is_identifier("lat"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("Location2"));
        assert!(is_identifier("café"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("_"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier("dash-ed"));
    }

    #[test]
    fn identifiers_follow_xid_properties() {
        // Alphabetic or alphanumeric, but not XID.
        assert!(!is_identifier("x\u{b2}"));
        assert!(!is_identifier("\u{2e2f}a"));
        assert!(!is_identifier("\u{2160}\u{b2}"));
        assert!(is_identifier("\u{2160}"));
        assert!(is_identifier("x\u{0301}"));
        assert_eq!(
            check_names("T", &["x\u{b2}"], false).unwrap_err().to_string(),
            "ValueError: Type names and field names must be valid identifiers: 'x\u{b2}'"
        );
        assert_eq!(rename_invalid(&["x\u{b2}", "ok"]), ["_0", "ok"]);
    }

    #[test]
    fn type_name_is_checked_before_fields() {
        let err = check_names("1Bad", &["also bad"], false).unwrap_err();
        assert_eq!(err.message, "Type names and field names must be valid identifiers: '1Bad'");
    }

    #[test]
    fn keywords_are_rejected_for_types_and_fields() {
        let err = check_names("struct", &["a"], false).unwrap_err();
        assert_eq!(err.message, "Type names and field names cannot be a keyword: 'struct'");

        let err = check_names("Point", &["x", "type"], false).unwrap_err();
        assert_eq!(err.message, "Type names and field names cannot be a keyword: 'type'");
    }

    #[test]
    fn identifier_errors_take_precedence_over_underscore_and_duplicates() {
        // `_x` would fail the underscore rule, but `9` fails earlier.
        let err = check_names("Point", &["_x", "9"], false).unwrap_err();
        assert_eq!(err.message, "Type names and field names must be valid identifiers: '9'");
    }

    #[test]
    fn underscore_and_duplicates() {
        let err = check_names("Point", &["x", "_y"], false).unwrap_err();
        assert_eq!(err.message, "Field names cannot start with an underscore: '_y'");

        let err = check_names("Point", &["x", "y", "x"], false).unwrap_err();
        assert_eq!(err.message, "Encountered duplicate field name: 'x'");
        assert_eq!(err.kind, ErrorKind::ValueError);
    }

    #[test]
    fn underscore_type_names_are_allowed() {
        assert!(check_names("_Hidden", &["x"], false).is_ok());
    }

    #[test]
    fn rename_replaces_by_position() {
        let renamed = rename_invalid(&["abc", "def", "ghi", "abc", "_x", "1y", "fn"]);
        assert_eq!(renamed, vec!["abc", "def", "ghi", "_3", "_4", "_5", "_6"]);
    }

    #[test]
    fn renamed_placeholders_pass_validation() {
        let renamed = rename_invalid(&["x", "x"]);
        assert!(check_names("Point", &renamed, true).is_ok());
        assert!(check_names("Point", &renamed, false).is_err());
    }

    #[test]
    fn contiguous_defaults() {
        assert!(check_defaults_contiguous([("a", false), ("b", true), ("c", true)]).is_ok());
        assert!(check_defaults_contiguous([("a", true)]).is_ok());
        assert!(check_defaults_contiguous(std::iter::empty::<(&str, bool)>()).is_ok());

        let err = check_defaults_contiguous([("a", false), ("b", true), ("c", false)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeError);
        assert_eq!(err.message, "non-default argument 'c' follows default argument");
    }

    #[test]
    fn default_count() {
        assert!(check_default_count(2, 2).is_ok());
        assert_eq!(
            check_default_count(1, 2).unwrap_err().to_string(),
            "TypeError: Got more default values than field names"
        );
    }

    #[test]
    fn duplicate_parameters() {
        assert!(check_unique_parameters(["a", "b"]).is_ok());
        assert_eq!(
            check_unique_parameters(["a", "b", "a"]).unwrap_err().to_string(),
            "ValueError: duplicate parameter name: 'a'"
        );
    }
}
