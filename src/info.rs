//! Reflection for records declared with `#[prettytuple]`.
//!
//! The attribute macro implements [`RecordInfo`] on every struct it generates, so compile-time records expose the
//! same metadata as runtime [`RecordType`](crate::RecordType)s: name, origin module, docstring, fields, field types
//! and defaults. Types and defaults are reported as source text.

/// Provides reflection information about a struct generated by `#[prettytuple]`.
///
/// # Examples
///
/// ```ignore
/// #[prettytuple]
/// fn Location(lat: f64, #[default(0.0)] long: f64) {}
///
/// assert_eq!(Location::TYPE_NAME, "Location");
/// assert_eq!(Location::field_names(), ["lat", "long"]);
/// assert_eq!(Location::field_types(), ["f64", "f64"]);
/// assert_eq!(Location::field_defaults(), [("long", "0.0")]);
/// ```
pub trait RecordInfo {
    /// Name of the record type.
    const TYPE_NAME: &'static str;

    /// Module the record was declared in.
    const MODULE: &'static str;

    /// Doc comment of the originating function, if it had one.
    const DOC: Option<&'static str>;

    /// Field names in declaration order.
    fn field_names() -> &'static [&'static str];

    /// Field types in declaration order, as written.
    fn field_types() -> &'static [&'static str];

    /// Defaulted fields and their default expressions, as written.
    fn field_defaults() -> &'static [(&'static str, &'static str)];

    /// `module::Name`.
    fn qualified_name() -> String {
        format!("{}::{}", Self::MODULE, Self::TYPE_NAME)
    }
}
