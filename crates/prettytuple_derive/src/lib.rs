//! The `#[prettytuple]` attribute macro.
//!
//! Turns a plain function declaration into a record struct: the function name becomes the struct name, parameters
//! become public fields in declaration order, `#[default(...)]` parameter attributes become defaults, and the doc
//! comment carries over. The function body is discarded.

use proc_macro::TokenStream;

mod attrs;
mod expand;

/// Declare a record struct with function syntax.
///
/// Generates, for the struct:
/// - `#[derive(Debug, Clone, PartialEq)]`, plus any other attributes written on the function
/// - `new(..all fields..)`, and `with_defaults(..required fields..)` when some parameter has a default
/// - `into_tuple()` and `From` conversions to and from the field tuple
/// - `Display` as `Name(a=.., b=..)`
/// - `prettytuple::RecordInfo`
///
/// Accepted arguments: `#[prettytuple(module = "path")]` overrides the reported module.
///
/// Fields are owned: parameter types may not borrow except for `'static`, so write `String` rather than `&str`.
/// Function-only attributes such as `#[inline]` are dropped; every other attribute moves to the struct.
///
/// # Example
/// ```ignore
/// /// Geographical coordinates of a point, i.e. its latitude and longitude.
/// #[prettytuple]
/// pub fn Location(lat: f64, #[default(0.0)] long: f64) {}
///
/// let here = Location::with_defaults(51.5);
/// assert_eq!(here.to_string(), "Location(lat=51.5, long=0.0)");
/// ```
#[proc_macro_attribute]
pub fn prettytuple(args: TokenStream, input: TokenStream) -> TokenStream {
    expand::expand(args.into(), input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
