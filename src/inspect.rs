//! Signature inspection.
//!
//! Check that every parameter can become a record field and split the signature into the three aligned pieces the
//! synthesizer needs: ordered names, the defaults that were declared, and the type hints that were declared.

use indexmap::IndexMap;
use prettytuple_core::PrettyError;

use crate::errors::Result;
use crate::signature::{Parameter, Signature};
use crate::value::{TypeHint, Value};

/// Field metadata extracted from a signature.
///
/// `defaults` and `types` only contain entries for parameters that declared one, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extracted {
    pub field_names: Vec<String>,
    pub defaults: IndexMap<String, Value>,
    pub types: IndexMap<String, TypeHint>,
}

fn validate_parameter(param: &Parameter) -> Result<()> {
    if !param.kind().is_accepted() {
        return Err(PrettyError::unsupported_kind(param.name(), param.kind()).into());
    }
    Ok(())
}

/// Validate `signature` and extract field names, defaults and type hints.
///
/// ## Errors
/// - `ValueError: parameter '<name>' has unsupported kind: <KIND>` for the first parameter that is not
///   positional-or-keyword.
pub fn extract(signature: &Signature) -> Result<Extracted> {
    for param in signature.parameters() {
        validate_parameter(param)?;
    }

    let params = signature.parameters();
    let extracted = Extracted {
        field_names: params.iter().map(|p| p.name().to_string()).collect(),
        defaults: params
            .iter()
            .filter_map(|p| p.default().map(|d| (p.name().to_string(), d.clone())))
            .collect(),
        types: params
            .iter()
            .filter_map(|p| p.annotation().map(|t| (p.name().to_string(), t.clone())))
            .collect(),
    };
    tracing::trace!(
        fields = extracted.field_names.len(),
        defaults = extracted.defaults.len(),
        types = extracted.types.len(),
        "extracted signature"
    );
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use prettytuple_core::ParamKind;

    #[test]
    fn extracts_partial_mappings_in_order() {
        let sig = Signature::new([
            Parameter::positional_or_keyword("a").with_annotation("int"),
            Parameter::positional_or_keyword("b"),
            Parameter::positional_or_keyword("c").with_default(5).with_annotation("int"),
            Parameter::positional_or_keyword("d").with_default("x"),
        ])
        .unwrap();

        let out = extract(&sig).unwrap();
        assert_eq!(out.field_names, ["a", "b", "c", "d"]);
        assert_eq!(
            out.defaults.iter().collect::<Vec<_>>(),
            [(&"c".to_string(), &Value::Int(5)), (&"d".to_string(), &Value::from("x"))]
        );
        assert_eq!(out.types.keys().collect::<Vec<_>>(), ["a", "c"]);
    }

    #[test]
    fn defaults_are_not_coerced() {
        let sig = Signature::new([Parameter::positional_or_keyword("a").with_default(Value::None)]).unwrap();
        assert_eq!(extract(&sig).unwrap().defaults["a"], Value::None);
    }

    #[test]
    fn every_other_kind_is_rejected() {
        for kind in [
            ParamKind::PositionalOnly,
            ParamKind::VarPositional,
            ParamKind::KeywordOnly,
            ParamKind::VarKeyword,
        ] {
            let sig = Signature::new([Parameter::positional_or_keyword("ok"), Parameter::new("bad", kind)]).unwrap();
            let err = extract(&sig).unwrap_err();
            assert_eq!(
                err,
                Error::Value(format!("parameter 'bad' has unsupported kind: {}", kind.as_str()))
            );
        }
    }

    #[test]
    fn first_violation_wins() {
        let sig = Signature::new([
            Parameter::keyword_only("first"),
            Parameter::var_keyword("second"),
        ])
        .unwrap();
        let err = extract(&sig).unwrap_err();
        assert_eq!(err.message(), "parameter 'first' has unsupported kind: KEYWORD_ONLY");
    }

    #[test]
    fn empty_signature_extracts_nothing() {
        assert_eq!(extract(&Signature::default()).unwrap(), Extracted::default());
    }
}
