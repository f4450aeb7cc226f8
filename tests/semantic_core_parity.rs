//! Parity checks between the shared rules in `prettytuple_core` and what the runtime reports.
//!
//! The runtime must surface core errors unchanged: same kind, same text.

use prettytuple::{Callable, ConstructionOptions, Error, ErrorKind, ParamKind, Parameter, RecordType, Signature};
use prettytuple_core::{PrettyError, rules};

fn runtime_names(type_name: &str, fields: &[&str]) -> Result<(), Error> {
    RecordType::define(type_name, fields, ConstructionOptions::new()).map(|_| ())
}

#[test]
fn name_rules_agree() {
    let cases: &[(&str, &[&str])] = &[
        ("Point", &["x", "y"]),
        ("Point", &["x", "x"]),
        ("Point", &["_x"]),
        ("Point", &["fn"]),
        ("Point", &["1x"]),
        ("struct", &["x"]),
        ("Point", &["x", "_"]),
    ];
    for &(type_name, fields) in cases {
        let core = rules::check_names(type_name, fields, false).map_err(Error::from);
        let runtime = runtime_names(type_name, fields);
        assert_eq!(core, runtime, "disagreement for {type_name}{fields:?}");
    }
}

#[test]
fn rename_output_always_passes_renamed_checks() {
    let raw = ["ok", "fn", "_hidden", "ok", "1x", "", "also_ok"];
    let renamed = rules::rename_invalid(&raw);
    assert_eq!(renamed, ["ok", "_1", "_2", "_3", "_4", "_5", "also_ok"]);
    assert!(rules::check_names("Renamed", &renamed, true).is_ok());

    let ty = RecordType::define("Renamed", &raw, ConstructionOptions::new().with_rename(true))
        .unwrap()
        .build();
    assert_eq!(ty.fields(), renamed.as_slice());
}

#[test]
fn error_kinds_and_text_survive_conversion() {
    let samples = [
        PrettyError::unsupported_kind("k", ParamKind::KeywordOnly),
        PrettyError::not_a_function("method"),
        PrettyError::non_default_after_default("b"),
        PrettyError::missing_arguments("Point", &["x", "y", "z"]),
        PrettyError::unexpected_fields(&["w"]),
    ];
    for core in samples {
        let runtime = Error::from(core.clone());
        assert_eq!(runtime.kind(), core.kind);
        assert_eq!(runtime.to_string(), core.to_string());
        assert_eq!(runtime.message(), core.message);
    }
}

#[test]
fn every_rejected_kind_reports_its_canonical_spelling() {
    for info in prettytuple_core::kinds::PARAM_KINDS.iter().filter(|k| !k.accepted) {
        let sig = Signature::new([Parameter::new("p", info.id)]).unwrap();
        let err = prettytuple::prettytuple(&Callable::function("T", sig)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueError);
        assert!(err.message().ends_with(info.canonical), "{err}");
    }
}
