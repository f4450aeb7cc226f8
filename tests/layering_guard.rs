//! Layering guardrails for the workspace.
//!
//! `prettytuple_core` holds the rules both front ends share, so it depends on nothing but the identifier tables. The
//! macro crate may depend on the core but never on the runtime crate, which itself depends on the macro crate.

/// Collect the crate names listed in a manifest's `[dependencies]` table.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_depends_only_on_identifier_tables() {
    let deps = main_dependencies(include_str!("../crates/prettytuple_core/Cargo.toml"));
    assert_eq!(deps, ["unicode-ident"], "`prettytuple_core` must not grow dependencies");
}

#[test]
fn macro_crate_does_not_depend_on_runtime() {
    let deps = main_dependencies(include_str!("../crates/prettytuple_derive/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "prettytuple_core"));
    assert!(
        !deps.iter().any(|d| d == "prettytuple"),
        "`prettytuple` must not appear in the macro crate's [dependencies]"
    );
}

#[test]
fn runtime_depends_on_both_layers() {
    let deps = main_dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "prettytuple_core"));
    assert!(deps.iter().any(|d| d == "prettytuple_derive"));
}

#[test]
fn miette_renders_no_reports() {
    let manifest = include_str!("../Cargo.toml");
    let miette = manifest
        .lines()
        .find(|line| line.trim_start().starts_with("miette"))
        .expect("miette is a dependency");
    assert!(!miette.contains("fancy"), "the library never renders reports: {miette}");
}
