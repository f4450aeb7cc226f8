//! Parameter-kind vocabulary registry.
//!
//! Classify how an argument may be supplied to a callable. Only [`ParamKind::PositionalOrKeyword`] maps cleanly onto
//! a record field; every other kind is rejected by the inspector with its canonical spelling in the message.

use core::fmt;

/// Stable identifier for parameter kinds, in declaration-order precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKind {
    PositionalOnly,
    PositionalOrKeyword,
    VarPositional,
    KeywordOnly,
    VarKeyword,
}

/// Metadata entry for a parameter kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamKindInfo {
    pub id: ParamKind,
    /// Canonical upper-case spelling, e.g. `VAR_POSITIONAL`.
    pub canonical: &'static str,
    pub description: &'static str,
    /// Whether a parameter of this kind can become a record field.
    pub accepted: bool,
}

/// Registry of parameter kinds.
pub const PARAM_KINDS: &[ParamKindInfo] = &[
    ParamKindInfo {
        id: ParamKind::PositionalOnly,
        canonical: "POSITIONAL_ONLY",
        description: "Can only be supplied by position.",
        accepted: false,
    },
    ParamKindInfo {
        id: ParamKind::PositionalOrKeyword,
        canonical: "POSITIONAL_OR_KEYWORD",
        description: "Can be supplied either by position or by keyword.",
        accepted: true,
    },
    ParamKindInfo {
        id: ParamKind::VarPositional,
        canonical: "VAR_POSITIONAL",
        description: "Collects any number of extra positional arguments.",
        accepted: false,
    },
    ParamKindInfo {
        id: ParamKind::KeywordOnly,
        canonical: "KEYWORD_ONLY",
        description: "Can only be supplied by keyword.",
        accepted: false,
    },
    ParamKindInfo {
        id: ParamKind::VarKeyword,
        canonical: "VAR_KEYWORD",
        description: "Collects any number of extra keyword arguments.",
        accepted: false,
    },
];

/// Resolve a canonical spelling to its stable id.
pub fn from_str(name: &str) -> Option<ParamKind> {
    PARAM_KINDS.iter().find(|k| k.canonical == name).map(|k| k.id)
}

/// Return the registry entry for `kind`.
pub fn info(kind: ParamKind) -> &'static ParamKindInfo {
    match kind {
        ParamKind::PositionalOnly => &PARAM_KINDS[0],
        ParamKind::PositionalOrKeyword => &PARAM_KINDS[1],
        ParamKind::VarPositional => &PARAM_KINDS[2],
        ParamKind::KeywordOnly => &PARAM_KINDS[3],
        ParamKind::VarKeyword => &PARAM_KINDS[4],
    }
}

/// Return the canonical spelling for `kind`.
pub fn as_str(kind: ParamKind) -> &'static str {
    info(kind).canonical
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        as_str(self)
    }

    /// Whether a parameter of this kind can become a record field.
    pub fn is_accepted(self) -> bool {
        info(self).accepted
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
