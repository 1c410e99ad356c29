//! Per-type validation rules.
//!
//! One arm per value type, preceded by the universal code escape. The rules
//! never panic and never propagate errors: any parse failure is a plain
//! invalid verdict. Validation is re-run from scratch on every change.

use crate::core::color::Color;
use crate::core::types::{AuxConstraints, Derived, ValueType, Verdict};
use crate::services::paths;
use once_cell::sync::Lazy;
use regex::Regex;

/// File extensions accepted by table controls, order-preserved.
///
/// Everything a desktop table editor typically registers: delimited text,
/// the Excel family, html/xml exports, ODF, database containers, saved
/// queries, cubes, and print files.
pub const TABLE_EXTENSIONS: &[&str] = &[
    ".csv", ".tsv", ".txt",
    ".xl", ".xlsx", ".xlsm", ".xlsb", ".xlam", ".xltx", ".xltm", ".xls", ".xlt",
    ".htm", ".html", ".mht", ".mhtml",
    ".xml", ".xla", ".xlm",
    ".odc", ".ods",
    ".udl", ".dsn", ".mdb", ".mde", ".accdb", ".accde", ".dbc", ".dbf",
    ".iqy", ".dqy", ".rqy", ".oqy",
    ".cub", ".atom", ".atomsvc",
    ".prn", ".slk", ".dif",
];

// The list grammar is deliberately loose: the bracket classes do not pair
// opening and closing kinds, so `[1, 2)` passes. That shorthand tolerance
// is part of the observable contract.
static FULL_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[(\[].*[)\]]$").unwrap());
static OPEN_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[(\[].*[)\]]").unwrap());
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^["'].*["']"#).unwrap());
static COLOR_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$?(?:Advanced)?Color\((.*)\)$").unwrap());

/// Validate a raw value against its declared type.
///
/// Pure: reads the raw text, the type tag, and the auxiliary constraints,
/// and returns a [`Verdict`]. The caller stores the validity flag (and any
/// derived value) itself.
pub fn validate(raw: &str, value_type: ValueType, aux: &AuxConstraints) -> Verdict {
    // A leading $ marks the value as code regardless of the declared type,
    // and code is always accepted. This check precedes all others.
    if raw.starts_with('$') {
        return Verdict::valid();
    }

    match value_type {
        ValueType::String => check_string(raw),
        ValueType::Code => Verdict::valid(),
        ValueType::Number => Verdict::of(raw.trim().parse::<f64>().is_ok()),
        ValueType::Integer => Verdict::of(raw.trim().parse::<i64>().is_ok()),
        ValueType::List => check_list(raw),
        ValueType::Color => check_color(raw),
        ValueType::File | ValueType::Table => check_file(raw, aux),
    }
}

/// A string is invalid when it holds an unescaped quote: the value is later
/// interpolated into generated source, where a bare quote breaks the
/// surrounding literal.
fn check_string(raw: &str) -> Verdict {
    Verdict::of(!has_unescaped_quote(raw))
}

/// A quote escapes only when the byte immediately before it is a backslash.
fn has_unescaped_quote(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        (b == b'"' || b == b'\'') && (i == 0 || bytes[i - 1] != b'\\')
    })
}

/// The loose list grammar: empty, fully bracketed, a bare comma-separated
/// run, or a single space-free token (or quoted string).
fn check_list(raw: &str) -> Verdict {
    let empty = raw.is_empty();
    let full_list = FULL_LIST.is_match(raw);
    let part_list = raw.contains(',') && !OPEN_LIST.is_match(raw);
    let single_val = !raw.contains(' ') || QUOTED.is_match(raw);
    Verdict::of(empty || full_list || part_list || single_val)
}

/// Strip an optional `Color(...)` / `AdvancedColor(...)` wrapper (and its
/// optional `$` prefix), then hand the remaining token to the color
/// subsystem. The parsed color is the derived value.
fn check_color(raw: &str) -> Verdict {
    let token = match COLOR_CALL.captures(raw) {
        Some(captures) => captures.get(1).map_or(raw, |m| m.as_str()),
        None => raw,
    };
    match Color::parse(token) {
        Ok(color) => Verdict::valid_with(Derived::Color(color)),
        Err(_) => Verdict::invalid(),
    }
}

/// A file value must name an existing regular file once resolved, and must
/// end with an allowed extension when the control declares a set.
fn check_file(raw: &str, aux: &AuxConstraints) -> Verdict {
    let resolved = paths::resolve_absolute(raw, aux.working_dir());
    if !resolved.is_file() {
        return Verdict::invalid();
    }
    Verdict::of(aux.extension_allowed(raw))
}
