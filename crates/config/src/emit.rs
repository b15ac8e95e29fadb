//! YAML emission that stays unambiguous for YAML 1.1 readers.
//!
//! `serde_yaml` quotes a string only when its own YAML 1.2 resolver would read
//! it back as something else. Readers of the settings file resolve plain
//! scalars with YAML 1.1 rules, where `yes`, `on`, `0777` or `1:30` are not
//! strings. Every such string is emitted single-quoted.
//!
//! Invariants:
//! - Only the quoting style of string scalars changes; structure, order and
//!   non-string values are exactly what `serde_yaml` produces.
//! - Over-quoting is harmless, so the ambiguity check errs on the side of quoting.

use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

/// Stand-in delimiter for strings awaiting quotes. Emitted plain by `serde_yaml`.
const MARKER: char = '\u{E000}';

/// Serialize `settings`, single-quoting strings a YAML 1.1 reader would not
/// load as strings.
pub fn to_yaml_string(settings: &Mapping) -> Result<String, serde_yaml::Error> {
    if settings
        .iter()
        .any(|(key, value)| contains_marker(key) || contains_marker(value))
    {
        return serde_yaml::to_string(settings);
    }

    let mut quoted = Vec::new();
    let masked = mask_mapping(settings, &mut quoted);
    let mut output = serde_yaml::to_string(&masked)?;

    for (index, original) in quoted.iter().enumerate() {
        output = output.replace(&marker(index), &single_quoted(original));
    }

    Ok(output)
}

/// Returns true if a YAML 1.1 reader would resolve `scalar`, written plain, to
/// something other than a string.
pub fn is_yaml11_ambiguous(scalar: &str) -> bool {
    let lower = scalar.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "y" | "yes"
            | "n"
            | "no"
            | "on"
            | "off"
            | "true"
            | "false"
            | "~"
            | "null"
            | "<<"
            | "="
    ) {
        return true;
    }

    looks_numeric(&lower) || looks_like_date(scalar)
}

fn looks_numeric(lower: &str) -> bool {
    let body = lower.strip_prefix(['-', '+']).unwrap_or(lower);
    if matches!(body, ".inf" | ".nan") {
        return true;
    }

    if let Some(hex) = body.strip_prefix("0x") {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit() || c == '_');
    }
    if let Some(bin) = body.strip_prefix("0b") {
        return !bin.is_empty() && bin.chars().all(|c| matches!(c, '0' | '1' | '_'));
    }

    // Decimal, octal, sexagesimal and float forms share this alphabet.
    match body.chars().next() {
        Some(first) if first.is_ascii_digit() || first == '.' => {
            body.chars().any(|c| c.is_ascii_digit())
                && body
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '_' | '.' | ':' | 'e' | '+' | '-'))
        }
        _ => false,
    }
}

/// `YYYY-M-D` prefix of a YAML 1.1 timestamp.
fn looks_like_date(scalar: &str) -> bool {
    let mut parts = scalar.splitn(3, '-');
    let (Some(year), Some(month), Some(rest)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let day: String = rest.chars().take_while(char::is_ascii_digit).collect();

    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && (1..=2).contains(&month.len())
        && month.chars().all(|c| c.is_ascii_digit())
        && (1..=2).contains(&day.len())
}

fn marker(index: usize) -> String {
    format!("{MARKER}{index}{MARKER}")
}

fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn mask_mapping(mapping: &Mapping, quoted: &mut Vec<String>) -> Mapping {
    mapping
        .iter()
        .map(|(key, value)| (mask(key, quoted), mask(value, quoted)))
        .collect()
}

fn mask(value: &Value, quoted: &mut Vec<String>) -> Value {
    match value {
        Value::String(s) if is_yaml11_ambiguous(s) => {
            quoted.push(s.clone());
            Value::String(marker(quoted.len() - 1))
        }
        Value::Sequence(items) => Value::Sequence(items.iter().map(|v| mask(v, quoted)).collect()),
        Value::Mapping(mapping) => Value::Mapping(mask_mapping(mapping, quoted)),
        Value::Tagged(tagged) => Value::Tagged(Box::new(TaggedValue {
            tag: tagged.tag.clone(),
            value: mask(&tagged.value, quoted),
        })),
        other => other.clone(),
    }
}

fn contains_marker(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains(MARKER),
        Value::Sequence(items) => items.iter().any(contains_marker),
        Value::Mapping(mapping) => mapping
            .iter()
            .any(|(key, value)| contains_marker(key) || contains_marker(value)),
        Value::Tagged(tagged) => contains_marker(&tagged.value),
        _ => false,
    }
}
