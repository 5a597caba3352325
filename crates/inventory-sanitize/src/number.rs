use serde_json::{Number, Value};

/// Best-effort conversion of a single value into a JSON number.
///
/// - `null` becomes `0`
/// - numbers are returned as they are
/// - strings are trimmed and stripped of `,` thousands separators, then read
///   as a float when a `.` is present and as an integer otherwise; a blank
///   string becomes `0`. `_` is accepted between two digits (`1_000`)
/// - anything else, including strings that do not parse, is returned
///   untouched (the original string, whitespace and all)
///
/// Never fails.
pub fn try_number(value: Value) -> Value {
    match value {
        Value::Null => Value::from(0),
        Value::String(s) => match parse_numeric(&s) {
            Some(n) => Value::Number(n),
            None => Value::String(s),
        },
        other => other,
    }
}

/// The string half of [`try_number`]: `None` means "keep the original".
pub fn parse_numeric(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Number::from(0));
    }
    let cleaned = strip_digit_separators(&trimmed.replace(',', ""))?;
    if cleaned.contains('.') {
        // Non-finite results have no JSON representation.
        cleaned.parse::<f64>().ok().and_then(Number::from_f64)
    } else {
        parse_integer(&cleaned)
    }
}

/// Drops `_` separators, which are only valid with a digit on each side.
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !matches!(before, Some(b'0'..=b'9')) || !matches!(after, Some(b'0'..=b'9')) {
            return None;
        }
    }
    Some(s.replace('_', ""))
}

fn parse_integer(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    s.parse::<u64>().ok().map(Number::from)
}
