//! Canonical serializer: renders a [`Value`] tree back into compact JSON text.
//!
//! The output contains no inserted whitespace:
//!
//! - **Objects**: `{"key":value,...}` in key-insertion order
//! - **Arrays**: `[v1,v2,...]` in index order
//! - **Strings**: quoted; `"` and `\` escaped, `\b \f \n \r \t` written as
//!   two-character escapes, everything else written as-is
//! - **Integers**: plain decimal
//! - **Doubles**: shortest text that reads back to the same `f64`, always
//!   carrying a fraction or exponent marker so it re-parses as a double
//! - **Unset** nodes cannot be rendered and fail the whole call
//!
//! # Example
//! ```
//! use jsontree::parse;
//! let value = parse(r#"{ "b": 1, "a": [true, null, 2.5] }"#).unwrap();
//! assert_eq!(value.to_text().unwrap(), r#"{"b":1,"a":[true,null,2.5]}"#);
//! ```

use tracing::debug;

use crate::error::{JsonError, Result};
use crate::value::Value;

/// Render `value` in canonical compact form.
pub fn to_text(value: &Value) -> Result<String> {
    let mut out = String::new();
    write_value(value, &mut out)?;
    Ok(out)
}

impl Value {
    /// Render this tree in canonical compact form.
    ///
    /// Fails with [`JsonError::Type`] if any reachable node is `Unset`.
    pub fn to_text(&self) -> Result<String> {
        to_text(self)
    }

    /// Append the canonical form of this tree to `out`.
    ///
    /// On failure `out` may already hold a partial rendering.
    pub fn write_text(&self, out: &mut String) -> Result<()> {
        write_value(self, out)
    }
}

/// Dispatch on the node variant.
fn write_value(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::Object(map) => {
            out.push('{');
            for (i, (key, member)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(member, out)?;
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        Value::String(s) => write_string(s, out),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Double(d) => out.push_str(&format_double(*d)),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
        Value::Unset => {
            debug!("refusing to serialize an unset node");
            return Err(JsonError::indeterminate());
        }
    }
    Ok(())
}

/// Emit a quoted string. Only the escapes the parser understands are
/// produced, so the output always reads back to the same text.
fn write_string(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Format a double as the shortest text that round-trips to the same bits:
/// - Uses Rust's `{:?}` float formatting (exponent form for very large or
///   very small magnitudes, e.g. `1.16e22`)
/// - A mantissa without a fraction gains `.0` (`1e16` → `1.0e16`) so the
///   text is never classified as an integer on re-parse
/// - NaN and infinities have no JSON form and render as `null`
pub(crate) fn format_double(d: f64) -> String {
    if !d.is_finite() {
        return "null".to_string();
    }
    let s = format!("{d:?}");
    if s.contains('.') {
        return s;
    }
    match s.find('e') {
        Some(pos) => format!("{}.0{}", &s[..pos], &s[pos..]),
        None => format!("{s}.0"),
    }
}
