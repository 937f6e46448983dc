//! Recursive-descent JSON parser: converts JSON text into a [`Value`] tree.
//!
//! The parser walks the input once with a single byte cursor and builds the
//! tree as it goes. It handles:
//!
//! - Objects and arrays, with whitespace allowed around every value
//! - Strings with the escapes `\" \\ \/ \b \f \n \r \t`
//! - Numbers per the JSON grammar (`-? digit+ (. digit+)? ([eE] [+-]? digit+)?`)
//! - The literals `true`, `false`, `null`
//!
//! # Key design decisions
//!
//! - **Fail fast**: the first violation aborts the parse with
//!   [`JsonError::Parse`] carrying the byte offset of the cursor. Nodes built
//!   so far are dropped on the way out; there is no partial-result mode.
//! - **Integer/double split**: a literal without fraction or exponent that
//!   fits in `i64` is stored exactly as an integer. A literal with a `.`
//!   fraction is always a double. An exponent-only literal becomes an integer
//!   when its value is whole and within `i64`, a double otherwise.
//! - **Duplicate keys**: the later value overwrites the earlier one in place;
//!   the key keeps its first position.
//! - **Depth limit**: nesting beyond [`ParseOptions::max_depth`] is rejected
//!   before it can exhaust the stack.

use std::str::FromStr;

use tracing::{debug, instrument};

use crate::error::{JsonError, Result};
use crate::map::OrderedMap;
use crate::options::ParseOptions;
use crate::value::Value;

/// Smallest `f64` strictly above the `i64` range (2^63).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// Smallest `i64` as an `f64` (-2^63), exactly representable.
const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// Parse a complete JSON text with the default [`ParseOptions`].
///
/// The text must contain exactly one value, optionally surrounded by
/// whitespace. Empty input, trailing characters and any grammar violation
/// fail with [`JsonError::Parse`].
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &ParseOptions::default())
}

/// Parse a complete JSON text with explicit limits.
#[instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value> {
    if let Some(limit) = options.max_input_len {
        if text.len() > limit {
            debug!(len = text.len(), limit, "input exceeds size limit");
            return Err(JsonError::parse(
                0,
                format!("input of {} bytes exceeds the limit of {limit} bytes", text.len()),
            ));
        }
    }

    let result = Parser::new(text, options).parse_document();
    if let Err(JsonError::Parse { offset, message }) = &result {
        debug!(offset, %message, "rejected JSON input");
    }
    result
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Value> {
        parse(s)
    }
}

/// Cursor state for one parse.
struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, options: &ParseOptions) -> Self {
        Parser {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// One value, then nothing but whitespace.
    fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        if self.pos < self.bytes.len() {
            return Err(self.error("unexpected characters after the top-level value"));
        }
        Ok(value)
    }

    /// `ws (object | array | string | number | true | false | null) ws`
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let value = match self.peek() {
            None => return Err(self.error("expected a value but reached end of input")),
            Some(b'{') => self.parse_object()?,
            Some(b'[') => self.parse_array()?,
            Some(b'"') => Value::String(self.parse_string()?),
            Some(b't') => self.parse_keyword("true", Value::Boolean(true))?,
            Some(b'f') => self.parse_keyword("false", Value::Boolean(false))?,
            Some(b'n') => self.parse_keyword("null", Value::Null)?,
            Some(b'-' | b'0'..=b'9') => self.parse_number()?,
            Some(_) => {
                let found = self.describe_current();
                return Err(self.error(format!("unexpected {found} where a value was expected")));
            }
        };
        self.skip_whitespace();
        Ok(value)
    }

    /// `"{" ws (member ("," member)*)? "}"` where `member := ws string ws ":" value`
    fn parse_object(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.pos += 1; // '{'
        let mut map = OrderedMap::new();

        self.skip_whitespace();
        if self.eat(b'}') {
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                let found = self.describe_current();
                return Err(self.error(format!("expected a string key, found {found}")));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            if !self.eat(b':') {
                let found = self.describe_current();
                return Err(self.error(format!("expected ':' after object key, found {found}")));
            }

            let value = self.parse_value()?;
            map.insert(key, value);

            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                None => return Err(self.error("unterminated object, expected ',' or '}'")),
                Some(_) => {
                    let found = self.describe_current();
                    return Err(self.error(format!("expected ',' or '}}' in object, found {found}")));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// `"[" ws (value ("," value)*)? "]"`
    fn parse_array(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.pos += 1; // '['
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.eat(b']') {
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                None => return Err(self.error("unterminated array, expected ',' or ']'")),
                Some(_) => {
                    let found = self.describe_current();
                    return Err(self.error(format!("expected ',' or ']' in array, found {found}")));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Parse a quoted string starting at the opening quote and return the
    /// decoded text. Unescaped runs are copied as whole slices.
    fn parse_string(&mut self) -> Result<String> {
        let opening = self.pos;
        self.pos += 1; // '"'
        let mut out = String::new();
        let mut run_start = self.pos;

        loop {
            match self.bytes.get(self.pos) {
                None => return Err(JsonError::parse(opening, "unterminated string")),
                Some(b'"') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    let unescaped = match self.bytes.get(self.pos + 1) {
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(b'/') => '/',
                        Some(b'b') => '\u{8}',
                        Some(b'f') => '\u{c}',
                        Some(b'n') => '\n',
                        Some(b'r') => '\r',
                        Some(b't') => '\t',
                        Some(_) => {
                            let escaped = self
                                .text
                                .get(self.pos + 1..)
                                .and_then(|rest| rest.chars().next())
                                .unwrap_or(char::REPLACEMENT_CHARACTER);
                            return Err(self.error(format!("invalid escape sequence '\\{escaped}'")));
                        }
                        None => return Err(JsonError::parse(opening, "unterminated string")),
                    };
                    out.push(unescaped);
                    self.pos += 2;
                    run_start = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// `"-"? digit+ ("." digit+)? (("e"|"E") ("+"|"-")? digit+)?`
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        self.eat(b'-');
        if !self.eat_digits() {
            return Err(self.error("expected a digit in number"));
        }

        let has_fraction = self.eat(b'.');
        if has_fraction && !self.eat_digits() {
            return Err(self.error("expected a digit after the decimal point"));
        }

        let has_exponent = matches!(self.peek(), Some(b'e' | b'E'));
        if has_exponent {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !self.eat_digits() {
                return Err(self.error("expected a digit in exponent"));
            }
        }

        let literal = &self.text[start..self.pos];
        classify_number(literal, has_fraction, has_exponent)
            .ok_or_else(|| JsonError::parse(start, format!("number {literal} is out of range")))
    }

    fn parse_keyword(&mut self, keyword: &str, value: Value) -> Result<Value> {
        if self.bytes[self.pos..].starts_with(keyword.as_bytes()) {
            self.pos += keyword.len();
            Ok(value)
        } else {
            Err(self.error(format!("invalid literal, expected '{keyword}'")))
        }
    }

    fn enter_container(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            debug!(offset = self.pos, max_depth = self.max_depth, "nesting depth limit reached");
            return Err(self.error(format!(
                "nesting depth exceeds the limit of {}",
                self.max_depth
            )));
        }
        self.depth += 1;
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Consume one run of ASCII digits; false if there was none.
    fn eat_digits(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// The character under the cursor, quoted, for diagnostics.
    fn describe_current(&self) -> String {
        match self.text.get(self.pos..).and_then(|rest| rest.chars().next()) {
            Some(c) => format!("{c:?}"),
            None => "end of input".to_string(),
        }
    }

    fn error(&self, message: impl Into<String>) -> JsonError {
        JsonError::parse(self.pos, message)
    }
}

/// Decide integer vs double for a literal that already matched the number
/// grammar. `None` when the magnitude overflows `f64`.
fn classify_number(literal: &str, has_fraction: bool, has_exponent: bool) -> Option<Value> {
    if !has_fraction && !has_exponent {
        if let Ok(n) = literal.parse::<i64>() {
            return Some(Value::Integer(n));
        }
    }

    let d: f64 = literal.parse().ok()?;
    if !d.is_finite() {
        return None;
    }

    let whole_in_range = d.fract() == 0.0 && (I64_LOWER_BOUND..I64_UPPER_BOUND).contains(&d);
    if has_exponent && !has_fraction && whole_in_range {
        return Some(Value::Integer(d as i64));
    }
    Some(Value::Double(d))
}
