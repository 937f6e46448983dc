//! # jsontree
//!
//! A small, self-contained JSON library: a recursive-descent parser that turns
//! JSON text into an owned tree, a variant-typed [`Value`] node that can hold
//! any JSON value, and a serializer that renders the tree back into compact
//! canonical text.
//!
//! ## Quick start
//!
//! ```rust
//! use jsontree::{parse, Value};
//!
//! let mut doc = parse(r#"{"name": "Alicia", "scores": [95, 87]}"#).unwrap();
//! assert_eq!(doc["name"].get_string().unwrap(), "Alicia");
//!
//! doc["scores"][2] = Value::from(92);
//! doc["active"] = true.into();
//! assert_eq!(
//!     doc.to_text().unwrap(),
//!     r#"{"name":"Alicia","scores":[95,87,92],"active":true}"#
//! );
//! ```
//!
//! Object members keep their insertion order. Indexing a missing member or an
//! out-of-bounds element through `IndexMut`, [`Value::member`] or
//! [`Value::element`] creates an *unset* placeholder; a tree that still holds
//! one refuses to serialize. See [`value`] for details.
//!
//! ## Modules
//!
//! - [`parser`]: JSON text → [`Value`]
//! - [`serializer`]: [`Value`] → canonical JSON text
//! - [`value`]: the tree node, accessors and structural literals
//! - [`map`]: insertion-ordered map backing objects
//! - [`iter`]: iterators over object and array nodes
//! - [`options`]: parser limits
//! - [`error`]: error types

mod convert;
pub mod error;
pub mod iter;
pub mod map;
pub mod options;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{JsonError, Result};
pub use map::OrderedMap;
pub use options::ParseOptions;
pub use parser::{parse, parse_with};
pub use serializer::to_text;
pub use value::{Value, ValueType};

/// Build a [`Value`] with [`Value::literal`] semantics.
///
/// Each entry is either a bracketed group (itself built with `literal!`),
/// `null`, or any expression convertible into a `Value`. A literal whose
/// entries are all `["key", value]` pairs becomes an object; anything else
/// becomes an array.
///
/// ```
/// use jsontree::literal;
///
/// let person = literal![["name", "Alicia"], ["age", 32], ["tags", ["a", "b", "c"]]];
/// assert_eq!(person.to_text().unwrap(), r#"{"name":"Alicia","age":32,"tags":["a","b","c"]}"#);
///
/// let list = literal!["volleyball", 1, null, 1.2, false];
/// assert_eq!(list.to_text().unwrap(), r#"["volleyball",1,null,1.2,false]"#);
/// ```
#[macro_export]
macro_rules! literal {
    (@entries [$($done:expr,)*]) => {
        $crate::Value::literal(::std::vec![$($done,)*])
    };
    (@entries [$($done:expr,)*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::literal!(@entries [$($done,)* $crate::literal![$($inner)*],] $($($rest)*)?)
    };
    (@entries [$($done:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::literal!(@entries [$($done,)* $crate::Value::Null,] $($($rest)*)?)
    };
    (@entries [$($done:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::literal!(@entries [$($done,)* $crate::Value::from($next),] $($($rest)*)?)
    };
    ($($entries:tt)*) => {
        $crate::literal!(@entries [] $($entries)*)
    };
}
