//! The JSON tree node.
//!
//! A [`Value`] owns its whole subtree: object members and array elements are
//! held by value, so dropping or reassigning a node releases everything below
//! it. There are no shared or back references.
//!
//! # Auto-vivification
//!
//! [`Value::member`] and [`Value::element`] (and the `IndexMut` impls built on
//! them) are *mutating reads*: asking for a key that does not exist inserts an
//! [`Value::Unset`] child at that key, and asking for an index past the end
//! grows the array with `Unset` fillers. An `Unset` node is not JSON; any tree
//! that still contains one fails to serialize until the node is assigned.
//! Use [`Value::get`], [`Value::get_index`] or the shared `Index` impls to
//! probe without side effects.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{JsonError, Result};
use crate::iter::{Entries, Iter, IterMut};
use crate::map::OrderedMap;

/// The active variant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Object,
    Array,
    String,
    IntegerNumber,
    DoubleNumber,
    Boolean,
    Null,
    /// A node created by auto-vivifying access that has not been assigned yet.
    Indeterminate,
}

impl ValueType {
    /// Human-readable label used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Array => "Array",
            ValueType::Object => "Object",
            ValueType::Null => "Null",
            ValueType::Indeterminate => "Indeterminate",
            ValueType::DoubleNumber => "Double Number",
            ValueType::IntegerNumber => "Integral Number",
            ValueType::String => "String",
            ValueType::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any JSON value, plus the internal `Unset` state.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Members in key-insertion order.
    Object(OrderedMap<Value>),
    Array(Vec<Value>),
    /// Decoded text (escape sequences already resolved).
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    #[default]
    Null,
    /// Placeholder left by auto-vivifying access. Distinct from `Null` and not
    /// serializable.
    Unset,
}

/// Returned by the shared `Index` impls for missing members and elements.
static UNSET: Value = Value::Unset;

impl Value {
    /// An empty object.
    pub fn object() -> Value {
        Value::Object(OrderedMap::new())
    }

    /// An empty array.
    pub fn array() -> Value {
        Value::Array(Vec::new())
    }

    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Object(_) => ValueType::Object,
            Value::Array(_) => ValueType::Array,
            Value::String(_) => ValueType::String,
            Value::Integer(_) => ValueType::IntegerNumber,
            Value::Double(_) => ValueType::DoubleNumber,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Null => ValueType::Null,
            Value::Unset => ValueType::Indeterminate,
        }
    }

    /// One of "Array", "Object", "Null", "Indeterminate", "Double Number",
    /// "Integral Number", "String", "Boolean".
    pub fn get_type_name(&self) -> &'static str {
        self.get_type().name()
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }

    // ------------------------------------------------------------------
    // Typed extraction
    // ------------------------------------------------------------------

    pub fn get_boolean(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(JsonError::mismatch(ValueType::Boolean, other.get_type())),
        }
    }

    /// Returns a copy of the string payload.
    pub fn get_string(&self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s.clone()),
            other => Err(JsonError::mismatch(ValueType::String, other.get_type())),
        }
    }

    pub fn get_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(JsonError::mismatch(
                ValueType::IntegerNumber,
                other.get_type(),
            )),
        }
    }

    pub fn get_double(&self) -> Result<f64> {
        match self {
            Value::Double(d) => Ok(*d),
            other => Err(JsonError::mismatch(
                ValueType::DoubleNumber,
                other.get_type(),
            )),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&OrderedMap<Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut OrderedMap<Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Container access
    // ------------------------------------------------------------------

    /// Mutable access to the member at `key`, inserting an `Unset` child if
    /// the key is absent. Fails with [`JsonError::Type`] on a non-object.
    pub fn member(&mut self, key: &str) -> Result<&mut Value> {
        match self {
            Value::Object(map) => Ok(map.get_or_insert_with(key, || Value::Unset)),
            other => Err(JsonError::unsupported(
                "object member access",
                other.get_type(),
            )),
        }
    }

    /// Mutable access to the element at `index`. An index past the end grows
    /// the array to `index + 1` elements, filling new slots with `Unset`.
    ///
    /// Fails with [`JsonError::Type`] on a non-array and with
    /// [`JsonError::OutOfRange`] for a negative index or one too large to
    /// allocate.
    pub fn element(&mut self, index: i64) -> Result<&mut Value> {
        match self {
            Value::Array(items) => {
                let len = items.len();
                let out_of_range = || JsonError::OutOfRange { index, len };
                let slot = usize::try_from(index).map_err(|_| out_of_range())?;
                if slot >= len {
                    let grown = slot.checked_add(1).ok_or_else(out_of_range)?;
                    items
                        .try_reserve(grown - len)
                        .map_err(|_| out_of_range())?;
                }
                Ok(vivify_slot(items, slot))
            }
            other => Err(JsonError::unsupported(
                "array element access",
                other.get_type(),
            )),
        }
    }

    /// Non-mutating member lookup. `None` for a missing key or a non-object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Non-mutating element lookup. `None` past the end or on a non-array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Remove the member at `key`, returning how many members were removed
    /// (0 or 1). Fails with [`JsonError::Type`] on a non-object.
    pub fn erase_member(&mut self, key: &str) -> Result<usize> {
        match self {
            Value::Object(map) => Ok(usize::from(map.remove(key).is_some())),
            other => Err(JsonError::unsupported("erasing a member", other.get_type())),
        }
    }

    /// Remove the element at `index`, shifting later elements down by one.
    /// The index must be in bounds.
    pub fn erase_element(&mut self, index: i64) -> Result<Value> {
        match self {
            Value::Array(items) => {
                let len = items.len();
                match usize::try_from(index) {
                    Ok(slot) if slot < len => Ok(items.remove(slot)),
                    _ => Err(JsonError::OutOfRange { index, len }),
                }
            }
            other => Err(JsonError::unsupported(
                "erasing an element",
                other.get_type(),
            )),
        }
    }

    /// Values of an object (key-insertion order) or an array (index order).
    pub fn iter(&self) -> Result<Iter<'_>> {
        match self {
            Value::Object(map) => Ok(Iter::object(map)),
            Value::Array(items) => Ok(Iter::array(items)),
            other => Err(JsonError::unsupported("iteration", other.get_type())),
        }
    }

    pub fn iter_mut(&mut self) -> Result<IterMut<'_>> {
        match self {
            Value::Object(map) => Ok(IterMut::object(map)),
            Value::Array(items) => Ok(IterMut::array(items)),
            other => Err(JsonError::unsupported("iteration", other.get_type())),
        }
    }

    /// `(key, value)` pairs of an object in insertion order.
    pub fn entries(&self) -> Result<Entries<'_>> {
        match self {
            Value::Object(map) => Ok(Entries::new(map)),
            other => Err(JsonError::unsupported(
                "key/value iteration",
                other.get_type(),
            )),
        }
    }

    // ------------------------------------------------------------------
    // Assignment and construction
    // ------------------------------------------------------------------

    /// Replace this node's entire value. The previous payload is dropped.
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }

    /// Move the value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Build a node from a list of entries, deciding object-vs-array once:
    /// it is an object iff every entry is a two-element array whose first
    /// element is a string (`["key", value]`); otherwise each entry becomes one
    /// array element. An empty entry list yields an empty object.
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// let pair = |k: &str, v: Value| Value::Array(vec![Value::from(k), v]);
    /// let person = Value::literal([pair("name", "Alicia".into()), pair("age", 32.into())]);
    /// assert_eq!(person.to_text().unwrap(), r#"{"name":"Alicia","age":32}"#);
    ///
    /// let mixed = Value::literal(["volleyball".into(), 1.into(), Value::Null]);
    /// assert_eq!(mixed.to_text().unwrap(), r#"["volleyball",1,null]"#);
    /// ```
    pub fn literal<I>(entries: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        let entries: Vec<Value> = entries.into_iter().collect();
        if !entries.iter().all(is_key_value_pair) {
            return Value::Array(entries);
        }

        let mut map = OrderedMap::with_capacity(entries.len());
        for entry in entries {
            if let Value::Array(pair) = entry {
                let mut pair = pair.into_iter();
                if let (Some(Value::String(key)), Some(value)) = (pair.next(), pair.next()) {
                    map.insert(key, value);
                }
            }
        }
        Value::Object(map)
    }
}

fn is_key_value_pair(entry: &Value) -> bool {
    match entry {
        Value::Array(pair) => pair.len() == 2 && matches!(pair[0], Value::String(_)),
        _ => false,
    }
}

fn vivify_slot(items: &mut Vec<Value>, slot: usize) -> &mut Value {
    if slot >= items.len() {
        items.resize_with(slot + 1, || Value::Unset);
    }
    &mut items[slot]
}

impl PartialEq for Value {
    /// Structural equality, matching equality of canonical text: object
    /// members must appear in the same order, doubles compare by their
    /// rendered form (so a non-finite double equals `Null`), and an `Unset`
    /// node equals nothing.
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Double(d), Value::Null) | (Value::Null, Value::Double(d)) => !d.is_finite(),
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => {
                crate::serializer::format_double(*a) == crate::serializer::format_double(*b)
            }
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Non-mutating lookup; a missing member (or a non-object) yields an
    /// `Unset` node.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&UNSET)
    }
}

impl IndexMut<&str> for Value {
    /// Auto-vivifying member access.
    ///
    /// # Panics
    ///
    /// Panics if the node is not an object. Use [`Value::member`] for a
    /// fallible version.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self {
            Value::Object(map) => map.get_or_insert_with(key, || Value::Unset),
            other => panic!(
                "cannot index into a JSON node of type {} with key {key:?}",
                other.get_type()
            ),
        }
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&UNSET)
    }
}

impl IndexMut<usize> for Value {
    /// Auto-vivifying element access; grows the array as needed.
    ///
    /// # Panics
    ///
    /// Panics if the node is not an array. Use [`Value::element`] for a
    /// fallible version.
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self {
            Value::Array(items) => vivify_slot(items, index),
            other => panic!(
                "cannot index into a JSON node of type {} with index {index}",
                other.get_type()
            ),
        }
    }
}
