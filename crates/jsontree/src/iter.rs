//! Iterators over object and array nodes.

use std::slice;

use crate::map::{self, OrderedMap};
use crate::value::Value;

/// Iterator over the children of an object (key-insertion order) or an
/// array (index order). Created by [`Value::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: IterInner<'a>,
    key: Option<&'a str>,
}

#[derive(Debug, Clone)]
enum IterInner<'a> {
    Array(slice::Iter<'a, Value>),
    Object(map::Iter<'a, Value>),
}

impl<'a> Iter<'a> {
    pub(crate) fn array(items: &'a [Value]) -> Self {
        Iter {
            inner: IterInner::Array(items.iter()),
            key: None,
        }
    }

    pub(crate) fn object(map: &'a OrderedMap<Value>) -> Self {
        Iter {
            inner: IterInner::Object(map.iter()),
            key: None,
        }
    }

    /// Key of the object member most recently returned by `next`.
    /// Always `None` when iterating an array.
    pub fn key(&self) -> Option<&'a str> {
        self.key
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Array(items) => items.next(),
            IterInner::Object(members) => {
                let (key, value) = members.next()?;
                self.key = Some(key);
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Array(items) => items.size_hint(),
            IterInner::Object(members) => members.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Mutable counterpart of [`Iter`]. Created by [`Value::iter_mut`].
#[derive(Debug)]
pub enum IterMut<'a> {
    Array(slice::IterMut<'a, Value>),
    Object(map::ValuesMut<'a, Value>),
}

impl<'a> IterMut<'a> {
    pub(crate) fn array(items: &'a mut [Value]) -> Self {
        IterMut::Array(items.iter_mut())
    }

    pub(crate) fn object(map: &'a mut OrderedMap<Value>) -> Self {
        IterMut::Object(map.values_mut())
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            IterMut::Array(items) => items.next(),
            IterMut::Object(values) => values.next(),
        }
    }
}

/// `(key, value)` pairs of an object node. Created by [`Value::entries`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: map::Iter<'a, Value>,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(map: &'a OrderedMap<Value>) -> Self {
        Entries { inner: map.iter() }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
