//! Insertion-ordered, string-keyed map backing JSON objects.
//!
//! Lookups and assignments go through a hash table; iteration always follows
//! the order in which distinct keys were first inserted. Overwriting an
//! existing key keeps its position. Removing a key and inserting it again
//! appends it at the end.

use indexmap::IndexMap;

/// A hash map that remembers key insertion order.
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    entries: IndexMap<String, V>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        OrderedMap {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Return the value stored at `key`, inserting `V::default()` at the end of
    /// the order if the key is absent.
    pub fn get_or_insert(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Like [`get_or_insert`](Self::get_or_insert) with a caller-supplied default.
    pub fn get_or_insert_with<F>(&mut self, key: &str, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        // Avoid allocating the key when it is already present.
        let index = match self.entries.get_index_of(key) {
            Some(index) => index,
            None => self.entries.insert_full(key.to_string(), default()).0,
        };
        &mut self.entries[index]
    }

    /// Assign `value` to `key`. An existing key keeps its position and the
    /// previous value is returned; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Remove `key` from both the lookup table and the order sequence.
    /// Remaining keys keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys {
            inner: self.entries.keys(),
        }
    }

    /// Values in key-insertion order.
    pub fn values(&self) -> Values<'_, V> {
        Values {
            inner: self.entries.values(),
        }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            inner: self.entries.values_mut(),
        }
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl<V: PartialEq> PartialEq for OrderedMap<V> {
    /// Two maps are equal only when they hold equal entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for OrderedMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut OrderedMap<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Iterator over keys in insertion order.
#[derive(Debug, Clone)]
pub struct Keys<'a, V> {
    inner: indexmap::map::Keys<'a, String, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// Iterator over values in key-insertion order.
#[derive(Debug, Clone)]
pub struct Values<'a, V> {
    inner: indexmap::map::Values<'a, String, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

#[derive(Debug)]
pub struct ValuesMut<'a, V> {
    inner: indexmap::map::ValuesMut<'a, String, V>,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over `(key, value)` pairs in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: indexmap::map::Iter<'a, String, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

#[derive(Debug)]
pub struct IterMut<'a, V> {
    inner: indexmap::map::IterMut<'a, String, V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
