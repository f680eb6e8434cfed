use std::fmt;
use std::iter::FromIterator;

/// A small map keyed by strings, kept sorted by key.
///
/// Inserting an existing key overwrites its value; every other key is kept.
/// This is the merge rule used for tokens, server constraints, defaults and
/// attributes.
#[derive(Clone, PartialEq, Eq)]
pub struct StrMap<T> {
    keys: Vec<Box<str>>,
    values: Vec<T>,
}

/// Attribute values captured or defaulted for a route.
pub type Attributes = StrMap<String>;

impl<T> Default for StrMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StrMap<T> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        let i = self.find_index(key).ok()?;
        self.values.get(i)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_ok()
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<Box<str>>, value: T) -> Option<T> {
        let key = key.into();
        match self.find_index(&key) {
            Ok(i) => Some(std::mem::replace(&mut self.values[i], value)),
            Err(i) => {
                self.keys.insert(i, key);
                self.values.insert(i, value);
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        let i = self.find_index(key).ok()?;
        self.keys.remove(i);
        Some(self.values.remove(i))
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Merges `other` into `self`: keys of `other` win, the rest stay.
    pub fn merge<K, V, I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<T>,
    {
        for (k, v) in other {
            self.insert(k, v.into());
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.keys.iter(),
            values: self.values.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(|k| &**k)
    }

    fn find_index(&self, key: &str) -> Result<usize, usize> {
        self.keys.binary_search_by(|k| (**k).cmp(key))
    }
}

pub struct Iter<'a, T> {
    keys: std::slice::Iter<'a, Box<str>>,
    values: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.keys.next()?;
        let v = self.values.next()?;
        Some((&**k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a StrMap<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<K: Into<Box<str>>, T> FromIterator<(K, T)> for StrMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Box<str>>, T> Extend<(K, T)> for StrMap<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StrMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
