//! Uniform subscript access over Array and Object payloads.
//!
//! A single sealed [`Key`] trait lets `get`/`get_mut`/`entry` accept either
//! a numeric index or a string key. Conversions between the two follow the
//! container, not the key: a string key against an Array is parsed as a
//! decimal index, and a numeric key against an Object is formatted as a
//! decimal string.

use crate::error::DynamicError;
use crate::value::{Dynamic, Kind};

mod private {
    pub trait Sealed {}

    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
}

/// A subscript key: a numeric index or a string key.
pub trait Key: private::Sealed {
    #[doc(hidden)]
    fn index_into<'a>(&self, v: &'a Dynamic) -> Result<&'a Dynamic, DynamicError>;
    #[doc(hidden)]
    fn index_into_mut<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError>;
    #[doc(hidden)]
    fn index_or_insert<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError>;
}

fn array_get(items: &[Dynamic], index: usize) -> Result<&Dynamic, DynamicError> {
    let len = items.len();
    items
        .get(index)
        .ok_or(DynamicError::IndexOutOfRange { index, len })
}

fn array_get_mut(items: &mut [Dynamic], index: usize) -> Result<&mut Dynamic, DynamicError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(DynamicError::IndexOutOfRange { index, len })
}

impl Key for usize {
    fn index_into<'a>(&self, v: &'a Dynamic) -> Result<&'a Dynamic, DynamicError> {
        match v {
            Dynamic::Array(items) => array_get(items, *self),
            Dynamic::Object(map) => {
                let key = self.to_string();
                map.get(&key).ok_or(DynamicError::KeyNotFound(key))
            }
            other => Err(DynamicError::invalid_access(Kind::Array, other.kind())),
        }
    }

    fn index_into_mut<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError> {
        match v {
            Dynamic::Array(items) => array_get_mut(items, *self),
            Dynamic::Object(map) => {
                let key = self.to_string();
                map.get_mut(&key).ok_or(DynamicError::KeyNotFound(key))
            }
            other => Err(DynamicError::invalid_access(Kind::Array, other.kind())),
        }
    }

    fn index_or_insert<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError> {
        match v {
            // Arrays never auto-grow: writes stay bounds-checked.
            Dynamic::Array(items) => array_get_mut(items, *self),
            Dynamic::Object(map) => Ok(map.entry(self.to_string()).or_default()),
            other => Err(DynamicError::invalid_access(Kind::Array, other.kind())),
        }
    }
}

impl Key for str {
    fn index_into<'a>(&self, v: &'a Dynamic) -> Result<&'a Dynamic, DynamicError> {
        match v {
            Dynamic::Object(map) => map
                .get(self)
                .ok_or_else(|| DynamicError::KeyNotFound(self.to_owned())),
            Dynamic::Array(items) => array_get(items, parse_index(self)?),
            other => Err(DynamicError::invalid_access(Kind::Object, other.kind())),
        }
    }

    fn index_into_mut<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError> {
        match v {
            Dynamic::Object(map) => map
                .get_mut(self)
                .ok_or_else(|| DynamicError::KeyNotFound(self.to_owned())),
            Dynamic::Array(items) => array_get_mut(items, parse_index(self)?),
            other => Err(DynamicError::invalid_access(Kind::Object, other.kind())),
        }
    }

    fn index_or_insert<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError> {
        match v {
            Dynamic::Object(map) => Ok(map.entry(self.to_owned()).or_default()),
            Dynamic::Array(_) => self.index_into_mut(v),
            other => Err(DynamicError::invalid_access(Kind::Object, other.kind())),
        }
    }
}

/// A non-numeric string key cannot address any Array element; the error
/// names the key so the caller sees what failed to parse.
fn parse_index(key: &str) -> Result<usize, DynamicError> {
    key.parse::<usize>()
        .map_err(|_| DynamicError::KeyNotFound(key.to_owned()))
}

impl Key for String {
    fn index_into<'a>(&self, v: &'a Dynamic) -> Result<&'a Dynamic, DynamicError> {
        self.as_str().index_into(v)
    }

    fn index_into_mut<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError> {
        self.as_str().index_into_mut(v)
    }

    fn index_or_insert<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError> {
        self.as_str().index_or_insert(v)
    }
}

impl<K: Key + ?Sized> Key for &K {
    fn index_into<'a>(&self, v: &'a Dynamic) -> Result<&'a Dynamic, DynamicError> {
        (**self).index_into(v)
    }

    fn index_into_mut<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError> {
        (**self).index_into_mut(v)
    }

    fn index_or_insert<'a>(&self, v: &'a mut Dynamic) -> Result<&'a mut Dynamic, DynamicError> {
        (**self).index_or_insert(v)
    }
}

impl Dynamic {
    /// Read subscript: bounds-checked for Array, strict lookup for Object.
    pub fn get<K: Key>(&self, key: K) -> Result<&Dynamic, DynamicError> {
        key.index_into(self)
    }

    /// Mutable read subscript. Missing Object keys are an error here; use
    /// [`entry`](Self::entry) for insert-on-write semantics.
    pub fn get_mut<K: Key>(&mut self, key: K) -> Result<&mut Dynamic, DynamicError> {
        key.index_into_mut(self)
    }

    /// Write subscript: inserts an `Undefined` entry for a missing Object
    /// key, then returns a mutable reference to it. Array writes remain
    /// bounds-checked.
    pub fn entry<K: Key>(&mut self, key: K) -> Result<&mut Dynamic, DynamicError> {
        key.index_or_insert(self)
    }

    /// Assigns `value` through the write subscript, resolving its variant
    /// from its native type.
    pub fn set<K: Key, V: Into<Dynamic>>(&mut self, key: K, value: V) -> Result<(), DynamicError> {
        *self.entry(key)? = value.into();
        Ok(())
    }

    /// Strict Object lookup by key.
    pub fn at(&self, key: &str) -> Result<&Dynamic, DynamicError> {
        let map = self.as_object()?;
        map.get(key)
            .ok_or_else(|| DynamicError::KeyNotFound(key.to_owned()))
    }

    /// Bounds-checked Array element access.
    pub fn at_index(&self, index: usize) -> Result<&Dynamic, DynamicError> {
        array_get(self.as_array()?, index)
    }

    /// Appends to an Array, resolving `value`'s variant from its type.
    pub fn push<V: Into<Dynamic>>(&mut self, value: V) -> Result<(), DynamicError> {
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Removes and returns the last Array element.
    ///
    /// Popping an empty array is a defined error, not a contract violation.
    pub fn pop(&mut self) -> Result<Dynamic, DynamicError> {
        let items = self.as_array_mut()?;
        items
            .pop()
            .ok_or(DynamicError::IndexOutOfRange { index: 0, len: 0 })
    }

    /// Object membership test.
    pub fn contains_key(&self, key: &str) -> Result<bool, DynamicError> {
        Ok(self.as_object()?.contains_key(key))
    }
}
