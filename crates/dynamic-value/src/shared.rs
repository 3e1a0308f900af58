//! Shared-ownership handles: cheap copies over a reference-counted payload.
//!
//! [`SharedDynamic`] trades the exclusive value semantics of [`Dynamic`]
//! for handle semantics: `clone` is a refcount bump, safe to hand across
//! threads. Mutation goes through copy-on-write, so the first write
//! through a handle un-shares its payload; independence on demand is the
//! explicit [`deep_clone`](SharedDynamic::deep_clone).

use std::ops::Deref;
use std::sync::Arc;

use crate::error::DynamicError;
use crate::index::Key;
use crate::value::Dynamic;

/// A reference-counted handle to a [`Dynamic`] payload.
///
/// All read access comes through `Deref`, so the full predicate/accessor
/// surface of [`Dynamic`] applies unchanged:
///
/// ```
/// use dynamic_value::{Dynamic, SharedDynamic};
///
/// let mut a = SharedDynamic::new(Dynamic::object());
/// a.set("k", 42i64).unwrap();
///
/// let b = a.clone(); // shallow: same payload, refcount bumped
/// assert!(a.payload_eq(&b));
///
/// let mut c = a.deep_clone(); // independent payload
/// c.set("k", 7i64).unwrap();
/// assert_eq!(a.get("k").unwrap().as_integer(), Ok(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedDynamic {
    inner: Arc<Dynamic>,
}

impl SharedDynamic {
    pub fn new(value: impl Into<Dynamic>) -> Self {
        Self {
            inner: Arc::new(value.into()),
        }
    }

    /// Whether two handles point at the same payload allocation.
    pub fn payload_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Mutable access to the payload.
    ///
    /// If other handles share the payload it is copied first, so the
    /// write is never visible through them.
    pub fn to_mut(&mut self) -> &mut Dynamic {
        Arc::make_mut(&mut self.inner)
    }

    /// Replaces the payload, resolving `value`'s variant from its type.
    pub fn assign(&mut self, value: impl Into<Dynamic>) {
        *self.to_mut() = value.into();
    }

    /// An independent handle over a recursive copy of the payload.
    ///
    /// Unlike `clone`, the result shares nothing with `self`: Array
    /// elements and Object entries are duplicated all the way down.
    pub fn deep_clone(&self) -> Self {
        Self {
            inner: Arc::new(self.inner.as_ref().clone()),
        }
    }

    /// Recovers an exclusive [`Dynamic`], copying only if other handles
    /// still share the payload.
    pub fn unshare(self) -> Dynamic {
        Arc::try_unwrap(self.inner).unwrap_or_else(|shared| shared.as_ref().clone())
    }

    /// Write subscript, mirroring [`Dynamic::set`].
    pub fn set<K: Key, V: Into<Dynamic>>(&mut self, key: K, value: V) -> Result<(), DynamicError> {
        self.to_mut().set(key, value)
    }

    /// Write subscript, mirroring [`Dynamic::entry`].
    pub fn entry<K: Key>(&mut self, key: K) -> Result<&mut Dynamic, DynamicError> {
        self.to_mut().entry(key)
    }

    /// Mirrors [`Dynamic::push`].
    pub fn push<V: Into<Dynamic>>(&mut self, value: V) -> Result<(), DynamicError> {
        self.to_mut().push(value)
    }

    /// Mirrors [`Dynamic::pop`].
    pub fn pop(&mut self) -> Result<Dynamic, DynamicError> {
        self.to_mut().pop()
    }
}

impl Deref for SharedDynamic {
    type Target = Dynamic;

    fn deref(&self) -> &Dynamic {
        &self.inner
    }
}

impl From<Dynamic> for SharedDynamic {
    fn from(value: Dynamic) -> Self {
        Self::new(value)
    }
}

impl PartialEq<Dynamic> for SharedDynamic {
    fn eq(&self, other: &Dynamic) -> bool {
        self.inner.as_ref() == other
    }
}

impl PartialEq<SharedDynamic> for Dynamic {
    fn eq(&self, other: &SharedDynamic) -> bool {
        self == other.inner.as_ref()
    }
}
