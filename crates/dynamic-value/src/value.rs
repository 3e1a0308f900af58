//! [`Dynamic`] — the polymorphic value type and its lifecycle operations.

use core::fmt;

use indexmap::IndexMap;

use crate::error::DynamicError;

/// Object payload: string keys, unique, deterministic iteration order.
pub type Object = IndexMap<String, Dynamic>;

/// Discriminator naming the active variant of a [`Dynamic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Integer,
    Float,
    Str,
    Bytes,
    Array,
    Object,
}

impl Kind {
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::Bytes => "bytes",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value holding exactly one of nine variants.
///
/// `Undefined` is the never-assigned default state, distinct from `Null`
/// (present but empty). Assigning a new payload drops the old one first;
/// there is no observable in-between state. `Clone` is a deep copy —
/// Array and Object duplicate every child. For shallow reference-counted
/// copies see [`SharedDynamic`](crate::SharedDynamic).
///
/// Equality is structural and defined only between values holding the
/// same variant; cross-variant comparison is `false`, never a coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dynamic {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Array(Vec<Dynamic>),
    Object(Object),
}

impl Dynamic {
    /// An empty Array.
    pub fn array() -> Self {
        Self::Array(Vec::new())
    }

    /// An Array of `len` `Undefined` elements.
    pub fn array_with(len: usize) -> Self {
        Self::Array(vec![Self::Undefined; len])
    }

    /// An empty Object.
    pub fn object() -> Self {
        Self::Object(Object::new())
    }

    /// An empty Bytes payload.
    pub fn bytes() -> Self {
        Self::Bytes(Vec::new())
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
            Self::Str(_) => Kind::Str,
            Self::Bytes(_) => Kind::Bytes,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
        }
    }

    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    pub const fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Succeeds only when the value holds `Null`.
    ///
    /// The payload carries no data, so this is the whole extraction.
    pub fn as_null(&self) -> Result<(), DynamicError> {
        match self {
            Self::Null => Ok(()),
            other => Err(DynamicError::invalid_access(Kind::Null, other.kind())),
        }
    }

    /// Succeeds only when the value holds `Undefined`.
    pub fn as_undefined(&self) -> Result<(), DynamicError> {
        match self {
            Self::Undefined => Ok(()),
            other => Err(DynamicError::invalid_access(Kind::Undefined, other.kind())),
        }
    }

    pub fn as_bool(&self) -> Result<bool, DynamicError> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(DynamicError::invalid_access(Kind::Bool, other.kind())),
        }
    }

    pub fn as_integer(&self) -> Result<i64, DynamicError> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => Err(DynamicError::invalid_access(Kind::Integer, other.kind())),
        }
    }

    /// Returns the Float payload. An Integer is rejected, not widened —
    /// coercions belong to layers above this crate.
    pub fn as_float(&self) -> Result<f64, DynamicError> {
        match self {
            Self::Float(n) => Ok(*n),
            other => Err(DynamicError::invalid_access(Kind::Float, other.kind())),
        }
    }

    pub fn as_str(&self) -> Result<&str, DynamicError> {
        match self {
            Self::Str(s) => Ok(s),
            other => Err(DynamicError::invalid_access(Kind::Str, other.kind())),
        }
    }

    pub fn as_str_mut(&mut self) -> Result<&mut String, DynamicError> {
        match self {
            Self::Str(s) => Ok(s),
            other => Err(DynamicError::invalid_access(Kind::Str, other.kind())),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], DynamicError> {
        match self {
            Self::Bytes(b) => Ok(b),
            other => Err(DynamicError::invalid_access(Kind::Bytes, other.kind())),
        }
    }

    pub fn as_bytes_mut(&mut self) -> Result<&mut Vec<u8>, DynamicError> {
        match self {
            Self::Bytes(b) => Ok(b),
            other => Err(DynamicError::invalid_access(Kind::Bytes, other.kind())),
        }
    }

    pub fn as_array(&self) -> Result<&[Dynamic], DynamicError> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(DynamicError::invalid_access(Kind::Array, other.kind())),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Dynamic>, DynamicError> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(DynamicError::invalid_access(Kind::Array, other.kind())),
        }
    }

    pub fn as_object(&self) -> Result<&Object, DynamicError> {
        match self {
            Self::Object(o) => Ok(o),
            other => Err(DynamicError::invalid_access(Kind::Object, other.kind())),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object, DynamicError> {
        match self {
            Self::Object(o) => Ok(o),
            other => Err(DynamicError::invalid_access(Kind::Object, other.kind())),
        }
    }

    pub fn into_str(self) -> Result<String, DynamicError> {
        match self {
            Self::Str(s) => Ok(s),
            other => Err(DynamicError::invalid_access(Kind::Str, other.kind())),
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, DynamicError> {
        match self {
            Self::Bytes(b) => Ok(b),
            other => Err(DynamicError::invalid_access(Kind::Bytes, other.kind())),
        }
    }

    pub fn into_array(self) -> Result<Vec<Dynamic>, DynamicError> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(DynamicError::invalid_access(Kind::Array, other.kind())),
        }
    }

    pub fn into_object(self) -> Result<Object, DynamicError> {
        match self {
            Self::Object(o) => Ok(o),
            other => Err(DynamicError::invalid_access(Kind::Object, other.kind())),
        }
    }

    /// Moves the payload out, leaving `Undefined` behind.
    ///
    /// This is the in-place move: after `take` the source is safe to
    /// inspect and holds exactly the `Undefined` variant.
    pub fn take(&mut self) -> Dynamic {
        core::mem::take(self)
    }

    /// Element or entry count for Array, Object, Str (bytes), and Bytes.
    ///
    /// `None` for scalar variants, which have no length.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Str(s) => Some(s.len()),
            Self::Bytes(b) => Some(b.len()),
            Self::Array(a) => Some(a.len()),
            Self::Object(o) => Some(o.len()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|n| n == 0)
    }
}
