//! "Best fit" resolution: mapping native Rust types onto [`Dynamic`] variants.
//!
//! Resolution is a pure function of the argument's static type, decided at
//! compile time by which `From` impl applies. The load-bearing tie-breaks
//! are structural: `bool` has its own impl and can never fall into the
//! integral set, and no blanket `From<Vec<T>>` exists, so `Vec<u8>` always
//! resolves to Bytes rather than an Array of integers. A type with no impl
//! here fails to compile — there is no runtime "pick something" fallback.

use std::borrow::Cow;

use crate::error::DynamicError;
use crate::value::{Dynamic, Object};

impl From<bool> for Dynamic {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! from_integral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Dynamic {
                fn from(v: $ty) -> Self {
                    Self::Integer(i64::from(v))
                }
            }
        )*
    };
}

// u64 and usize are deliberately absent: they do not embed losslessly in
// the signed 64-bit Integer payload.
from_integral!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Dynamic {
    fn from(v: isize) -> Self {
        Self::Integer(v as i64)
    }
}

impl From<f32> for Dynamic {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Dynamic {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Dynamic {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Dynamic {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for Dynamic {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<Cow<'_, str>> for Dynamic {
    fn from(v: Cow<'_, str>) -> Self {
        Self::Str(v.into_owned())
    }
}

impl From<char> for Dynamic {
    fn from(v: char) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<u8>> for Dynamic {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for Dynamic {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Dynamic {
    fn from(v: &[u8; N]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<Vec<Dynamic>> for Dynamic {
    fn from(v: Vec<Dynamic>) -> Self {
        Self::Array(v)
    }
}

impl<const N: usize> From<[Dynamic; N]> for Dynamic {
    fn from(v: [Dynamic; N]) -> Self {
        Self::Array(v.into())
    }
}

impl From<Object> for Dynamic {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

/// `None` resolves to Null, `Some(v)` to whatever `v` resolves to.
impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}

impl FromIterator<Dynamic> for Dynamic {
    fn from_iter<I: IntoIterator<Item = Dynamic>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Dynamic)> for Dynamic {
    fn from_iter<I: IntoIterator<Item = (String, Dynamic)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------- extraction

impl TryFrom<&Dynamic> for bool {
    type Error = DynamicError;

    fn try_from(v: &Dynamic) -> Result<Self, Self::Error> {
        v.as_bool()
    }
}

impl TryFrom<&Dynamic> for i64 {
    type Error = DynamicError;

    fn try_from(v: &Dynamic) -> Result<Self, Self::Error> {
        v.as_integer()
    }
}

impl TryFrom<&Dynamic> for f64 {
    type Error = DynamicError;

    fn try_from(v: &Dynamic) -> Result<Self, Self::Error> {
        v.as_float()
    }
}

impl TryFrom<&Dynamic> for String {
    type Error = DynamicError;

    fn try_from(v: &Dynamic) -> Result<Self, Self::Error> {
        v.as_str().map(str::to_owned)
    }
}

impl TryFrom<&Dynamic> for Vec<u8> {
    type Error = DynamicError;

    fn try_from(v: &Dynamic) -> Result<Self, Self::Error> {
        v.as_bytes().map(<[u8]>::to_vec)
    }
}

impl TryFrom<Dynamic> for bool {
    type Error = DynamicError;

    fn try_from(v: Dynamic) -> Result<Self, Self::Error> {
        v.as_bool()
    }
}

impl TryFrom<Dynamic> for i64 {
    type Error = DynamicError;

    fn try_from(v: Dynamic) -> Result<Self, Self::Error> {
        v.as_integer()
    }
}

impl TryFrom<Dynamic> for f64 {
    type Error = DynamicError;

    fn try_from(v: Dynamic) -> Result<Self, Self::Error> {
        v.as_float()
    }
}

impl TryFrom<Dynamic> for String {
    type Error = DynamicError;

    fn try_from(v: Dynamic) -> Result<Self, Self::Error> {
        v.into_str()
    }
}

impl TryFrom<Dynamic> for Vec<u8> {
    type Error = DynamicError;

    fn try_from(v: Dynamic) -> Result<Self, Self::Error> {
        v.into_bytes()
    }
}

impl TryFrom<Dynamic> for Vec<Dynamic> {
    type Error = DynamicError;

    fn try_from(v: Dynamic) -> Result<Self, Self::Error> {
        v.into_array()
    }
}

impl TryFrom<Dynamic> for Object {
    type Error = DynamicError;

    fn try_from(v: Dynamic) -> Result<Self, Self::Error> {
        v.into_object()
    }
}

// ------------------------------------------------------- native comparisons

// A native value compares against its resolved variant only. An Integer
// never equals a float literal and vice versa; no coercion happens here.

impl PartialEq<bool> for Dynamic {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Self::Bool(b) if b == other)
    }
}

macro_rules! eq_integral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Dynamic {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Self::Integer(n) if *n == i64::from(*other))
                }
            }

            impl PartialEq<Dynamic> for $ty {
                fn eq(&self, other: &Dynamic) -> bool {
                    other == self
                }
            }
        )*
    };
}

eq_integral!(i8, i16, i32, i64, u8, u16, u32);

impl PartialEq<f64> for Dynamic {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Self::Float(n) if n == other)
    }
}

impl PartialEq<f32> for Dynamic {
    fn eq(&self, other: &f32) -> bool {
        matches!(self, Self::Float(n) if *n == f64::from(*other))
    }
}

impl PartialEq<&str> for Dynamic {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Str(s) if s == other)
    }
}

impl PartialEq<str> for Dynamic {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Self::Str(s) if s == other)
    }
}

impl PartialEq<String> for Dynamic {
    fn eq(&self, other: &String) -> bool {
        matches!(self, Self::Str(s) if s == other)
    }
}

impl PartialEq<Dynamic> for bool {
    fn eq(&self, other: &Dynamic) -> bool {
        other == self
    }
}

impl PartialEq<Dynamic> for f64 {
    fn eq(&self, other: &Dynamic) -> bool {
        other == self
    }
}

impl PartialEq<Dynamic> for f32 {
    fn eq(&self, other: &Dynamic) -> bool {
        other == self
    }
}

impl PartialEq<Dynamic> for &str {
    fn eq(&self, other: &Dynamic) -> bool {
        other == self
    }
}

impl PartialEq<Dynamic> for String {
    fn eq(&self, other: &Dynamic) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;

    #[test]
    fn bool_resolves_before_integral() {
        // A dedicated impl keeps `true` out of the integer set.
        assert_eq!(Dynamic::from(true), Dynamic::Bool(true));
        assert_eq!(Dynamic::from(1i64), Dynamic::Integer(1));
    }

    #[test]
    fn integral_types_widen_to_i64() {
        assert_eq!(Dynamic::from(-5i8), Dynamic::Integer(-5));
        assert_eq!(Dynamic::from(300u16), Dynamic::Integer(300));
        assert_eq!(Dynamic::from(7u32), Dynamic::Integer(7));
        assert_eq!(Dynamic::from(9isize), Dynamic::Integer(9));
    }

    #[test]
    fn floats_resolve_to_float() {
        assert_eq!(Dynamic::from(1.5f32).kind(), Kind::Float);
        assert_eq!(Dynamic::from(1.5f64), Dynamic::Float(1.5));
    }

    #[test]
    fn byte_vec_resolves_to_bytes_not_array() {
        let d = Dynamic::from(vec![1u8, 2, 3]);
        assert_eq!(d.kind(), Kind::Bytes);
        assert_eq!(d.as_bytes().unwrap(), &[1, 2, 3]);
        let d = Dynamic::from(b"abc");
        assert_eq!(d.kind(), Kind::Bytes);
    }

    #[test]
    fn dynamic_vec_resolves_to_array() {
        let d = Dynamic::from(vec![Dynamic::Integer(1), Dynamic::Null]);
        assert_eq!(d.kind(), Kind::Array);
        assert_eq!(d.as_array().unwrap().len(), 2);
    }

    #[test]
    fn option_resolves_to_null_or_inner() {
        assert_eq!(Dynamic::from(None::<i64>), Dynamic::Null);
        assert_eq!(Dynamic::from(Some(3i64)), Dynamic::Integer(3));
    }

    #[test]
    fn collect_into_array_and_object() {
        let arr: Dynamic = (1i64..=3).map(Dynamic::from).collect();
        assert_eq!(arr.as_array().unwrap().len(), 3);
        let obj: Dynamic = [("a".to_string(), Dynamic::from(1i64))]
            .into_iter()
            .collect();
        assert!(obj.is_object());
    }

    #[test]
    fn try_from_round_trips_natives() {
        assert_eq!(i64::try_from(&Dynamic::from(123i64)), Ok(123));
        assert_eq!(f64::try_from(&Dynamic::from(2.5f64)), Ok(2.5));
        assert_eq!(
            String::try_from(Dynamic::from("hi")),
            Ok(String::from("hi"))
        );
        assert!(i64::try_from(&Dynamic::from("hi")).is_err());
    }

    #[test]
    fn native_comparison_uses_resolved_variant() {
        assert_eq!(Dynamic::from(123i64), 123i64);
        assert_eq!(123i64, Dynamic::from(123i64));
        assert_eq!(Dynamic::from("Hello world"), "Hello world");
        // No coercion: an Integer never equals a float literal.
        assert_ne!(Dynamic::Integer(1), 1.0f64);
        assert_ne!(Dynamic::Float(1.0), 1i64);
        assert_ne!(Dynamic::Bool(true), 1i64);
    }
}
