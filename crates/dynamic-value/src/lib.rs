//! Polymorphic JSON-like value container.
//!
//! [`Dynamic`] holds exactly one of nine variants — `Undefined`, `Null`,
//! `Bool`, `Integer`, `Float`, `Str`, `Bytes`, `Array`, `Object` — with
//! value-semantic assignment from native types, checked extraction,
//! structural equality, deep cloning, and array/object subscripts. It is
//! a value container only: serialization to any wire format is a host
//! concern layered on top.
//!
//! ```
//! use dynamic_value::Dynamic;
//!
//! let mut d = Dynamic::default();
//! assert!(d.is_undefined());
//!
//! d = Dynamic::from(123); // resolves to Integer
//! assert_eq!(d.as_integer().unwrap(), 123);
//!
//! d = Dynamic::from(42.0); // resolves to Float
//! assert!(d.is_float());
//!
//! d = Dynamic::from("Hello world"); // resolves to Str
//! assert_eq!(d.as_str().unwrap(), "Hello world");
//! ```
//!
//! Two ownership modes share one contract: [`Dynamic`] owns its payload
//! exclusively and `clone` is a deep copy; [`SharedDynamic`] is a
//! reference-counted handle whose `clone` is shallow and whose
//! [`deep_clone`](SharedDynamic::deep_clone) is the explicit independent
//! copy.

mod convert;
mod error;
mod index;
mod shared;
mod value;

pub use error::DynamicError;
pub use index::Key;
pub use shared::SharedDynamic;
pub use value::{Dynamic, Kind, Object};
