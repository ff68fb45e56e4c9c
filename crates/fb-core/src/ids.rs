//! Strongly typed string keys.
//!
//! Input records identify warehouses, agents, and packages by free-form
//! strings (`"W1"`, `"A3"`, …).  Wrapping each in its own newtype keeps a
//! package id from ever being looked up in the agent table.  All keys borrow
//! as `str`, so `HashMap<&str, _>` lookups need no allocation.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed key wrapper around a `String`.
macro_rules! typed_key {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            #[inline]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(key: String) -> Self {
                Self(key)
            }
        }
    };
}

typed_key! {
    /// Key of a pickup location.
    pub struct WarehouseId;
}

typed_key! {
    /// Key of a courier.
    pub struct AgentId;
}

typed_key! {
    pub struct PackageId;
}
