//! Prefix-tagged ("Authentic") identifiers.
//!
//! Every identifier is a fixed-length byte payload. Its text form is the
//! URL-safe base64 of the variant's 6-byte prefix followed by the payload,
//! so the variant can be recognized and validated from the text alone.
//!
//! | Type | Payload | Text | Extra state |
//! |------|---------|------|-------------|
//! | [`C1`] | 26 bytes | 44 chars, `Auth_C1-...` | none |
//! | [`K1`] | 12 bytes | 24 chars, `Auth_K1-...` | 46-byte [`Secret`] |
//! | [`U1`] | 26 bytes | 44 chars, `Auth_U1-...` | none |
//!
//! Equality and hashing cover the payload bytes (and, for `K1`, the secret);
//! the prefix is implied by the type.
//!
//! # Example
//!
//! ```
//! use authentic::{C1, U1};
//!
//! let collection = C1::new();
//! let text = collection.to_string();
//! assert_eq!(text.len(), 44);
//! assert_eq!(text.parse::<C1>().unwrap(), collection);
//!
//! // Same length, different prefix: not interchangeable.
//! assert!(text.parse::<U1>().is_err());
//! ```

/// Defines a variant with no state beyond its payload.
macro_rules! fixed_identifier {
    ($(#[$meta:meta])* $name:ident, $code:expr, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            bytes: [u8; $len],
        }

        impl $name {
            /// Payload length in bytes.
            pub const LENGTH: usize = $len;

            /// Registry code of this variant.
            pub const CODE: $crate::registry::Code = $code;

            /// Generates an identifier from OS entropy.
            #[must_use]
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self::random_with(&$crate::util::OsEntropy)
            }

            /// Generates an identifier from the given entropy source.
            #[must_use]
            pub fn random_with(entropy: &dyn $crate::util::EntropySource) -> Self {
                Self {
                    bytes: $crate::authentic::base::random(Self::CODE, entropy),
                }
            }

            /// Wraps exactly [`Self::LENGTH`] caller-supplied bytes.
            pub fn from_bytes(bytes: &[u8]) -> $crate::error::Result<Self> {
                $crate::authentic::base::from_slice(Self::CODE, bytes).map(Self::from_array)
            }

            /// Wraps a payload array.
            #[must_use]
            pub const fn from_array(bytes: [u8; $len]) -> Self {
                Self { bytes }
            }

            /// Decodes a text form, rejecting a foreign prefix.
            pub fn decode(text: &str) -> $crate::error::Result<Self> {
                $crate::authentic::base::decode(Self::CODE, text).map(Self::from_array)
            }

            /// Returns the payload bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.bytes
            }

            /// Returns the registry code of this variant.
            #[must_use]
            pub const fn code(&self) -> $crate::registry::Code {
                Self::CODE
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::authentic::base::encode(Self::CODE, &self.bytes))
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                Self::decode(s)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = $crate::error::Error;

            fn try_from(bytes: &[u8]) -> $crate::error::Result<Self> {
                Self::from_bytes(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::decode(&text).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use fixed_identifier;

mod any;
mod base;
mod c1;
mod k1;
mod u1;

pub use any::AnyAuthentic;
pub use c1::C1;
pub use k1::{K1, K1_SECRET_SIZE, Secret, SecretArg};
pub use u1::U1;
