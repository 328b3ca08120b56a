//! Decoding identifiers whose variant is not known in advance.

use super::{C1, K1, U1, base};
use crate::error::Result;
use crate::registry::{self, Code};
use core::fmt;
use core::str::FromStr;

/// Any identifier, with the variant chosen by the text's prefix.
///
/// A K1 text with a secret part decodes to [`AnyAuthentic::K1`]. A bare K1
/// id text has no secret to recover and decodes to [`AnyAuthentic::K1Id`].
///
/// ```
/// use authentic::{AnyAuthentic, C1, Code, K1};
///
/// let id = C1::new();
/// let any: AnyAuthentic = id.to_string().parse().unwrap();
/// assert_eq!(any, AnyAuthentic::C1(id));
///
/// let key = K1::new();
/// assert_eq!(AnyAuthentic::decode(&key.to_string()).unwrap().code(), Code::K1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyAuthentic {
    /// Collection identifier.
    C1(C1),
    /// Access key with its secret.
    K1(K1),
    /// Access-key id without a secret.
    K1Id([u8; K1::LENGTH]),
    /// Credential identifier.
    U1(U1),
}

impl AnyAuthentic {
    /// Decodes `text`, picking the variant from its prefix.
    pub fn decode(text: &str) -> Result<Self> {
        match registry::code_for_text(text)? {
            Code::C1 => C1::decode(text).map(Self::C1),
            Code::U1 => U1::decode(text).map(Self::U1),
            Code::K1 if text.contains('.') => K1::from_access_key(text).map(Self::K1),
            Code::K1 => K1::decode_id(text).map(Self::K1Id),
        }
    }

    /// Returns the variant code.
    #[must_use]
    pub const fn code(&self) -> Code {
        match self {
            Self::C1(_) => Code::C1,
            Self::K1(_) | Self::K1Id(_) => Code::K1,
            Self::U1(_) => Code::U1,
        }
    }

    /// Returns the identifier payload bytes.
    #[must_use]
    pub fn id_bytes(&self) -> &[u8] {
        match self {
            Self::C1(id) => id.as_ref(),
            Self::K1(key) => key.as_ref(),
            Self::K1Id(id) => &id[..],
            Self::U1(id) => id.as_ref(),
        }
    }
}

/// Writes the canonical id text (never the K1 secret).
impl fmt::Display for AnyAuthentic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base::encode(self.code(), self.id_bytes()))
    }
}

impl FromStr for AnyAuthentic {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<C1> for AnyAuthentic {
    fn from(id: C1) -> Self {
        Self::C1(id)
    }
}

impl From<K1> for AnyAuthentic {
    fn from(key: K1) -> Self {
        Self::K1(key)
    }
}

impl From<U1> for AnyAuthentic {
    fn from(id: U1) -> Self {
        Self::U1(id)
    }
}

/// Serializes the canonical id text, like each variant does.
#[cfg(feature = "serde")]
impl serde::Serialize for AnyAuthentic {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deserializes any identifier text, including a bare K1 id.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AnyAuthentic {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::decode(&text).map_err(serde::de::Error::custom)
    }
}
