//! Access-key identifiers and their secrets.
//!
//! A [`K1`] pairs a 12-byte identifier with a secret. The identifier alone is
//! the canonical text form (and what gets serialized); the *access key* is
//! the compound form that also carries the secret:
//!
//! ```text
//! <base64url(prefix || id)>.<base64url(secret)>
//! ```
//!
//! Neither half can contain a `.`, so the split is unambiguous.

use super::base;
use crate::encoding;
use crate::error::{Error, Result};
use crate::registry::Code;
use crate::tracing_compat::{debug, trace};
use crate::util::{EntropySource, OsEntropy};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

/// Length of a generated K1 secret in bytes.
pub const K1_SECRET_SIZE: usize = 46;

const K1_LENGTH: usize = 12;

/// Secret half of an access key.
///
/// Secrets supplied by the caller are taken as-is; only generated secrets
/// are guaranteed to be [`K1_SECRET_SIZE`] bytes. The bytes are zeroed on
/// drop and never shown by `Debug`.
#[derive(Clone)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    /// Wraps secret bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Generates a [`K1_SECRET_SIZE`]-byte secret.
    #[must_use]
    pub fn random_with(entropy: &dyn EntropySource) -> Self {
        Self::new(entropy.bytes(K1_SECRET_SIZE))
    }

    /// Returns the secret bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the secret length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the secret as URL-safe base64 text.
    #[must_use]
    pub fn to_text(&self) -> String {
        encoding::encode(&self.bytes)
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time over equal lengths.
        if self.bytes.len() != other.bytes.len() {
            return false;
        }
        let mut diff = 0u8;
        for (a, b) in self.bytes.iter().zip(&other.bytes) {
            diff |= a ^ b;
        }
        diff == 0
    }
}

impl Eq for Secret {}

impl Hash for Secret {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({} bytes)", self.bytes.len())
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        // Best-effort; the compiler may elide this.
        for byte in &mut self.bytes {
            *byte = 0;
        }
    }
}

/// A caller-supplied secret: raw bytes, or base64 text of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretArg<'a> {
    /// Raw secret bytes, used verbatim.
    Bytes(&'a [u8]),
    /// Base64 text (either alphabet), decoded before use.
    Text(&'a str),
}

impl SecretArg<'_> {
    fn into_secret(self) -> Result<Secret> {
        match self {
            Self::Bytes(bytes) => Ok(Secret::new(bytes)),
            Self::Text(text) => encoding::decode(text).map(Secret::new),
        }
    }
}

impl<'a> From<&'a [u8]> for SecretArg<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for SecretArg<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for SecretArg<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for SecretArg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// Access-key identifier: 12 payload bytes behind the `Auth/K1+` prefix,
/// plus a [`Secret`].
///
/// # Example
///
/// ```
/// use authentic::K1;
///
/// let key = K1::new();
/// assert_eq!(key.id_bytes().len(), 12);
/// assert_eq!(key.secret().len(), 46);
///
/// let access_key = key.access_key();
/// let restored = K1::from_access_key(&access_key).unwrap();
/// assert_eq!(restored, key);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct K1 {
    id: [u8; K1_LENGTH],
    secret: Secret,
}

impl K1 {
    /// Payload length in bytes.
    pub const LENGTH: usize = K1_LENGTH;

    /// Registry code of this variant.
    pub const CODE: Code = Code::K1;

    /// Generates an id and a secret from OS entropy.
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::random_with(&OsEntropy)
    }

    /// Generates an id and a secret from the given entropy source.
    #[must_use]
    pub fn random_with(entropy: &dyn EntropySource) -> Self {
        let id = base::random(Self::CODE, entropy);
        let secret = Secret::random_with(entropy);
        Self { id, secret }
    }

    /// Builds from raw id bytes and an optional secret.
    ///
    /// A missing secret is generated from OS entropy.
    pub fn from_parts<'a>(id: &[u8], secret: Option<impl Into<SecretArg<'a>>>) -> Result<Self> {
        Self::from_parts_with(id, secret, &OsEntropy)
    }

    /// Like [`K1::from_parts`], drawing a missing secret from `entropy`.
    pub fn from_parts_with<'a>(
        id: &[u8],
        secret: Option<impl Into<SecretArg<'a>>>,
        entropy: &dyn EntropySource,
    ) -> Result<Self> {
        let id = base::from_slice(Self::CODE, id)?;
        let secret = match secret {
            Some(arg) => arg.into().into_secret()?,
            None => Secret::random_with(entropy),
        };
        if secret.len() != K1_SECRET_SIZE {
            trace!(len = secret.len(), "K1 built with non-default secret length");
        }
        Ok(Self { id, secret })
    }

    /// Decodes a compound access key.
    ///
    /// `secret` must be `None`: the access key already carries the secret,
    /// and passing one as well is a contract violation.
    ///
    /// ```
    /// use authentic::{K1, SecretArg};
    ///
    /// let key = K1::new();
    /// let text = key.access_key();
    /// assert!(K1::decode(&text, None).is_ok());
    ///
    /// let err = K1::decode(&text, Some(SecretArg::Bytes(b"extra"))).unwrap_err();
    /// assert!(err.is_contract_violation());
    /// ```
    pub fn decode(text: &str, secret: Option<SecretArg<'_>>) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        let [id_text, secret_text] = parts[..] else {
            debug!(parts = parts.len(), "K1 access key rejected");
            return Err(Error::MalformedAccessKey(parts.len()));
        };
        if secret.is_some() {
            debug!("K1 access key decoded with an explicit secret");
            return Err(Error::SecretConflict);
        }
        let id = base::decode(Self::CODE, id_text)?;
        let secret = SecretArg::Text(secret_text).into_secret()?;
        Ok(Self { id, secret })
    }

    /// Decodes a compound access key.
    pub fn from_access_key(text: &str) -> Result<Self> {
        Self::decode(text, None)
    }

    /// Decodes the id part of a text form (no secret).
    pub fn decode_id(text: &str) -> Result<[u8; K1_LENGTH]> {
        base::decode(Self::CODE, text)
    }

    /// Returns the id payload bytes.
    #[must_use]
    pub const fn id_bytes(&self) -> &[u8; K1_LENGTH] {
        &self.id
    }

    /// Returns the secret.
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Returns the secret as base64 text.
    #[must_use]
    pub fn secret_text(&self) -> String {
        self.secret.to_text()
    }

    /// Returns the compound `"<id>.<secret>"` access key.
    #[must_use]
    pub fn access_key(&self) -> String {
        format!("{self}.{}", self.secret.to_text())
    }

    /// Returns the registry code of this variant.
    #[must_use]
    pub const fn code(&self) -> Code {
        Self::CODE
    }
}

impl fmt::Display for K1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base::encode(Self::CODE, &self.id))
    }
}

impl fmt::Debug for K1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("K1")
            .field("id", &format_args!("{self}"))
            .field("secret", &self.secret)
            .finish()
    }
}

impl FromStr for K1 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_access_key(s)
    }
}

impl AsRef<[u8]> for K1 {
    fn as_ref(&self) -> &[u8] {
        &self.id
    }
}

/// Serializes the id only: the secret never leaves through serde.
#[cfg(feature = "serde")]
impl serde::Serialize for K1 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deserializes from the compound access-key form.
///
/// The id text written by `Serialize` carries no secret, so it cannot become
/// a `K1`; read it back as [`AnyAuthentic`](super::AnyAuthentic), which
/// yields [`AnyAuthentic::K1Id`](super::AnyAuthentic::K1Id).
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for K1 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        if !text.contains('.') {
            return Err(serde::de::Error::custom(
                "K1 id text carries no secret; deserialize it as AnyAuthentic",
            ));
        }
        Self::from_access_key(&text).map_err(serde::de::Error::custom)
    }
}
