//! Self-describing SHA-512 content digests.
//!
//! A digest is the SHA-512 of some content wrapped in a multihash container
//! (code `0x13`, length `64`) and rendered as standard base64 text:
//!
//! ```text
//! base64( 0x13 0x40 <64 digest bytes> )   // 88 characters
//! ```
//!
//! Decoding refuses any container that is not sha2-512 with a 64-byte
//! digest. Verification never fails with an error: a mismatch, or input
//! that cannot be read, is simply `false`.
//!
//! # Example
//!
//! ```
//! use authentic::digest;
//!
//! let text = digest::encode(b"hello");
//! assert!(digest::verify(b"hello", text.as_str()));
//! assert!(!digest::verify(b"hullo", text.as_str()));
//! assert_eq!(digest::decode(&text).unwrap().len(), 64);
//! ```

pub mod multihash;

use crate::error::{Error, Result};
use crate::tracing_compat::debug;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use core::fmt;
use core::str::FromStr;
use multihash::{Multihash, SHA2_512};
use sha2::{Digest as _, Sha512};
use std::borrow::Cow;

/// Size of a SHA-512 digest in bytes.
pub const DIGEST_SIZE: usize = 64;

/// A raw SHA-512 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; DIGEST_SIZE],
}

impl Digest {
    /// Computes the digest of `content`.
    #[must_use]
    pub fn of(content: impl AsRef<[u8]>) -> Self {
        let mut bytes = [0u8; DIGEST_SIZE];
        bytes.copy_from_slice(&Sha512::digest(content.as_ref()));
        Self { bytes }
    }

    /// Creates a digest from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.bytes
    }

    /// Wraps the digest in its multihash container.
    #[must_use]
    pub fn to_multihash(&self) -> Multihash {
        Multihash::wrap(SHA2_512, self.bytes.to_vec())
    }

    /// Parses a multihash container, requiring sha2-512 and 64 bytes.
    pub fn from_multihash(container: &[u8]) -> Result<Self> {
        let mh = Multihash::decode(container)?;
        if mh.code() != SHA2_512 {
            return Err(Error::UnsupportedHash(mh.code()));
        }
        let declared = mh.digest().len();
        let bytes: [u8; DIGEST_SIZE] = mh
            .into_digest()
            .try_into()
            .map_err(|_| Error::DigestLength(declared as u64))?;
        Ok(Self { bytes })
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Digest({:02x}{:02x}{:02x}{:02x}...)",
            self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]
        )
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STANDARD.encode(self.to_multihash().encode()))
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_multihash(&crate::encoding::decode(s)?)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Content handed to [`verify`]: raw bytes, or base64 text of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// Raw content bytes.
    Bytes(&'a [u8]),
    /// Base64 text (either alphabet) of the content bytes.
    Text(&'a str),
}

impl<'a> From<&'a [u8]> for Content<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Content<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Content<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Content<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// The digest a [`verify`] call checks against: encoded text, or the raw
/// multihash container bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected<'a> {
    /// Text produced by [`encode`].
    Text(&'a str),
    /// Multihash container bytes.
    Container(&'a [u8]),
}

impl<'a> From<&'a str> for Expected<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Expected<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Expected<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Container(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Expected<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Container(bytes)
    }
}

/// Hashes `content` and returns the encoded multihash text.
#[must_use]
pub fn encode(content: impl AsRef<[u8]>) -> String {
    Digest::of(content).to_string()
}

/// Decodes digest text into the raw 64-byte SHA-512 digest.
pub fn decode(text: &str) -> Result<[u8; DIGEST_SIZE]> {
    text.parse::<Digest>()
        .map(|digest| digest.bytes)
        .inspect_err(|err| debug!(error = %err, "digest decode rejected"))
}

/// Returns whether `content` hashes to `expected`.
///
/// `expected` is compared as a whole multihash container (`0x13 0x40`
/// header plus digest), never as the bare 64-byte digest: passing the output
/// of [`decode`] yields `false`. Use [`Digest::from_bytes`] and
/// [`Digest::to_multihash`] to rebuild a container from raw digest bytes.
///
/// ```
/// use authentic::digest::{self, Content};
///
/// let text = digest::encode([1, 2, 3]);
/// assert!(digest::verify(Content::Text("AQID"), text.as_str()));
/// ```
pub fn verify<'a>(content: impl Into<Content<'a>>, expected: impl Into<Expected<'a>>) -> bool {
    let content = match content.into() {
        Content::Bytes(bytes) => Cow::Borrowed(bytes),
        Content::Text(text) => match crate::encoding::decode(text) {
            Ok(bytes) => Cow::Owned(bytes),
            Err(err) => {
                debug!(error = %err, "digest verify: content is not base64");
                return false;
            }
        },
    };
    let expected = match expected.into() {
        Expected::Container(bytes) => Cow::Borrowed(bytes),
        Expected::Text(text) => match crate::encoding::decode(text) {
            Ok(bytes) => Cow::Owned(bytes),
            Err(err) => {
                debug!(error = %err, "digest verify: expected digest is not base64");
                return false;
            }
        },
    };

    let computed = Digest::of(&*content).to_multihash().encode();
    let matched = constant_time_eq(&computed, &expected);
    if !matched {
        debug!(content_len = content.len(), "digest verify mismatch");
    }
    matched
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}
