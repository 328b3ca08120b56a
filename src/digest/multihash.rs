//! Multihash container encoding.
//!
//! A multihash is a self-describing digest:
//!
//! ```text
//! [hash code: unsigned varint] [digest length: unsigned varint] [digest bytes]
//! ```
//!
//! Varints are unsigned LEB128 and, per the multiformats spec, at most nine
//! bytes long.

use crate::error::{Error, Result};

/// Multicodec code for sha2-512.
pub const SHA2_512: u64 = 0x13;

/// Maximum encoded size of an unsigned varint.
const MAX_VARINT_LEN: usize = 9;

/// A parsed multihash container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multihash {
    code: u64,
    digest: Vec<u8>,
}

impl Multihash {
    /// Wraps a digest produced by the hash named by `code`.
    #[must_use]
    pub fn wrap(code: u64, digest: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            digest: digest.into(),
        }
    }

    /// Returns the hash algorithm code.
    #[must_use]
    pub const fn code(&self) -> u64 {
        self.code
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Consumes the container, returning the digest bytes.
    #[must_use]
    pub fn into_digest(self) -> Vec<u8> {
        self.digest
    }

    /// Serializes the container.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 * MAX_VARINT_LEN + self.digest.len());
        write_varint(&mut buf, self.code);
        write_varint(&mut buf, self.digest.len() as u64);
        buf.extend_from_slice(&self.digest);
        buf
    }

    /// Parses a container, checking that the digest section has exactly the
    /// declared length.
    ///
    /// ```
    /// use authentic::digest::multihash::{Multihash, SHA2_512};
    ///
    /// let mh = Multihash::decode(&[0x13, 0x02, 0xaa, 0xbb]).unwrap();
    /// assert_eq!(mh.code(), SHA2_512);
    /// assert_eq!(mh.digest(), [0xaa, 0xbb]);
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (code, rest) = read_varint(bytes)?;
        let (length, rest) = read_varint(rest)?;
        if rest.len() as u64 != length {
            return Err(Error::MalformedMultihash(
                "digest size does not match declared length",
            ));
        }
        Ok(Self {
            code,
            digest: rest.to_vec(),
        })
    }
}

fn write_varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

fn read_varint(bytes: &[u8]) -> Result<(u64, &[u8])> {
    let mut value = 0u64;
    for (i, &byte) in bytes.iter().enumerate().take(MAX_VARINT_LEN) {
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            if byte == 0 && i > 0 {
                return Err(Error::MalformedMultihash("varint is not minimally encoded"));
            }
            return Ok((value, &bytes[i + 1..]));
        }
    }
    if bytes.len() >= MAX_VARINT_LEN {
        Err(Error::MalformedMultihash("varint exceeds 9 bytes"))
    } else {
        Err(Error::MalformedMultihash("truncated varint"))
    }
}
