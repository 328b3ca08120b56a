//! Identifier codes, prefixes, and the prefix lookup table.
//!
//! Each identifier variant is tagged with a 6-byte prefix chosen so that the
//! prefix alone base64-encodes to a readable 8-character marker:
//!
//! ```text
//! C1  02 EB 61 FC 2D 7E  "Auth/C1+"  26 payload bytes (32 total)
//! K1  02 EB 61 FC AD 7E  "Auth/K1+"  12 payload bytes (16 total)
//! U1  02 EB 61 FD 4D 7E  "Auth/U1+"  26 payload bytes (32 total)
//! ```
//!
//! The table is fixed at compile time. The reverse map (prefix to code) is
//! built once on first use and is read-only afterwards.

use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Size of every identifier prefix in bytes.
pub const PREFIX_SIZE: usize = 6;

/// A variant prefix.
pub type Prefix = [u8; PREFIX_SIZE];

/// Short code naming an identifier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Code {
    /// Collection identifier.
    C1,
    /// Access-key identifier (carries a secret).
    K1,
    /// Credential identifier.
    U1,
}

/// Prefix and payload length of one identifier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    /// The variant this descriptor belongs to.
    pub code: Code,
    /// Binary prefix written before the payload.
    pub prefix: Prefix,
    /// Payload length, not counting the prefix.
    pub length: usize,
}

impl Descriptor {
    /// Total encoded length (prefix plus payload) before text encoding.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        PREFIX_SIZE + self.length
    }
}

const C1_DESCRIPTOR: Descriptor = Descriptor {
    code: Code::C1,
    prefix: [0x02, 0xEB, 0x61, 0xFC, 0x2D, 0x7E],
    length: 26,
};

const K1_DESCRIPTOR: Descriptor = Descriptor {
    code: Code::K1,
    prefix: [0x02, 0xEB, 0x61, 0xFC, 0xAD, 0x7E],
    length: 12,
};

const U1_DESCRIPTOR: Descriptor = Descriptor {
    code: Code::U1,
    prefix: [0x02, 0xEB, 0x61, 0xFD, 0x4D, 0x7E],
    length: 26,
};

/// All known variants, in code order.
pub static PREFIX_TABLE: [Descriptor; 3] = [C1_DESCRIPTOR, K1_DESCRIPTOR, U1_DESCRIPTOR];

static PREFIX_CODES: LazyLock<BTreeMap<Prefix, Code>> = LazyLock::new(|| {
    PREFIX_TABLE
        .iter()
        .map(|descriptor| (descriptor.prefix, descriptor.code))
        .collect()
});

impl Code {
    /// All codes, in table order.
    pub const ALL: [Self; 3] = [Self::C1, Self::K1, Self::U1];

    /// Returns the prefix and length of this variant.
    #[must_use]
    pub const fn descriptor(self) -> &'static Descriptor {
        match self {
            Self::C1 => &C1_DESCRIPTOR,
            Self::K1 => &K1_DESCRIPTOR,
            Self::U1 => &U1_DESCRIPTOR,
        }
    }

    /// Returns the binary prefix of this variant.
    #[must_use]
    pub const fn prefix(self) -> &'static Prefix {
        &self.descriptor().prefix
    }

    /// Returns the payload length of this variant.
    #[must_use]
    pub const fn length(self) -> usize {
        self.descriptor().length
    }

    /// Returns the short code as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C1 => "C1",
            Self::K1 => "K1",
            Self::U1 => "U1",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| Error::UnknownCode(s.to_owned()))
    }
}

/// Looks up the variant owning `prefix`.
#[must_use]
pub fn lookup(prefix: &Prefix) -> Option<Code> {
    PREFIX_CODES.get(prefix).copied()
}

/// Reads the prefix off a text form and returns the variant it names.
///
/// For a compound K1 access key only the part before the `.` is examined.
///
/// ```
/// use authentic::{registry, C1, Code};
///
/// let id = C1::new();
/// assert_eq!(registry::code_for_text(&id.to_string()).unwrap(), Code::C1);
/// ```
pub fn code_for_text(text: &str) -> Result<Code> {
    let head = text.split('.').next().unwrap_or(text);
    let bytes = crate::encoding::decode(head)?;
    let Some(prefix) = bytes.get(..PREFIX_SIZE) else {
        return Err(Error::UnknownCode(head.to_owned()));
    };
    let mut key = [0u8; PREFIX_SIZE];
    key.copy_from_slice(prefix);
    lookup(&key).ok_or_else(|| Error::UnknownCode(format!("{key:02x?}")))
}
