//! Authentic: self-describing identifiers and content digests.
//!
//! # Overview
//!
//! Identifiers are fixed-length random (or caller-supplied) byte strings
//! tagged with a per-variant prefix. Once text-encoded, the prefix lets a
//! decoder recognize the identifier's variant and validate its shape with no
//! external schema. Digests are SHA-512 hashes in a multihash container, so
//! they too name their own algorithm and length.
//!
//! # Module Structure
//!
//! - [`encoding`]: URL-safe base64 text transform
//! - [`digest`]: SHA-512 multihash encode, decode, and verify
//! - [`authentic`](mod@authentic): the identifier variants [`C1`], [`K1`], [`U1`]
//! - [`registry`]: variant codes, prefixes, and prefix lookup
//! - [`util`]: entropy sources (OS-backed and deterministic)
//! - [`error`](mod@error): error types
//! - [`tracing_compat`]: optional tracing integration (requires `tracing-integration` feature)
//! - [`codecs`]: everything above grouped under one path
//!
//! # Example
//!
//! ```
//! use authentic::{C1, K1, digest};
//!
//! let collection = C1::new();
//! let text = collection.to_string();
//! assert!(text.starts_with("Auth_C1-"));
//! assert_eq!(text.parse::<C1>().unwrap(), collection);
//!
//! let key = K1::new();
//! let restored: K1 = key.access_key().parse().unwrap();
//! assert_eq!(restored, key);
//!
//! let sum = digest::encode(b"payload");
//! assert!(digest::verify(b"payload", sum.as_str()));
//! ```
//!
//! No operation here performs I/O, blocks, or holds shared mutable state;
//! the only process-wide data is the read-only prefix table.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod authentic;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod registry;
pub mod tracing_compat;
pub mod util;

pub use authentic::{AnyAuthentic, C1, K1, K1_SECRET_SIZE, Secret, SecretArg, U1};
pub use digest::Digest;
pub use error::{Error, ErrorKind, Result};
pub use registry::{Code, Descriptor, PREFIX_SIZE, PREFIX_TABLE, Prefix};

pub mod codecs {
    //! The full codec surface under one path.
    //!
    //! ```
    //! use authentic::codecs;
    //!
    //! let id = codecs::authentic::C1::new();
    //! let bytes = codecs::base64::decode(&id.to_string()).unwrap();
    //! assert_eq!(bytes.len(), 32);
    //! ```

    pub use crate::digest;
    pub use crate::encoding as base64;
    pub use crate::registry;

    pub mod authentic {
        //! Identifier variants.
        pub use crate::authentic::{AnyAuthentic, C1, K1, U1};
    }
}
