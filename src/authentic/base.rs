//! Shared fixed-length buffer behavior for every identifier variant.
//!
//! A variant is described by its [`Code`]: the prefix and payload length come
//! from the registry. These helpers take the code explicitly so each variant
//! type stays a plain byte array.

use crate::encoding;
use crate::error::{Error, Result};
use crate::registry::{Code, PREFIX_SIZE};
use crate::tracing_compat::{debug, trace};
use crate::util::EntropySource;

/// Draws a payload for `code` from `entropy`.
pub(crate) fn random<const N: usize>(code: Code, entropy: &dyn EntropySource) -> [u8; N] {
    debug_assert_eq!(N, code.length());
    let mut bytes = [0u8; N];
    entropy.fill_bytes(&mut bytes);
    trace!(code = %code, source = entropy.source_id(), "generated identifier");
    bytes
}

/// Copies a caller-supplied payload, rejecting any length but `N`.
pub(crate) fn from_slice<const N: usize>(code: Code, bytes: &[u8]) -> Result<[u8; N]> {
    debug_assert_eq!(N, code.length());
    <[u8; N]>::try_from(bytes).map_err(|_| Error::InvalidLength {
        code,
        expected: N,
        actual: bytes.len(),
    })
}

/// Decodes a text form: checks the prefix, then takes the payload after it.
pub(crate) fn decode<const N: usize>(code: Code, text: &str) -> Result<[u8; N]> {
    let result = encoding::decode(text).and_then(|raw| {
        let found = &raw[..raw.len().min(PREFIX_SIZE)];
        if found != code.prefix().as_slice() {
            return Err(Error::PrefixMismatch {
                code,
                found: found.to_vec(),
            });
        }
        from_slice(code, &raw[PREFIX_SIZE..])
    });
    match &result {
        Ok(_) => trace!(code = %code, "decoded identifier"),
        Err(err) => debug!(code = %code, error = %err, "identifier decode rejected"),
    }
    result
}

/// Renders `prefix || payload` as text.
pub(crate) fn encode(code: Code, payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(PREFIX_SIZE + payload.len());
    buf.extend_from_slice(code.prefix());
    buf.extend_from_slice(payload);
    encoding::encode(buf)
}
