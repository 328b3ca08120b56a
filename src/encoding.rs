//! URL-safe base64 text encoding.
//!
//! All identifier text forms use the standard base64 alphabet with `+`
//! replaced by `-` and `/` replaced by `_`. Output keeps `=` padding, so a
//! 32-byte identifier is always 44 characters and a 16-byte one is 24.
//!
//! Decoding is lenient: it accepts either alphabet and padded or unpadded
//! input, so text produced by a plain standard-base64 encoder (such as the
//! digest codec) decodes through the same path.

use crate::error::Result;
use crate::util::{EntropySource, OsEntropy};
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Encoder: URL-safe alphabet, padded.
const URL_SAFE_PADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_encode_padding(true),
);

/// Decoder: URL-safe alphabet, padding optional.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes bytes as URL-safe base64 text.
///
/// ```
/// assert_eq!(authentic::encoding::encode([0xfb, 0xff]), "-_8=");
/// ```
#[must_use]
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_PADDED.encode(bytes)
}

/// Draws `count` random bytes from the OS and encodes them.
#[must_use]
pub fn encode_random(count: usize) -> String {
    encode_random_with(count, &OsEntropy)
}

/// Draws `count` random bytes from `entropy` and encodes them.
#[must_use]
pub fn encode_random_with(count: usize, entropy: &dyn EntropySource) -> String {
    encode(entropy.bytes(count))
}

/// Decodes base64 text in either alphabet.
///
/// ```
/// use authentic::encoding;
///
/// assert_eq!(encoding::decode("-_8=").unwrap(), [0xfb, 0xff]);
/// assert_eq!(encoding::decode("+/8").unwrap(), [0xfb, 0xff]);
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>> {
    if text.contains(['+', '/']) {
        let normalized: String = text
            .chars()
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                other => other,
            })
            .collect();
        return Ok(URL_SAFE_LENIENT.decode(normalized)?);
    }
    Ok(URL_SAFE_LENIENT.decode(text)?)
}
