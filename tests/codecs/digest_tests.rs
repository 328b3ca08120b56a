//! SHA-512 multihash digests through the public API.

use crate::common::init_test_logging;
use authentic::digest::{self, Content, DIGEST_SIZE, Digest, multihash};
use authentic::{Error, ErrorKind, encoding};
use sha2::{Digest as _, Sha512};

#[test]
fn digest_text_is_a_standard_base64_container() {
    init_test_logging();
    test_phase!("digest_text_is_a_standard_base64_container");
    let text = digest::encode(b"hello");
    assert_eq!(text.len(), 88);

    let raw = encoding::decode(&text).expect("valid base64");
    assert_eq!(raw.len(), 66);
    assert_eq!(raw[0], 0x13);
    assert_eq!(raw[1], 0x40);
    assert_eq!(&raw[2..], Sha512::digest(b"hello").as_slice());
    test_complete!("digest_text_is_a_standard_base64_container");
}

#[test]
fn decode_returns_raw_digest() {
    init_test_logging();
    let text = digest::encode(b"");
    let bytes = digest::decode(&text).unwrap();
    assert_eq!(bytes.len(), DIGEST_SIZE);
    assert_eq!(bytes.as_slice(), Sha512::digest(b"").as_slice());
}

#[test]
fn verify_accepts_bytes_and_text_content() {
    init_test_logging();
    let content = b"some file contents";
    let expected = digest::encode(content);

    assert!(digest::verify(content, expected.as_str()));
    let content_text = encoding::encode(content);
    assert!(digest::verify(Content::Text(&content_text), &expected));

    let container = encoding::decode(&expected).unwrap();
    assert!(digest::verify(content, &container));
}

#[test]
fn verify_rejects_changed_content() {
    init_test_logging();
    let expected = digest::encode(b"original");
    let matched = digest::verify(b"tampered", expected.as_str());
    assert_with_log!(!matched, "tampered content fails verify", false, matched);
    assert!(!digest::verify(b"original", "not base64!"));
    assert!(!digest::verify(b"original", ""));
}

#[test]
fn foreign_hash_code_is_rejected() {
    init_test_logging();
    let container = multihash::Multihash::wrap(0x12, vec![0u8; 32]).encode();
    let text = encoding::encode(&container);
    let err = digest::decode(&text).unwrap_err();
    assert_eq!(err, Error::UnsupportedHash(0x12));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn wrong_digest_size_is_rejected() {
    init_test_logging();
    let container = multihash::Multihash::wrap(multihash::SHA2_512, vec![0u8; 32]).encode();
    let err = Digest::from_multihash(&container).unwrap_err();
    assert_eq!(err, Error::DigestLength(32));
}

#[test]
fn truncated_container_is_rejected() {
    init_test_logging();
    let mut container = Digest::of(b"x").to_multihash().encode();
    container.truncate(40);
    assert!(Digest::from_multihash(&container).is_err());
    assert!(digest::decode(&encoding::encode(&container)).is_err());
}

#[test]
fn digest_display_and_parse_agree() {
    init_test_logging();
    let sum = Digest::of(b"round");
    let parsed: Digest = sum.to_string().parse().unwrap();
    assert_eq!(parsed, sum);
    assert_eq!(sum.to_string(), digest::encode(b"round"));
}
