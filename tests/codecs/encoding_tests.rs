//! Text transform behavior.

use crate::common::init_test_logging;
use authentic::encoding;
use authentic::util::DetEntropy;

#[test]
fn encode_uses_url_safe_alphabet_with_padding() {
    init_test_logging();
    assert_eq!(encoding::encode([0xFB, 0xFF]), "-_8=");
    assert_eq!(encoding::encode(b"f"), "Zg==");
}

#[test]
fn decode_accepts_both_alphabets() {
    init_test_logging();
    assert_eq!(encoding::decode("-_8=").unwrap(), vec![0xFB, 0xFF]);
    assert_eq!(encoding::decode("+/8=").unwrap(), vec![0xFB, 0xFF]);
    assert_eq!(encoding::decode("+/8").unwrap(), vec![0xFB, 0xFF]);
}

#[test]
fn decode_rejects_invalid_characters() {
    init_test_logging();
    let err = encoding::decode("ab$d").unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn random_text_decodes_to_requested_length() {
    init_test_logging();
    for count in [0usize, 1, 16, 46, 100] {
        let text = encoding::encode_random(count);
        assert_eq!(encoding::decode(&text).unwrap().len(), count);
    }
    let a = encoding::encode_random_with(16, &DetEntropy::new(1));
    let b = encoding::encode_random_with(16, &DetEntropy::new(1));
    assert_eq!(a, b);
}
