//! Prefix table behavior.

use crate::common::init_test_logging;
use authentic::registry::{self, Code, PREFIX_TABLE};
use authentic::{C1, Error, K1, U1};

#[test]
fn table_lists_every_variant() {
    init_test_logging();
    let codes: Vec<Code> = PREFIX_TABLE.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![Code::C1, Code::K1, Code::U1]);
    for descriptor in &PREFIX_TABLE {
        assert_eq!(registry::lookup(&descriptor.prefix), Some(descriptor.code));
    }
}

#[test]
fn text_lookup_finds_variant() {
    init_test_logging();
    assert_eq!(registry::code_for_text(&C1::new().to_string()), Ok(Code::C1));
    assert_eq!(registry::code_for_text(&U1::new().to_string()), Ok(Code::U1));
    assert_eq!(registry::code_for_text(&K1::new().access_key()), Ok(Code::K1));
}

#[test]
fn unknown_prefix_is_reported() {
    init_test_logging();
    let text = authentic::encoding::encode([0u8; 32]);
    assert!(matches!(
        registry::code_for_text(&text),
        Err(Error::UnknownCode(_))
    ));
    assert_eq!(registry::lookup(&[0u8; 6]), None);
}

#[test]
fn code_names_parse() {
    init_test_logging();
    for code in Code::ALL {
        assert_eq!(code.as_str().parse::<Code>(), Ok(code));
    }
    assert!("Z9".parse::<Code>().is_err());
}
