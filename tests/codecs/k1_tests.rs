//! K1 access-key behavior through the public API.

use crate::common::init_test_logging;
use authentic::util::DetEntropy;
use authentic::{AnyAuthentic, Error, K1, K1_SECRET_SIZE, SecretArg, encoding};

#[test]
fn generated_key_has_id_and_secret() {
    init_test_logging();
    test_phase!("generated_key_has_id_and_secret");
    let key = K1::new();

    let id_text = key.to_string();
    assert_eq!(id_text.len(), 24);
    assert!(id_text.starts_with("Auth_K1-"));
    assert_eq!(key.secret().len(), K1_SECRET_SIZE);

    let access_key = key.access_key();
    let (id_part, secret_part) = access_key.split_once('.').expect("two parts");
    assert_eq!(id_part, id_text);
    assert_eq!(secret_part, key.secret_text());
    test_complete!("generated_key_has_id_and_secret");
}

#[test]
fn access_key_restores_id_and_secret() {
    init_test_logging();
    let key = K1::random_with(&DetEntropy::new(7));
    let restored = K1::from_access_key(&key.access_key()).expect("valid access key");
    assert_eq!(restored.id_bytes(), key.id_bytes());
    assert_eq!(restored.secret(), key.secret());
    assert_eq!(restored, key);
}

#[test]
fn explicit_secret_is_kept() {
    init_test_logging();
    let id = [9u8; 12];
    let secret = [3u8; K1_SECRET_SIZE];
    let key = K1::from_parts(&id, Some(&secret)).expect("valid parts");
    assert_eq!(key.id_bytes(), &id);
    assert_eq!(key.secret().as_bytes(), secret.as_slice());

    let secret_text = encoding::encode(secret);
    let from_text = K1::from_parts(&id, Some(secret_text.as_str())).expect("text secret");
    assert_eq!(from_text, key);
}

#[test]
fn missing_secret_is_generated() {
    init_test_logging();
    let id = [1u8; 12];
    let key = K1::from_parts_with(&id, None::<&[u8]>, &DetEntropy::new(5)).unwrap();
    let again = K1::from_parts_with(&id, None::<&[u8]>, &DetEntropy::new(5)).unwrap();
    assert_eq!(key.secret().len(), K1_SECRET_SIZE);
    assert_eq!(key, again);
}

#[test]
fn short_secret_is_accepted() {
    init_test_logging();
    let key = K1::from_parts(&[0u8; 12], Some(b"short")).expect("any secret length");
    assert_eq!(key.secret().as_bytes(), b"short");
    let restored = K1::from_access_key(&key.access_key()).unwrap();
    assert_eq!(restored.secret().as_bytes(), b"short");
}

#[test]
fn wrong_id_length_is_rejected() {
    init_test_logging();
    let err = K1::from_parts(&[0u8; 11], Some(b"secret")).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn malformed_access_keys_report_part_count() {
    init_test_logging();
    let key = K1::new();
    let id = key.to_string();

    let cases = [
        (id.clone(), 1usize),
        (format!("{id}.a.b"), 3),
        (format!("{}.x.y.z", key.access_key()), 5),
    ];
    for (text, parts) in cases {
        let err = K1::from_access_key(&text).unwrap_err();
        assert_with_log!(
            err == Error::MalformedAccessKey(parts),
            "part count reported",
            Error::MalformedAccessKey(parts),
            err
        );
        assert!(err.is_validation());
    }
}

#[test]
fn secret_with_access_key_is_a_contract_violation() {
    init_test_logging();
    let text = K1::new().access_key();
    let err = K1::decode(&text, Some(SecretArg::Text("AAAA"))).unwrap_err();
    assert_eq!(err, Error::SecretConflict);
    assert!(err.is_contract_violation());
}

#[test]
fn id_only_text_decodes_through_any() {
    init_test_logging();
    let key = K1::new();
    match AnyAuthentic::decode(&key.to_string()).unwrap() {
        AnyAuthentic::K1Id(id) => assert_eq!(&id, key.id_bytes()),
        other => panic!("expected K1Id, got {other:?}"),
    }
    assert_eq!(K1::decode_id(&key.to_string()).unwrap(), *key.id_bytes());
}

#[test]
fn debug_output_hides_the_secret() {
    init_test_logging();
    let key = K1::new();
    let rendered = format!("{key:?}");
    assert!(!rendered.contains(&key.secret_text()), "{rendered}");
}
