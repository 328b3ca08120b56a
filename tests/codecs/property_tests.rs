//! Property checks over arbitrary payloads.

use authentic::digest;
use authentic::{C1, K1, U1, encoding};
use proptest::prelude::*;
use sha2::{Digest as _, Sha512};

proptest! {
    #[test]
    fn c1_text_roundtrips(bytes in prop::array::uniform26(any::<u8>())) {
        let id = C1::from_array(bytes);
        let text = id.to_string();
        prop_assert_eq!(text.len(), 44);
        prop_assert_eq!(C1::decode(&text).unwrap(), id);
    }

    #[test]
    fn u1_text_roundtrips(bytes in prop::array::uniform26(any::<u8>())) {
        let id = U1::from_array(bytes);
        prop_assert_eq!(U1::decode(&id.to_string()).unwrap(), id);
        prop_assert!(C1::decode(&id.to_string()).is_err());
    }

    #[test]
    fn k1_access_key_roundtrips(
        id in prop::array::uniform12(any::<u8>()),
        secret in prop::collection::vec(any::<u8>(), 1..64),
    ) {
        let key = K1::from_parts(&id, Some(&secret)).unwrap();
        let restored = K1::from_access_key(&key.access_key()).unwrap();
        prop_assert_eq!(restored.id_bytes(), &id);
        prop_assert_eq!(restored.secret().as_bytes(), secret.as_slice());
    }

    #[test]
    fn encoding_decode_inverts_encode(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let text = encoding::encode(&bytes);
        prop_assert_eq!(encoding::decode(&text).unwrap(), bytes);
    }

    #[test]
    fn digest_decode_yields_sha512(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let text = digest::encode(&bytes);
        prop_assert_eq!(text.len(), 88);
        let raw = digest::decode(&text).unwrap();
        let expected = Sha512::digest(&bytes);
        prop_assert_eq!(raw.as_slice(), expected.as_slice());
        prop_assert!(digest::verify(&bytes, text.as_str()));
    }

    #[test]
    fn verify_rejects_other_content(
        a in prop::collection::vec(any::<u8>(), 0..128),
        b in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        prop_assume!(a != b);
        let text = digest::encode(&a);
        prop_assert!(!digest::verify(&b, text.as_str()));
    }
}
