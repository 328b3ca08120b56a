//! Collection identifiers.

use crate::registry::Code;

super::fixed_identifier! {
    /// Collection identifier: 26 payload bytes behind the `Auth/C1+` prefix.
    ///
    /// ```
    /// use authentic::C1;
    ///
    /// let id = C1::from_bytes(&[0u8; 26]).unwrap();
    /// assert!(id.to_string().starts_with("Auth_C1-"));
    /// assert!(C1::from_bytes(&[0u8; 25]).is_err());
    /// ```
    C1, Code::C1, 26
}
