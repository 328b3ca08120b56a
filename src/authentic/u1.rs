//! Credential identifiers.

use crate::registry::Code;

super::fixed_identifier! {
    /// Credential identifier: 26 payload bytes behind the `Auth/U1+` prefix.
    ///
    /// Same length as [`C1`](crate::C1); only the prefix tells them apart.
    U1, Code::U1, 26
}
