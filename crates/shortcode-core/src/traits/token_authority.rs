//! Token authority trait.

use crate::AccessToken;
use crate::types::FieldKey;

/// Issues and checks access tokens bound to a single field.
pub trait TokenAuthority: Send + Sync {
    /// Derive the token for `key`.
    ///
    /// Derivation is deterministic: the same key always yields the same token.
    fn derive(&self, key: &FieldKey) -> AccessToken;

    /// Check a client-supplied token against `key`.
    ///
    /// Implementations recompute the token and compare in constant time.
    fn verify(&self, key: &FieldKey, token: &str) -> bool;
}
