//! HMAC-SHA256 token authority.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use shortcode_core::error::{Error, InvalidInputError};
use shortcode_core::{AccessToken, FieldKey, TokenAuthority};

type HmacSha256 = Hmac<Sha256>;

/// Canonical string a field's token is derived from.
///
/// The shortcode length is included so that no two distinct pairs share a
/// scope, whatever characters their names contain.
pub fn scope_string(key: &FieldKey) -> String {
    format!(
        "shortcode_ui_{}:{}, {}",
        key.shortcode.len(),
        key.shortcode,
        key.attr
    )
}

/// Derives tokens as the hex HMAC-SHA256 of the field scope under a secret.
///
/// # Example
///
/// ```
/// use shortcode_core::{FieldKey, TokenAuthority};
/// use shortcode_ui::HmacTokenAuthority;
///
/// let authority = HmacTokenAuthority::new("site secret").unwrap();
/// let key = FieldKey::new("gallery", "ids");
/// let token = authority.derive(&key);
///
/// assert!(authority.verify(&key, token.as_str()));
/// assert!(!authority.verify(&FieldKey::new("gallery", "other"), token.as_str()));
/// ```
#[derive(Clone)]
pub struct HmacTokenAuthority {
    mac: HmacSha256,
}

impl HmacTokenAuthority {
    /// Create an authority keyed with `secret`.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is empty.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, Error> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(InvalidInputError::Other {
                message: "token secret cannot be empty".to_string(),
            }
            .into());
        }

        let mac = HmacSha256::new_from_slice(secret).map_err(|e| InvalidInputError::Other {
            message: format!("unusable token secret: {}", e),
        })?;

        Ok(Self { mac })
    }

    fn compute(&self, key: &FieldKey) -> String {
        let mut mac = self.mac.clone();
        mac.update(scope_string(key).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl TokenAuthority for HmacTokenAuthority {
    fn derive(&self, key: &FieldKey) -> AccessToken {
        AccessToken::new(self.compute(key))
    }

    fn verify(&self, key: &FieldKey, token: &str) -> bool {
        let expected = self.compute(key);
        let (a, b) = (expected.as_bytes(), token.as_bytes());
        if a.len() != b.len() {
            return false;
        }
        a.ct_eq(b).into()
    }
}

// Hide key material in Debug output
impl fmt::Debug for HmacTokenAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacTokenAuthority")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn authority() -> HmacTokenAuthority {
        HmacTokenAuthority::new("test-secret").unwrap()
    }

    #[test]
    fn derivation_is_deterministic() {
        let key = FieldKey::new("gallery", "ids");
        assert_eq!(authority().derive(&key), authority().derive(&key));
        assert_eq!(authority().derive(&key).as_str().len(), 64);
    }

    #[test]
    fn token_is_bound_to_exact_pair() {
        let authority = authority();
        let token = authority.derive(&FieldKey::new("gallery", "ids"));

        assert!(authority.verify(&FieldKey::new("gallery", "ids"), token.as_str()));
        assert!(!authority.verify(&FieldKey::new("gallery", "other_attr"), token.as_str()));
        assert!(!authority.verify(&FieldKey::new("other_shortcode", "ids"), token.as_str()));
    }

    #[test]
    fn different_secrets_disagree() {
        let key = FieldKey::new("gallery", "ids");
        let other = HmacTokenAuthority::new("another-secret").unwrap();
        assert!(!other.verify(&key, authority().derive(&key).as_str()));
    }

    #[test]
    fn garbage_and_empty_tokens_fail() {
        let key = FieldKey::new("gallery", "ids");
        assert!(!authority().verify(&key, ""));
        assert!(!authority().verify(&key, "not-a-token"));
    }

    #[test]
    fn scope_is_unambiguous() {
        assert_ne!(
            scope_string(&FieldKey::new("a, b", "c")),
            scope_string(&FieldKey::new("a", "b, c"))
        );
    }

    #[test]
    fn empty_secret_rejected() {
        assert!(HmacTokenAuthority::new("").is_err());
    }

    #[test]
    fn debug_hides_secret() {
        let debug = format!("{:?}", authority());
        assert!(!debug.contains("test-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    proptest! {
        #[test]
        fn token_never_verifies_for_another_pair(
            shortcode in "[a-z_]{1,12}",
            attr in "[a-z_]{1,12}",
            other_attr in "[a-z_]{1,12}",
        ) {
            prop_assume!(attr != other_attr);
            let authority = authority();
            let token = authority.derive(&FieldKey::new(shortcode.clone(), attr.clone()));
            prop_assert!(authority.verify(&FieldKey::new(shortcode.clone(), attr), token.as_str()));
            prop_assert!(!authority.verify(&FieldKey::new(shortcode, other_attr), token.as_str()));
        }
    }
}
