//! Access-token login.
//!
//! The admin has no user table. The operator logs in with the
//! `ADMIN_ACCESS_TOKEN` from the environment. Both tokens are run through
//! HMAC-SHA256 and the tags compared with `verify_slice`, which is
//! constant-time.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Fixed message both tokens are keyed over.
const TOKEN_CONTEXT: &[u8] = b"dukkan-admin-access-token";

fn tag(key: &[u8]) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(key).ok()?;
    mac.update(TOKEN_CONTEXT);
    Some(mac)
}

/// Check a submitted token against the configured one.
#[must_use]
pub fn verify_access_token(expected: &SecretString, provided: &str) -> bool {
    let provided = provided.trim();
    if provided.is_empty() {
        return false;
    }

    let (Some(expected), Some(provided)) = (
        tag(expected.expose_secret().as_bytes()),
        tag(provided.as_bytes()),
    ) else {
        return false;
    };

    let expected = expected.finalize().into_bytes();
    provided.verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_access_token() {
        let expected = SecretString::from("Qm7$kT2!vX9@pL4#");
        assert!(verify_access_token(&expected, "Qm7$kT2!vX9@pL4#"));
        assert!(verify_access_token(&expected, "  Qm7$kT2!vX9@pL4#\n"));
        assert!(!verify_access_token(&expected, "Qm7$kT2!vX9@pL4"));
        assert!(!verify_access_token(&expected, ""));
    }
}
