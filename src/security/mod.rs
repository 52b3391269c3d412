// Webhook payload authentication
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";

/// Verifies a Meta `X-Hub-Signature-256` header (`sha256=<hex>`) against the raw body.
/// The comparison runs in constant time.
pub fn verify_signature(app_secret: &str, body: &[u8], signature_header: &str) -> bool {
    let Some(hex_sig) = signature_header.strip_prefix("sha256=") else {
        return false;
    };

    let Ok(expected) = hex::decode(hex_sig) else {
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(app_secret.as_bytes()) else {
        return false;
    };
    mac.update(body);

    mac.verify_slice(&expected).is_ok()
}

/// Generar firma HMAC SHA256 en el formato del encabezado.
/// Only used to build signed deliveries in tests.
#[doc(hidden)]
pub fn sign_payload(app_secret: &str, body: &[u8]) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(app_secret.as_bytes()).ok()?;
    mac.update(body);
    Some(format!("sha256={}", hex::encode(mac.finalize().into_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_payload_verifies() {
        let body = br#"{"object":"whatsapp_business_account"}"#;
        let header = sign_payload("app-secret", body).unwrap();
        assert!(header.starts_with("sha256="));
        assert!(verify_signature("app-secret", body, &header));
    }

    #[test]
    fn test_wrong_secret_or_body_fails() {
        let body = b"payload";
        let header = sign_payload("app-secret", body).unwrap();
        assert!(!verify_signature("other-secret", body, &header));
        assert!(!verify_signature("app-secret", b"tampered", &header));
    }

    #[test]
    fn test_malformed_header_fails() {
        assert!(!verify_signature("app-secret", b"payload", ""));
        assert!(!verify_signature("app-secret", b"payload", "sha1=abcd"));
        assert!(!verify_signature("app-secret", b"payload", "sha256=not-hex"));
    }
}
