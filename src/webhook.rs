//! Webhook signature verification.
//!
//! Implements the receiving side of HMAC-signed webhook deliveries
//! (GitHub's `X-Hub-Signature-256` scheme): the digest is HMAC-SHA256
//! over the raw request body, sent as `sha256=<hex>`. Verification is
//! constant time. The HTTP transport in front of this module is plain
//! protocol glue and lives with whatever server mounts it.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header value prefix for the SHA-256 scheme.
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Environment variable holding the shared secret.
pub const SECRET_ENV: &str = "GITHUB_WEBHOOK_SECRET";

/// Verifies request signatures against a shared secret.
pub struct SignatureVerifier {
    secret: Vec<u8>,
}

impl SignatureVerifier {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Build a verifier from the `GITHUB_WEBHOOK_SECRET` environment
    /// variable. Returns None when the variable is unset.
    pub fn from_env() -> Option<Self> {
        std::env::var(SECRET_ENV).ok().map(Self::new)
    }

    fn mac(&self) -> HmacSha256 {
        // HMAC accepts keys of any length
        HmacSha256::new_from_slice(&self.secret).expect("HMAC key of any length is valid")
    }

    /// Compute the `sha256=<hex>` signature for a body.
    pub fn sign(&self, body: &[u8]) -> String {
        let mut mac = self.mac();
        mac.update(body);
        format!(
            "{}{}",
            SIGNATURE_PREFIX,
            hex::encode(mac.finalize().into_bytes())
        )
    }

    /// Verify a signature header against the raw request body.
    ///
    /// The comparison is constant time. Malformed headers (wrong
    /// prefix, invalid hex) verify as false rather than erroring.
    pub fn verify(&self, body: &[u8], signature: &str) -> bool {
        let Some(hex_digest) = signature.strip_prefix(SIGNATURE_PREFIX) else {
            return false;
        };
        let Ok(digest) = hex::decode(hex_digest) else {
            return false;
        };

        let mut mac = self.mac();
        mac.update(body);
        mac.verify_slice(&digest).is_ok()
    }
}

/// Receipt status for a webhook delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReceiptStatus {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "invalid signature")]
    InvalidSignature,
}

/// Outcome of one delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventReceipt {
    pub status: ReceiptStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

/// Process one webhook delivery.
///
/// On a valid signature the event type is recorded and echoed in the
/// receipt; on an invalid one nothing happens beyond the rejection.
pub fn receive(
    verifier: &SignatureVerifier,
    body: &[u8],
    signature: &str,
    event: Option<&str>,
) -> EventReceipt {
    if !verifier.verify(body, signature) {
        return EventReceipt {
            status: ReceiptStatus::InvalidSignature,
            event: None,
        };
    }

    let event = event.unwrap_or("unknown").to_string();
    println!("Received {}", event);

    EventReceipt {
        status: ReceiptStatus::Ok,
        event: Some(event),
    }
}
