//! Message signatures.
//!
//! The platform signs every callback by sorting the token, timestamp, nonce and (if present) the
//! base64 ciphertext byte-wise, concatenating them without separator and hashing the result with
//! SHA-1. The signature is transmitted as lowercase hex.

use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;

/// Computes the signature over the sorted parts.
///
/// Without `msg_encrypt` this is the signing-only form over three parts.
pub fn compute_signature(
    token: &str,
    timestamp: &str,
    nonce: &str,
    msg_encrypt: Option<&str>,
) -> String {
    let mut parts = vec![token, timestamp, nonce];
    parts.extend(msg_encrypt);
    parts.sort_unstable();

    let mut h = Sha1::new();
    for p in parts {
        h.update(p.as_bytes());
    }

    hex::encode(h.finalize())
}

/// Recomputes the signature and compares it with `candidate` in constant time.
pub fn verify_signature(
    candidate: &str,
    token: &str,
    timestamp: &str,
    nonce: &str,
    msg_encrypt: Option<&str>,
) -> bool {
    let local = compute_signature(token, timestamp, nonce, msg_encrypt);

    local.as_bytes().ct_eq(candidate.as_bytes()).into()
}

/// Signs and verifies on behalf of one signing token.
#[derive(Clone)]
pub struct Signer {
    token: String,
}

impl Signer {
    /// Create a new [`Signer`] for the shared signing token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Signs the timestamp, nonce and optional ciphertext.
    pub fn sign(&self, timestamp: &str, nonce: &str, msg_encrypt: Option<&str>) -> String {
        compute_signature(&self.token, timestamp, nonce, msg_encrypt)
    }

    /// Verifies a signature received from the platform.
    pub fn verify(
        &self,
        candidate: &str,
        timestamp: &str,
        nonce: &str,
        msg_encrypt: Option<&str>,
    ) -> bool {
        verify_signature(candidate, &self.token, timestamp, nonce, msg_encrypt)
    }
}

// The token is a shared secret.
impl core::fmt::Debug for Signer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::*;

    #[test]
    fn test_published_handshake_signature() {
        let sig = compute_signature(TOKEN, TIMESTAMP, NONCE, Some(SAMPLE_ECHOSTR));
        assert_eq!(sig, SAMPLE_SIGNATURE);
    }

    #[test]
    fn test_signing_only_form() {
        let sig = compute_signature(TOKEN, TIMESTAMP, NONCE, None);
        assert_eq!(sig, "93d1cec91cee4a4a8baada4c807ed13137622215");
    }

    #[test]
    fn test_order_independence() {
        let ct = "sKqRbbiSUnDhFHOvPjtU";
        let expected = compute_signature(TOKEN, TIMESTAMP, NONCE, Some(ct));

        // Every permutation of the call site positions hashes the same sorted input.
        let parts = [TOKEN, TIMESTAMP, NONCE, ct];
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    for d in 0..4 {
                        let idx = [a, b, c, d];
                        let mut seen = [false; 4];
                        idx.iter().for_each(|&i| seen[i] = true);
                        if !seen.iter().all(|s| *s) {
                            continue;
                        }
                        let sig =
                            compute_signature(parts[a], parts[b], parts[c], Some(parts[d]));
                        assert_eq!(sig, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        // Uppercase sorts before lowercase byte-wise: "B" < "a".
        let sig = compute_signature("a", "B", "c", None);
        let expected = hex::encode(Sha1::digest(b"Bac"));
        assert_eq!(sig, expected);
    }

    #[test]
    fn test_verify() {
        let signer = Signer::new(TOKEN);
        assert!(signer.verify(SAMPLE_SIGNATURE, TIMESTAMP, NONCE, Some(SAMPLE_ECHOSTR)));
        assert!(!signer.verify(SAMPLE_SIGNATURE, TIMESTAMP, "263014781", Some(SAMPLE_ECHOSTR)));
        assert!(!signer.verify("", TIMESTAMP, NONCE, Some(SAMPLE_ECHOSTR)));

        // Hex casing is part of the format.
        let upper = SAMPLE_SIGNATURE.to_uppercase();
        assert!(!signer.verify(&upper, TIMESTAMP, NONCE, Some(SAMPLE_ECHOSTR)));
    }

    #[test]
    fn test_debug_hides_token() {
        let signer = Signer::new(TOKEN);
        assert!(!format!("{signer:?}").contains(TOKEN));
    }
}
