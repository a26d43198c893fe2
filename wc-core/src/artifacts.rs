//! Key material and shared secrets.
//!
//! The platform and the application share a signing token, a base64 encoding key from which the
//! AES key is derived, and the corp (receiver) identifier that closes every envelope.

use crate::consts::*;
use crate::error::Error;

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::{alphabet, Engine};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

// The console hands out 43 characters of unpadded base64 whose last character may carry
// non-zero trailing bits.
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// The secrets shared with the platform, as found in the application configuration.
///
/// Loaded once and never mutated.
#[derive(Clone, Serialize, Deserialize)]
pub struct SharedSecrets {
    /// The corp (tenant) identifier.
    pub corp_id: String,

    /// The signing token.
    pub token: String,

    /// The 43 character base64 encoding key.
    pub encoding_aes_key: String,

    /// The receiver identifier expected at the end of every envelope.
    ///
    /// Falls back to [`SharedSecrets::corp_id`] when left empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub receiver_id: String,
}

impl SharedSecrets {
    /// The receiver identifier that is written into and expected from envelopes.
    pub fn receiver_id(&self) -> &str {
        if self.receiver_id.is_empty() {
            &self.corp_id
        } else {
            &self.receiver_id
        }
    }

    /// Parses the secrets from their JSON representation.
    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }
}

impl core::fmt::Debug for SharedSecrets {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedSecrets")
            .field("corp_id", &self.corp_id)
            .field("receiver_id", &self.receiver_id())
            .finish_non_exhaustive()
    }
}

/// An AES-256 key.
#[derive(Clone, PartialEq, Eq)]
pub struct AesKey(pub [u8; KEY_SIZE]);

impl AesKey {
    /// Derives the AES key from the encoding key.
    ///
    /// A single `=` is appended before standard base64 decoding, the result must be exactly 32
    /// bytes.
    pub fn derive(encoding_aes_key: &str) -> Result<Self, Error> {
        let padded = format!("{encoding_aes_key}=");
        let raw = KEY_ENGINE
            .decode(padded.as_bytes())
            .map_err(|_e| Error::KeyDecodeError)?;

        let key: [u8; KEY_SIZE] = raw.try_into().map_err(|_e| Error::KeyDecodeError)?;

        Ok(Self(key))
    }

    /// The initialization vector, which is the first 16 bytes of the key.
    pub fn iv(&self) -> [u8; IV_SIZE] {
        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&self.0[..IV_SIZE]);
        iv
    }

    /// Generates a fresh encoding key in the format of the admin console.
    pub fn generate_encoding_key<R: RngCore + CryptoRng>(rng: &mut R) -> String {
        let mut raw = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut raw);

        let mut encoded = STANDARD.encode(raw);
        encoded.truncate(ENCODING_KEY_LEN);

        encoded
    }
}

impl core::fmt::Debug for AesKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AesKey(..)")
    }
}
