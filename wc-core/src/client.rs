//! WorkChat client API.
//!
//! Used for:
//! - Verifying, decrypting and unpacking callbacks (including the URL verification handshake),
//! - Packing, encrypting and signing replies.

use crate::api::{EncryptedMessage, RecvMessage};
use crate::artifacts::{AesKey, SharedSecrets};
use crate::cipher;
use crate::envelope::Envelope;
use crate::error::Error;
use crate::signature::Signer;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::{CryptoRng, RngCore};

/// A MsgCrypt verifies, decrypts, encrypts and signs messages for one set of [`SharedSecrets`].
///
/// It holds no mutable state and can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct MsgCrypt {
    // Signs and verifies using the shared token.
    signer: Signer,

    // Derived once from the encoding key.
    key: AesKey,

    // The receiver identifier written into outbound envelopes.
    receiver_id: String,
}

impl MsgCrypt {
    /// Create a new [`MsgCrypt`], deriving the AES key from the encoding key.
    pub fn new(secrets: &SharedSecrets) -> Result<Self, Error> {
        Ok(Self {
            signer: Signer::new(secrets.token.clone()),
            key: AesKey::derive(&secrets.encoding_aes_key)?,
            receiver_id: secrets.receiver_id().to_string(),
        })
    }

    /// The configured receiver identifier.
    pub fn receiver_id(&self) -> &str {
        &self.receiver_id
    }

    /// The signer for the shared token.
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Verifies the signature over the ciphertext and decrypts it.
    ///
    /// Returns the raw padded plaintext, see [`Envelope::unpack`].
    pub fn decrypt(
        &self,
        signature: &str,
        timestamp: &str,
        nonce: &str,
        ciphertext_b64: &str,
    ) -> Result<Vec<u8>, Error> {
        if !self
            .signer
            .verify(signature, timestamp, nonce, Some(ciphertext_b64))
        {
            return Err(Error::SignatureMismatch);
        }

        let ciphertext = STANDARD
            .decode(ciphertext_b64)
            .map_err(|_e| Error::CiphertextDecodeError)?;

        cipher::decrypt(&self.key, &ciphertext)
    }

    /// Pads and encrypts an already packed envelope.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        cipher::encrypt(&self.key, plaintext)
    }

    /// Verifies, decrypts and unpacks a message.
    ///
    /// If `expected_receiver_id` is non-empty, the receiver identifier in the envelope must match
    /// it exactly.
    pub fn verify_and_decrypt(
        &self,
        signature: &str,
        timestamp: &str,
        nonce: &str,
        ciphertext_b64: &str,
        expected_receiver_id: Option<&str>,
    ) -> Result<Vec<u8>, Error> {
        let padded = self.decrypt(signature, timestamp, nonce, ciphertext_b64)?;
        let envelope = Envelope::unpack(&padded)?;

        match expected_receiver_id {
            Some(expected) if !expected.is_empty() => {
                if envelope.receiver_id != expected.as_bytes() {
                    return Err(Error::ReceiverMismatch);
                }
            }
            _ => {}
        }

        Ok(envelope.payload)
    }

    /// Answers the URL verification handshake.
    ///
    /// The decrypted echo string has to be returned verbatim as response body.
    pub fn verify_url(
        &self,
        signature: &str,
        timestamp: &str,
        nonce: &str,
        echostr: &str,
    ) -> Result<String, Error> {
        let echo = self.verify_and_decrypt(
            signature,
            timestamp,
            nonce,
            echostr,
            Some(self.receiver_id.as_str()),
        )?;

        String::from_utf8(echo).map_err(|_e| Error::ConstraintViolation)
    }

    /// Verifies and decrypts an inbound message body addressed to the configured receiver.
    pub fn decrypt_msg(
        &self,
        signature: &str,
        timestamp: &str,
        nonce: &str,
        msg: &RecvMessage,
    ) -> Result<Vec<u8>, Error> {
        self.verify_and_decrypt(
            signature,
            timestamp,
            nonce,
            &msg.encrypt,
            Some(self.receiver_id.as_str()),
        )
    }

    /// Packs, encrypts and signs a payload for the given receiver.
    pub fn encrypt_and_sign<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        payload: &[u8],
        timestamp: &str,
        nonce: &str,
        receiver_id: &str,
    ) -> Result<EncryptedMessage, Error> {
        let packed = Envelope::pack(rng, payload, receiver_id.as_bytes())?;
        let encrypt = STANDARD.encode(self.encrypt(&packed)?);
        let signature = self.signer.sign(timestamp, nonce, Some(&encrypt));

        Ok(EncryptedMessage {
            encrypt,
            signature,
            timestamp: timestamp.to_string(),
            nonce: nonce.to_string(),
        })
    }

    /// Packs, encrypts and signs a reply for the configured receiver.
    pub fn encrypt_msg<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        reply: &str,
        timestamp: &str,
        nonce: &str,
    ) -> Result<EncryptedMessage, Error> {
        self.encrypt_and_sign(rng, reply.as_bytes(), timestamp, nonce, &self.receiver_id)
    }
}
