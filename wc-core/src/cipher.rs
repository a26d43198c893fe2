//! AES-256-CBC with the key prefix as initialization vector.
//!
//! The IV convention is fixed by the platform. Plaintexts are padded using [`crate::padding`]
//! before encryption; decryption returns the raw padded plaintext.

use crate::artifacts::AesKey;
use crate::consts::AES_BLOCK_SIZE;
use crate::error::Error;
use crate::padding::pad;

use aes::Aes256;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Pads and encrypts the plaintext, returning the raw ciphertext.
pub fn encrypt(key: &AesKey, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    let mut buf = plaintext.to_vec();
    pad(&mut buf);

    let len = buf.len();
    Aes256CbcEnc::new(&key.0.into(), &key.iv().into())
        .encrypt_padded_mut::<NoPadding>(&mut buf, len)
        .map_err(|_e| Error::ConstraintViolation)?;

    Ok(buf)
}

/// Decrypts the raw ciphertext, returning the padded plaintext.
pub fn decrypt(key: &AesKey, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertextLength(ciphertext.len()));
    }

    let mut buf = ciphertext.to_vec();
    Aes256CbcDec::new(&key.0.into(), &key.iv().into())
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_e| Error::InvalidCiphertextLength(ciphertext.len()))?;

    Ok(buf)
}
