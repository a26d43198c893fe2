//! WorkChat core errors.

use core::{array::TryFromSliceError, num::TryFromIntError};

/// A WorkChat core error.
///
/// All errors are terminal for the message at hand: nothing is retried and no partial payload is
/// ever returned.
#[derive(Debug)]
pub enum Error {
    /// The message signature did not verify.
    SignatureMismatch,
    /// The encoding key is not valid base64 or does not decode to 32 bytes.
    KeyDecodeError,
    /// The ciphertext is not valid base64.
    CiphertextDecodeError,
    /// The decoded ciphertext is empty or not a multiple of the AES block size.
    InvalidCiphertextLength(usize),
    /// The decrypted plaintext is not correctly padded.
    PaddingError,
    /// The unpadded plaintext is shorter than the envelope header.
    EnvelopeTooShort(usize),
    /// The payload length field points beyond the end of the envelope.
    EnvelopeTruncated {
        /// The payload length found in the header.
        declared: usize,
        /// The number of bytes left after the header.
        available: usize,
    },
    /// The envelope was addressed to a different receiver.
    ReceiverMismatch,
    /// Serde JSON error.
    Json(serde_json::Error),
    /// Constraint violation.
    ConstraintViolation,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SignatureMismatch => write!(f, "msg signature is invalid"),
            Self::KeyDecodeError => {
                write!(f, "encoding key does not decode to a 32 byte AES key")
            }
            Self::CiphertextDecodeError => write!(f, "ciphertext is not valid base64"),
            Self::InvalidCiphertextLength(len) => {
                write!(f, "ciphertext length {len} is not a multiple of the block size")
            }
            Self::PaddingError => write!(f, "invalid padding"),
            Self::EnvelopeTooShort(len) => write!(f, "envelope too short: {len} bytes"),
            Self::EnvelopeTruncated {
                declared,
                available,
            } => write!(
                f,
                "envelope truncated, declared: {declared}, available: {available}"
            ),
            Self::ReceiverMismatch => write!(f, "receiver id is not equal"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::ConstraintViolation => write!(f, "constraint violation"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<TryFromIntError> for Error {
    fn from(_: TryFromIntError) -> Self {
        Self::ConstraintViolation
    }
}

impl From<TryFromSliceError> for Error {
    fn from(_: TryFromSliceError) -> Self {
        Self::ConstraintViolation
    }
}
