//! The plaintext envelope.
//!
//! Every encrypted message wraps the following layout, followed by its length in bytes:
//!
//! ```text
//! RANDOM (16) || PAYLOAD LEN (4, big-endian) || PAYLOAD (*) || RECEIVER ID (*)
//! ```
//!
//! The envelope is padded to a multiple of [`BLOCK_SIZE`][crate::consts::BLOCK_SIZE] before
//! encryption.

use crate::consts::*;
use crate::error::Error;
use crate::padding::unpad;

use rand::{CryptoRng, RngCore};

/// An unpacked envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// The payload: a message body or, during the handshake, the echo string.
    pub payload: Vec<u8>,

    /// The receiver identifier trailing the payload.
    pub receiver_id: Vec<u8>,
}

impl Envelope {
    /// Packs the payload and receiver identifier behind a fresh random prefix.
    ///
    /// The result is not padded yet.
    pub fn pack<R: RngCore + CryptoRng>(
        rng: &mut R,
        payload: &[u8],
        receiver_id: &[u8],
    ) -> Result<Vec<u8>, Error> {
        let mut random = [0u8; RANDOM_SIZE];
        rng.fill_bytes(&mut random);

        pack_with_prefix(&random, payload, receiver_id)
    }

    /// Strips the padding and unpacks the envelope.
    pub fn unpack(padded: &[u8]) -> Result<Self, Error> {
        let plain = unpad(padded)?;
        if plain.len() < HEADER_SIZE {
            return Err(Error::EnvelopeTooShort(plain.len()));
        }

        let (header, rest) = plain.split_at(HEADER_SIZE);
        let declared = u32::from_be_bytes(header[RANDOM_SIZE..].try_into()?) as usize;

        if declared > rest.len() {
            return Err(Error::EnvelopeTruncated {
                declared,
                available: rest.len(),
            });
        }

        let (payload, receiver_id) = rest.split_at(declared);

        Ok(Self {
            payload: payload.to_vec(),
            receiver_id: receiver_id.to_vec(),
        })
    }
}

pub(crate) fn pack_with_prefix(
    random: &[u8; RANDOM_SIZE],
    payload: &[u8],
    receiver_id: &[u8],
) -> Result<Vec<u8>, Error> {
    let len = u32::try_from(payload.len())?;

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len() + receiver_id.len() + BLOCK_SIZE);
    out.extend_from_slice(random);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(payload);
    out.extend_from_slice(receiver_id);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::pad;

    fn padded(mut buf: Vec<u8>) -> Vec<u8> {
        pad(&mut buf);
        buf
    }

    #[test]
    fn test_pack_layout() {
        let packed = pack_with_prefix(b"0123456789abcdef", b"hello", b"wwCorpA").unwrap();

        assert_eq!(packed.len(), 16 + 4 + 5 + 7);
        assert_eq!(&packed[..16], b"0123456789abcdef");
        assert_eq!(&packed[16..20], &[0, 0, 0, 5]);
        assert_eq!(&packed[20..25], b"hello");
        assert_eq!(&packed[25..], b"wwCorpA");
    }

    #[test]
    fn test_pack_fresh_prefix() {
        let mut rng = rand::thread_rng();
        let a = Envelope::pack(&mut rng, b"hello", b"wwCorpA").unwrap();
        let b = Envelope::pack(&mut rng, b"hello", b"wwCorpA").unwrap();

        assert_ne!(a[..RANDOM_SIZE], b[..RANDOM_SIZE]);
        assert_eq!(a[RANDOM_SIZE..], b[RANDOM_SIZE..]);
    }

    #[test]
    fn test_unpack() {
        let mut rng = rand::thread_rng();
        let packed = Envelope::pack(&mut rng, "测试消息".as_bytes(), b"wwCorpA").unwrap();
        let env = Envelope::unpack(&padded(packed)).unwrap();

        assert_eq!(env.payload, "测试消息".as_bytes());
        assert_eq!(env.receiver_id, b"wwCorpA");
    }

    #[test]
    fn test_unpack_empty_parts() {
        let packed = pack_with_prefix(&[9u8; RANDOM_SIZE], b"", b"").unwrap();
        let env = Envelope::unpack(&padded(packed)).unwrap();

        assert!(env.payload.is_empty());
        assert!(env.receiver_id.is_empty());
    }

    #[test]
    fn test_unpack_too_short() {
        let buf = padded(vec![0u8; 19]);
        assert!(matches!(
            Envelope::unpack(&buf),
            Err(Error::EnvelopeTooShort(19))
        ));
    }

    #[test]
    fn test_unpack_truncated() {
        let mut packed = pack_with_prefix(&[0u8; RANDOM_SIZE], b"hello", b"wwCorpA").unwrap();
        // Claim a payload of 1000 bytes.
        packed[16..20].copy_from_slice(&1000u32.to_be_bytes());

        assert!(matches!(
            Envelope::unpack(&padded(packed)),
            Err(Error::EnvelopeTruncated {
                declared: 1000,
                available: 12
            })
        ));

        let mut packed = pack_with_prefix(&[0u8; RANDOM_SIZE], b"", b"").unwrap();
        packed[16..20].copy_from_slice(&u32::MAX.to_be_bytes());
        assert!(matches!(
            Envelope::unpack(&padded(packed)),
            Err(Error::EnvelopeTruncated { .. })
        ));
    }

    #[test]
    fn test_unpack_bad_padding() {
        let packed = pack_with_prefix(&[0u8; RANDOM_SIZE], b"hello", b"wwCorpA").unwrap();
        assert!(matches!(
            Envelope::unpack(&packed),
            Err(Error::PaddingError)
        ));
    }
}
