//! Constants used in the WorkChat callback protocol.

/// The block size of the envelope padding scheme.
///
/// This is twice the AES block size. The platform pads every plaintext to a multiple of 32 bytes
/// and we must do the same to stay interoperable with its SDKs.
pub const BLOCK_SIZE: usize = 32;

/// The AES block size.
pub const AES_BLOCK_SIZE: usize = 16;

/// Size of the AES-256 key.
pub const KEY_SIZE: usize = 32;

/// Size of the initialization vector, which is the prefix of the key.
pub const IV_SIZE: usize = AES_BLOCK_SIZE;

/// Length of the (unpadded) base64 encoding key as configured in the admin console.
pub const ENCODING_KEY_LEN: usize = 43;

/// The size of the random prefix of every envelope.
pub const RANDOM_SIZE: usize = 16;

/// The size of the payload length field.
pub const MSG_LEN_SIZE: usize = core::mem::size_of::<u32>();

/// The envelope header contains the following bytes:
/// * Random prefix: 16 bytes,
/// * Payload length: 4 bytes,
/// * Totalling: 16 + 4 = 20 bytes.
pub const HEADER_SIZE: usize = RANDOM_SIZE + MSG_LEN_SIZE;
