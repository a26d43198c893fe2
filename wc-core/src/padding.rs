//! The fixed-block padding scheme.
//!
//! PKCS#7 style padding over 32 byte blocks: `n = 32 - len % 32` bytes of value `n` are appended,
//! so an aligned input receives a full block of padding.

use crate::consts::BLOCK_SIZE;
use crate::error::Error;

/// Pads the buffer in place.
pub fn pad(buf: &mut Vec<u8>) {
    let n = BLOCK_SIZE - (buf.len() % BLOCK_SIZE);
    buf.resize(buf.len() + n, n as u8);
}

/// Strips the padding.
///
/// The padding value must lie in `[1, 32]` and every padding byte must carry it.
pub fn unpad(buf: &[u8]) -> Result<&[u8], Error> {
    if buf.is_empty() || buf.len() % BLOCK_SIZE != 0 {
        return Err(Error::PaddingError);
    }

    let n = buf[buf.len() - 1] as usize;
    if n == 0 || n > BLOCK_SIZE {
        return Err(Error::PaddingError);
    }

    let (unpadded, padding) = buf.split_at(buf.len() - n);
    if padding.iter().any(|&b| b as usize != n) {
        return Err(Error::PaddingError);
    }

    Ok(unpadded)
}
