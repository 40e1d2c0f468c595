//! Message padding (FIPS 180-4 §5.1).

use shs_types::CryptoError;

use super::params::VariantParams;
use super::word::Word;

/// Pad `msg` to a whole number of message blocks.
///
/// Appends the mandatory `1` bit (byte-aligned as `0x80`), zero fill, and
/// the original message bit-length as a big-endian field of two words
/// (64 bits for SHA-224/256, 128 bits for SHA-384/512). The returned
/// buffer is the smallest multiple of the block size that fits
/// `msg || 1-bit || length field`, and is never empty: even the empty
/// message pads to one full block.
///
/// Fails with [`CryptoError::InputOverflow`] if the bit-length does not
/// fit the length field. Unreachable for realistic inputs, but the
/// standard leaves longer messages undefined and silent truncation would
/// desynchronize the digest.
pub(crate) fn pad_message<W: Word>(msg: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let block = VariantParams::<W>::BLOCK_BYTES;
    let len_field = VariantParams::<W>::LEN_FIELD_BYTES;

    let bit_len = (msg.len() as u128) << 3;
    // 32-bit variants carry a 64-bit length field; the 128-bit field of
    // the 64-bit variants cannot overflow from an in-memory message.
    if W::BITS == 32 && (bit_len >> 64) != 0 {
        return Err(CryptoError::InputOverflow);
    }

    let mut padded = Vec::with_capacity(msg.len() + 2 * block);
    padded.extend_from_slice(msg);
    padded.push(0x80);
    while (padded.len() + len_field) % block != 0 {
        padded.push(0);
    }
    let be = bit_len.to_be_bytes();
    padded.extend_from_slice(&be[16 - len_field..]);

    debug_assert_eq!(padded.len() % block, 0);
    Ok(padded)
}
