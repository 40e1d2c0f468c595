//! Unified hash module.
//!
//! Single entry point for digest computation over the SHA-2 family. A
//! variant is selected either directly by [`HashAlgId`] or through the
//! bit-length factory, which rejects anything other than 224/256/384/512.

use shs_types::{CryptoError, HashAlgId};

use crate::sha2::{to_hex, Sha224, Sha256, Sha384, Sha512};

/// Compute the raw digest bytes of `data`.
pub fn digest_bytes(data: &[u8], alg: HashAlgId) -> Result<Vec<u8>, CryptoError> {
    match alg {
        HashAlgId::Sha224 => Ok(Sha224::digest(data)?.to_vec()),
        HashAlgId::Sha256 => Ok(Sha256::digest(data)?.to_vec()),
        HashAlgId::Sha384 => Ok(Sha384::digest(data)?.to_vec()),
        HashAlgId::Sha512 => Ok(Sha512::digest(data)?.to_vec()),
    }
}

/// Compute the digest of `data` and render it as a lowercase hex string.
pub fn compute_digest(data: &[u8], alg: HashAlgId) -> Result<String, CryptoError> {
    Ok(to_hex(&digest_bytes(data, alg)?))
}

/// Compute a hex digest for a variant selected by bit length
/// (224, 256, 384, or 512).
pub fn compute_digest_bits(data: &[u8], bits: u32) -> Result<String, CryptoError> {
    compute_digest(data, HashAlgId::from_bits(bits)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_digest_matches_variant_api() {
        let msg = b"abc";
        assert_eq!(
            compute_digest(msg, HashAlgId::Sha256).unwrap(),
            Sha256::hex_digest(msg).unwrap()
        );
        assert_eq!(
            compute_digest(msg, HashAlgId::Sha384).unwrap(),
            Sha384::hex_digest(msg).unwrap()
        );
    }

    #[test]
    fn test_bit_length_factory() {
        assert_eq!(
            compute_digest_bits(b"abc", 256).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(matches!(
            compute_digest_bits(b"abc", 160),
            Err(CryptoError::InvalidAlgId)
        ));
    }

    #[test]
    fn test_digest_bytes_lengths() {
        for alg in [
            HashAlgId::Sha224,
            HashAlgId::Sha256,
            HashAlgId::Sha384,
            HashAlgId::Sha512,
        ] {
            assert_eq!(digest_bytes(b"x", alg).unwrap().len(), alg.output_size());
        }
    }
}
