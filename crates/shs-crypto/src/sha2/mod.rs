//! SHA-2 family of hash algorithms.
//!
//! Provides SHA-224, SHA-256, SHA-384, and SHA-512 as defined in FIPS
//! 180-4. All four variants share one generic engine: width-polymorphic
//! word arithmetic ([`word`]), per-variant parameter records ([`params`]),
//! the padding rule ([`padding`]), and the schedule/compression loop
//! ([`engine`]). Hashing is single-shot; there is no incremental input
//! surface.

mod engine;
mod padding;
mod params;
mod word;

use shs_types::CryptoError;

/// SHA-224 output size in bytes.
pub const SHA224_OUTPUT_SIZE: usize = 28;
/// SHA-256 output size in bytes.
pub const SHA256_OUTPUT_SIZE: usize = 32;
/// SHA-384 output size in bytes.
pub const SHA384_OUTPUT_SIZE: usize = 48;
/// SHA-512 output size in bytes.
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Render digest bytes as a lowercase hexadecimal string.
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// SHA-224: 32-bit words, distinct initial vector, output truncated to
/// seven state words.
pub struct Sha224;

impl Sha224 {
    /// One-shot: compute the SHA-224 digest of `data`.
    pub fn digest(data: &[u8]) -> Result<[u8; SHA224_OUTPUT_SIZE], CryptoError> {
        let state = engine::digest_state(data, &params::SHA224)?;
        let mut out = [0u8; SHA224_OUTPUT_SIZE];
        engine::write_digest(&state, &params::SHA224, &mut out);
        Ok(out)
    }

    /// One-shot: compute the digest and render it as lowercase hex.
    pub fn hex_digest(data: &[u8]) -> Result<String, CryptoError> {
        Ok(to_hex(&Self::digest(data)?))
    }
}

/// SHA-256: 32-bit words, full eight-word output.
pub struct Sha256;

impl Sha256 {
    /// One-shot: compute the SHA-256 digest of `data`.
    pub fn digest(data: &[u8]) -> Result<[u8; SHA256_OUTPUT_SIZE], CryptoError> {
        let state = engine::digest_state(data, &params::SHA256)?;
        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        engine::write_digest(&state, &params::SHA256, &mut out);
        Ok(out)
    }

    /// One-shot: compute the digest and render it as lowercase hex.
    pub fn hex_digest(data: &[u8]) -> Result<String, CryptoError> {
        Ok(to_hex(&Self::digest(data)?))
    }
}

/// SHA-384: 64-bit words, distinct initial vector, output truncated to
/// six state words.
pub struct Sha384;

impl Sha384 {
    /// One-shot: compute the SHA-384 digest of `data`.
    pub fn digest(data: &[u8]) -> Result<[u8; SHA384_OUTPUT_SIZE], CryptoError> {
        let state = engine::digest_state(data, &params::SHA384)?;
        let mut out = [0u8; SHA384_OUTPUT_SIZE];
        engine::write_digest(&state, &params::SHA384, &mut out);
        Ok(out)
    }

    /// One-shot: compute the digest and render it as lowercase hex.
    pub fn hex_digest(data: &[u8]) -> Result<String, CryptoError> {
        Ok(to_hex(&Self::digest(data)?))
    }
}

/// SHA-512: 64-bit words, full eight-word output.
pub struct Sha512;

impl Sha512 {
    /// One-shot: compute the SHA-512 digest of `data`.
    pub fn digest(data: &[u8]) -> Result<[u8; SHA512_OUTPUT_SIZE], CryptoError> {
        let state = engine::digest_state(data, &params::SHA512)?;
        let mut out = [0u8; SHA512_OUTPUT_SIZE];
        engine::write_digest(&state, &params::SHA512, &mut out);
        Ok(out)
    }

    /// One-shot: compute the digest and render it as lowercase hex.
    pub fn hex_digest(data: &[u8]) -> Result<String, CryptoError> {
        Ok(to_hex(&Self::digest(data)?))
    }
}
