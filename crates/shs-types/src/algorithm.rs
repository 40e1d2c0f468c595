use crate::error::CryptoError;

/// Hash algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgId {
    /// Select a SHA-2 variant by its digest length in bits.
    ///
    /// Anything other than 224, 256, 384, or 512 is rejected with
    /// [`CryptoError::InvalidAlgId`].
    pub fn from_bits(bits: u32) -> Result<Self, CryptoError> {
        match bits {
            224 => Ok(Self::Sha224),
            256 => Ok(Self::Sha256),
            384 => Ok(Self::Sha384),
            512 => Ok(Self::Sha512),
            _ => Err(CryptoError::InvalidAlgId),
        }
    }

    /// Digest length in bytes.
    pub fn output_size(self) -> usize {
        match self {
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Display name, as printed by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }
}
