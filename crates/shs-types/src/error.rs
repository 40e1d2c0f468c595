/// Cryptographic operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// An unsupported digest length was requested from the factory.
    #[error("invalid algorithm id")]
    InvalidAlgId,
    /// The message bit-length does not fit the variant's length field.
    #[error("input data too long")]
    InputOverflow,
}

/// FIPS 140-3 / CMVP self-test errors.
#[derive(Debug, thiserror::Error)]
pub enum CmvpError {
    #[error("known answer test failed: {0}")]
    KatFailure(String),
    #[error("module is in the error state")]
    InvalidState,
}
