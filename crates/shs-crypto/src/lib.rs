#![forbid(unsafe_code)]
#![doc = "SHA-2 digest library for shs, implementing FIPS 180-4."]

// Hash algorithms
pub mod sha2;

pub mod hash;

// FIPS/CMVP compliance
#[cfg(feature = "fips")]
pub mod fips;
