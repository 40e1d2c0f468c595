//! Known Answer Tests (KAT) for FIPS 140-3 self-testing.
//!
//! Each KAT runs a single digest computation with a known input and
//! verifies the output matches the expected value from NIST CAVP SHAVS.

use shs_types::CmvpError;

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

/// Run all KAT self-tests. Returns on first failure.
pub(crate) fn run_all_kat() -> Result<(), CmvpError> {
    kat_sha224()?;
    kat_sha256()?;
    kat_sha384()?;
    kat_sha512()?;
    Ok(())
}

/// SHA-224 KAT (NIST CAVP SHAVS).
fn kat_sha224() -> Result<(), CmvpError> {
    use crate::sha2::Sha224;

    let msg = hex("84422195a6f363f7");
    let expected = hex("c91a7d708a9d34094cf971195eb7f9a96e08772c1cf424b2fed9b049");

    let digest = Sha224::digest(&msg)
        .map_err(|e| CmvpError::KatFailure(format!("SHA-224 digest: {e}")))?;
    if digest[..] != expected[..] {
        return Err(CmvpError::KatFailure("SHA-224 digest mismatch".into()));
    }
    Ok(())
}

/// SHA-256 KAT (NIST CAVP SHAVS).
fn kat_sha256() -> Result<(), CmvpError> {
    use crate::sha2::Sha256;

    let msg = hex("5738c929c4f4ccb6");
    let expected = hex("963bb88f27f512777aab6c8b1a02c70ec0ad651d428f870036e1917120fb48bf");

    let digest = Sha256::digest(&msg)
        .map_err(|e| CmvpError::KatFailure(format!("SHA-256 digest: {e}")))?;
    if digest[..] != expected[..] {
        return Err(CmvpError::KatFailure("SHA-256 digest mismatch".into()));
    }
    Ok(())
}

/// SHA-384 KAT (NIST CAVP SHAVS).
fn kat_sha384() -> Result<(), CmvpError> {
    use crate::sha2::Sha384;

    let msg = hex("de60275bdafce4b1");
    let expected = hex(
        "a3d861d866c1362423eb21c6bec8e44b74ce993c55baa2b6640567560ebecdae\
         da07183dbbbd95e0f522caee5ddbdaf0",
    );

    let digest = Sha384::digest(&msg)
        .map_err(|e| CmvpError::KatFailure(format!("SHA-384 digest: {e}")))?;
    if digest[..] != expected[..] {
        return Err(CmvpError::KatFailure("SHA-384 digest mismatch".into()));
    }
    Ok(())
}

/// SHA-512 KAT (NIST CAVP SHAVS).
fn kat_sha512() -> Result<(), CmvpError> {
    use crate::sha2::Sha512;

    let msg = hex("cd67bd4054aaa3baa0db178ce232fd5a");
    let expected = hex(
        "0d8521f8f2f3900332d1a1a55c60ba81d04d28dfe8c504b6328ae787925fe018\
         8f2ba91c3a9f0c1653c4bf0ada356455ea36fd31f8e73e3951cad4ebba8c6e04",
    );

    let digest = Sha512::digest(&msg)
        .map_err(|e| CmvpError::KatFailure(format!("SHA-512 digest: {e}")))?;
    if digest[..] != expected[..] {
        return Err(CmvpError::KatFailure("SHA-512 digest mismatch".into()));
    }
    Ok(())
}
