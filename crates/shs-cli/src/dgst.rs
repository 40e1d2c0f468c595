//! Hash/digest command implementation.

use std::fs;
use std::io::{self, Read};

use shs_types::HashAlgId;

pub fn run(algorithm: &str, file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = if file == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(file)?
    };

    let (digest, alg_name) = hash_data(algorithm, &data)?;

    let hex = digest
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<String>();
    if file == "-" {
        println!("{alg_name}(stdin)= {hex}");
    } else {
        println!("{alg_name}({file})= {hex}");
    }
    Ok(())
}

fn hash_data(
    algorithm: &str,
    data: &[u8],
) -> Result<(Vec<u8>, &'static str), Box<dyn std::error::Error>> {
    let alg = match algorithm.to_lowercase().as_str() {
        "sha224" | "sha-224" | "224" => HashAlgId::Sha224,
        "sha256" | "sha-256" | "256" => HashAlgId::Sha256,
        "sha384" | "sha-384" | "384" => HashAlgId::Sha384,
        "sha512" | "sha-512" | "512" => HashAlgId::Sha512,
        _ => return Err(format!("unsupported hash algorithm: {algorithm}").into()),
    };
    let digest = shs_crypto::hash::digest_bytes(data, alg)?;
    Ok((digest, alg.name()))
}
