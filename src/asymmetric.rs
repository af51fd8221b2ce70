//! RSA-OAEP round trips.
//!
//! RSA can only encrypt a message shorter than its modulus, minus the
//! padding overhead. Larger payloads are cut into blocks of at most
//! [`max_oaep_block_size`] bytes and each block is encrypted on its own.

use rand::thread_rng;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::error::{Error, Result};

/// OAEP overhead for SHA-256: two digests plus two bytes.
const OAEP_SHA256_OVERHEAD: usize = 2 * 32 + 2;

/// Largest plaintext block an RSA key of `key_bits` can encrypt with
/// OAEP/SHA-256 padding.
///
/// # Example
///
/// ```
/// use cipherbench::max_oaep_block_size;
///
/// assert_eq!(max_oaep_block_size(1024).unwrap(), 62);
/// assert_eq!(max_oaep_block_size(2048).unwrap(), 190);
/// assert!(max_oaep_block_size(512).is_err());
/// ```
pub fn max_oaep_block_size(key_bits: usize) -> Result<usize> {
    match (key_bits / 8).checked_sub(OAEP_SHA256_OVERHEAD) {
        Some(size) if size > 0 => Ok(size),
        _ => Err(Error::InvalidInput(format!(
            "RSA-{} leaves no room for an OAEP/SHA-256 block",
            key_bits
        ))),
    }
}

/// Split `data` into consecutive blocks of at most `block_size` bytes.
///
/// Data that already fits, including empty data, comes back as a single
/// block. A zero `block_size` is treated as 1.
pub fn split_into_blocks(data: &[u8], block_size: usize) -> Vec<&[u8]> {
    if data.len() <= block_size {
        return vec![data];
    }
    data.chunks(block_size.max(1)).collect()
}

/// Encrypt every block of `plaintext` under `public_key`.
pub fn encrypt_blocks(
    public_key: &RsaPublicKey,
    plaintext: &[u8],
    block_size: usize,
) -> Result<Vec<Vec<u8>>> {
    let mut rng = thread_rng();

    split_into_blocks(plaintext, block_size)
        .into_iter()
        .map(|block| {
            public_key
                .encrypt(&mut rng, Oaep::new::<Sha256>(), block)
                .map_err(|e| Error::Crypto(format!("RSA-OAEP encryption failed: {}", e)))
        })
        .collect()
}

/// Decrypt every ciphertext block and concatenate the recovered plaintext.
pub fn decrypt_blocks(private_key: &RsaPrivateKey, ciphertexts: &[Vec<u8>]) -> Result<Vec<u8>> {
    let mut plaintext = Vec::new();
    for ciphertext in ciphertexts {
        let block = private_key
            .decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|e| Error::Crypto(format!("RSA-OAEP decryption failed: {}", e)))?;
        plaintext.extend_from_slice(&block);
    }
    Ok(plaintext)
}

/// Generate a fresh RSA keypair and push `plaintext` through OAEP
/// encryption and decryption, block by block.
///
/// Key generation is included, so one call is the whole one-shot cost of
/// using a new key. Returns the recovered plaintext.
///
/// # Arguments
/// * `key_bits` - Modulus size in bits (public exponent is 65537)
/// * `plaintext` - Data to encrypt; any length
pub fn rsa_round_trip(key_bits: usize, plaintext: &[u8]) -> Result<Vec<u8>> {
    let block_size = max_oaep_block_size(key_bits)?;

    let mut rng = thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, key_bits)
        .map_err(|e| Error::Crypto(format!("RSA-{} key generation failed: {}", key_bits, e)))?;
    let public_key = RsaPublicKey::from(&private_key);

    let ciphertexts = encrypt_blocks(&public_key, plaintext, block_size)?;
    decrypt_blocks(&private_key, &ciphertexts)
}
