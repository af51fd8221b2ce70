//! AES-CBC round trips with PKCS7 padding.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::{Pkcs7, UnpadError};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, InvalidLength, KeyIvInit};

use crate::error::{Error, Result};
use crate::internal::random_bytes;

/// AES block size in bytes; also the CBC IV length.
pub const AES_BLOCK_SIZE: usize = 16;

/// Key sizes (in bits) accepted by the AES functions.
pub const AES_KEY_SIZES: [usize; 3] = [128, 192, 256];

fn invalid_key_len(len: usize) -> Error {
    Error::InvalidInput(format!(
        "AES key must be 16, 24 or 32 bytes, got {} bytes",
        len
    ))
}

/// PKCS7-pad `plaintext` and encrypt it with AES-CBC.
///
/// The key length selects AES-128, AES-192 or AES-256. The IV must be
/// [`AES_BLOCK_SIZE`] bytes.
pub fn aes_cbc_encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let bad_iv = |e: InvalidLength| Error::InvalidInput(format!("invalid AES key or IV: {}", e));

    let ciphertext = match key.len() {
        16 => cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(bad_iv)?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        24 => cbc::Encryptor::<Aes192>::new_from_slices(key, iv)
            .map_err(bad_iv)?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        32 => cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(bad_iv)?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        len => return Err(invalid_key_len(len)),
    };

    Ok(ciphertext)
}

/// Decrypt AES-CBC `ciphertext` and strip its PKCS7 padding.
pub fn aes_cbc_decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let bad_iv = |e: InvalidLength| Error::InvalidInput(format!("invalid AES key or IV: {}", e));
    let unpad = |e: UnpadError| Error::Crypto(format!("PKCS7 unpadding failed: {}", e));

    match key.len() {
        16 => cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(bad_iv)?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(unpad),
        24 => cbc::Decryptor::<Aes192>::new_from_slices(key, iv)
            .map_err(bad_iv)?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(unpad),
        32 => cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(bad_iv)?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(unpad),
        len => Err(invalid_key_len(len)),
    }
}

/// Generate a random key and IV, then encrypt and decrypt `plaintext`
/// with AES-CBC/PKCS7.
///
/// Returns the recovered plaintext.
///
/// # Arguments
/// * `key_bits` - 128, 192 or 256
/// * `plaintext` - Data to encrypt; any length
///
/// # Example
///
/// ```
/// use cipherbench::aes_round_trip;
///
/// let recovered = aes_round_trip(256, b"attack at dawn").unwrap();
/// assert_eq!(recovered, b"attack at dawn");
/// ```
pub fn aes_round_trip(key_bits: usize, plaintext: &[u8]) -> Result<Vec<u8>> {
    if !AES_KEY_SIZES.contains(&key_bits) {
        return Err(Error::UnsupportedAlgorithm(format!("AES-{}", key_bits)));
    }

    let key = random_bytes(key_bits / 8);
    let iv = random_bytes(AES_BLOCK_SIZE);

    let ciphertext = aes_cbc_encrypt(&key, &iv, plaintext)?;
    aes_cbc_decrypt(&key, &iv, &ciphertext)
}
