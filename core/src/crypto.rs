//! Legacy response-field cipher.
//!
//! The upstream system emits one field as DES-encrypted (ECB, PKCS7
//! padding), Base64-encoded text, sometimes still wrapped in literal quote
//! characters from its JSON transport. That format is externally mandated
//! wire compatibility, not a design choice; do not reuse it for anything
//! new. The cipher key is the first 8 bytes of the caller-supplied string.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use des::cipher::block_padding::Pkcs7;
use des::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use des::Des;
use log::error;

use crate::error::ApiError;

const KEY_LEN: usize = 8;

/// Decrypt an encrypted response field, returning `""` on any failure.
///
/// Matches the lenient contract suites rely on: short key, malformed
/// Base64, bad block length or padding, and non-UTF-8 plaintext all log the
/// ciphertext and the failure, then yield an empty string. The key is never
/// written to the log. Use [`try_decrypt`] to distinguish a failure from a
/// genuinely empty plaintext.
pub fn decrypt(key: &str, ciphertext: &str) -> String {
    match try_decrypt(key, ciphertext) {
        Ok(plaintext) => plaintext,
        Err(err) => {
            error!("failed to decrypt response field (ciphertext: {ciphertext}): {err}");
            String::new()
        }
    }
}

/// Decrypt an encrypted response field, surfacing the failure.
///
/// Literal `"` characters are stripped from the ciphertext before Base64
/// decoding.
pub fn try_decrypt(key: &str, ciphertext: &str) -> Result<String, ApiError> {
    let key = cipher_key(key)?;
    let stripped = ciphertext.replace('"', "");
    let raw = BASE64
        .decode(stripped.as_bytes())
        .map_err(|e| ApiError::Ciphertext(e.to_string()))?;
    let decryptor = ecb::Decryptor::<Des>::new_from_slice(&key)
        .map_err(|e| ApiError::Ciphertext(e.to_string()))?;
    let plaintext = decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(&raw)
        .map_err(|_| ApiError::Ciphertext("bad block length or padding".to_string()))?;
    String::from_utf8(plaintext).map_err(|e| ApiError::Ciphertext(e.to_string()))
}

/// Encrypt `plaintext` into the same wire format [`decrypt`] consumes.
///
/// Used to fabricate fixtures for systems that expect the encrypted field.
pub fn encrypt(key: &str, plaintext: &str) -> Result<String, ApiError> {
    let key = cipher_key(key)?;
    let encryptor = ecb::Encryptor::<Des>::new_from_slice(&key)
        .map_err(|e| ApiError::Ciphertext(e.to_string()))?;
    let raw = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    Ok(BASE64.encode(raw))
}

/// First 8 bytes of the key material; shorter keys are an error.
fn cipher_key(key: &str) -> Result<[u8; KEY_LEN], ApiError> {
    let bytes = key.as_bytes();
    if bytes.len() < KEY_LEN {
        return Err(ApiError::InvalidKeyLength(bytes.len()));
    }
    let mut material = [0u8; KEY_LEN];
    material.copy_from_slice(&bytes[..KEY_LEN]);
    Ok(material)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "8bytekey";

    #[test]
    fn round_trips_plaintext() {
        let ciphertext = encrypt(KEY, "hello").unwrap();
        assert_eq!(decrypt(KEY, &ciphertext), "hello");
    }

    #[test]
    fn quote_wrapped_ciphertext_decrypts() {
        let ciphertext = encrypt(KEY, "hello").unwrap();
        assert_eq!(decrypt(KEY, &format!("\"{ciphertext}\"")), "hello");
    }

    #[test]
    fn only_the_first_eight_key_bytes_matter() {
        let ciphertext = encrypt("8bytekey-and-then-some", "hello").unwrap();
        assert_eq!(decrypt(KEY, &ciphertext), "hello");
    }

    #[test]
    fn empty_plaintext_round_trips() {
        let ciphertext = encrypt(KEY, "").unwrap();
        assert_eq!(try_decrypt(KEY, &ciphertext).unwrap(), "");
    }

    #[test]
    fn ciphertext_is_whole_blocks_of_base64() {
        let ciphertext = encrypt(KEY, "hello").unwrap();
        let raw = BASE64.decode(ciphertext.as_bytes()).unwrap();
        assert_eq!(raw.len(), 8);
    }

    #[test]
    fn short_key_yields_empty_string() {
        assert_eq!(decrypt("short", "irrelevant"), "");
        let err = try_decrypt("short", "irrelevant").unwrap_err();
        assert!(matches!(err, ApiError::InvalidKeyLength(5)));
    }

    #[test]
    fn short_key_is_rejected_for_encryption_too() {
        let err = encrypt("short", "hello").unwrap_err();
        assert!(matches!(err, ApiError::InvalidKeyLength(5)));
    }

    #[test]
    fn malformed_base64_yields_empty_string() {
        assert_eq!(decrypt(KEY, "!!!not-base64!!!"), "");
        let err = try_decrypt(KEY, "!!!not-base64!!!").unwrap_err();
        assert!(matches!(err, ApiError::Ciphertext(_)));
    }

    #[test]
    fn truncated_ciphertext_yields_empty_string() {
        // 5 raw bytes is not a whole DES block.
        let truncated = BASE64.encode(b"abcde");
        assert_eq!(decrypt(KEY, &truncated), "");
        let err = try_decrypt(KEY, &truncated).unwrap_err();
        assert!(matches!(err, ApiError::Ciphertext(_)));
    }
}
