//! Sealed value encoding
//!
//! Seals a small payload (the session cookie) with AES-256-GCM under a key derived from an
//! application secret. The sealed form is a single printable line:
//!
//! ```text
//! v1.<salt>.<nonce>.<ciphertext>
//! ```
//!
//! Every segment is URL-safe base64 without padding.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as B64, Engine};
use pbkdf2::pbkdf2_hmac_array;
use rand::RngCore;
use sha2::Sha256;

use crate::error::{CoreError, CoreResult};

/// Current format tag.
pub const SEAL_VERSION: &str = "v1";

const PBKDF2_ITERATIONS: u32 = 100_000;
const SALT_LENGTH: usize = 16;
const NONCE_LENGTH: usize = 12;
const KEY_LENGTH: usize = 32; // AES-256

fn derive_key(secret: &str, salt: &[u8]) -> [u8; KEY_LENGTH] {
    pbkdf2_hmac_array::<Sha256, KEY_LENGTH>(secret.as_bytes(), salt, PBKDF2_ITERATIONS)
}

fn cipher_for(secret: &str, salt: &[u8]) -> CoreResult<Aes256Gcm> {
    let key = derive_key(secret, salt);
    Aes256Gcm::new_from_slice(&key)
        .map_err(|e| CoreError::CryptoError(format!("Failed to create cipher: {e}")))
}

/// Seal `plaintext` under `secret`.
pub fn seal(plaintext: &[u8], secret: &str) -> CoreResult<String> {
    if secret.is_empty() {
        return Err(CoreError::ValidationError(
            "session secret must not be empty".to_string(),
        ));
    }

    let mut salt = [0u8; SALT_LENGTH];
    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    rand::rng().fill_bytes(&mut salt);
    rand::rng().fill_bytes(&mut nonce_bytes);

    let cipher = cipher_for(secret, &salt)?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| CoreError::CryptoError(format!("Encryption failed: {e}")))?;

    Ok(format!(
        "{SEAL_VERSION}.{}.{}.{}",
        B64.encode(salt),
        B64.encode(nonce_bytes),
        B64.encode(ciphertext)
    ))
}

/// Open a value produced by [`seal`].
///
/// A wrong secret and a tampered value are indistinguishable and both yield
/// [`CoreError::CryptoError`].
pub fn unseal(sealed: &str, secret: &str) -> CoreResult<Vec<u8>> {
    let mut parts = sealed.trim().split('.');
    let (Some(version), Some(salt), Some(nonce), Some(ciphertext), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return Err(CoreError::CryptoError("Malformed sealed value".to_string()));
    };

    if version != SEAL_VERSION {
        return Err(CoreError::CryptoError(format!(
            "Unsupported seal version: {version}"
        )));
    }

    let decode = |name: &str, segment: &str| {
        B64.decode(segment)
            .map_err(|e| CoreError::CryptoError(format!("Invalid {name}: {e}")))
    };
    let salt = decode("salt", salt)?;
    let nonce_bytes = decode("nonce", nonce)?;
    let ciphertext = decode("ciphertext", ciphertext)?;

    if nonce_bytes.len() != NONCE_LENGTH {
        return Err(CoreError::CryptoError("Invalid nonce length".to_string()));
    }

    let cipher = cipher_for(secret, &salt)?;
    cipher
        .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_ref())
        .map_err(|_| {
            CoreError::CryptoError("Unseal failed: wrong secret or corrupted value".to_string())
        })
}
