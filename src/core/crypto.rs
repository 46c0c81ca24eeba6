//! The authenticated-encryption container.
//!
//! Turns a secret key and plaintext into a portable, tamper-evident
//! blob and back. The container is base64 text decoding to
//! `nonce(12) ‖ tag(16) ‖ ciphertext`; nonce and tag are fixed-size so
//! no length prefix is needed. The secret key may be any byte string:
//! it is run through SHA-256 to derive the actual 256-bit AES key, so
//! arbitrary-length human-supplied secrets are safe to use directly.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::{CryptoError, Result};

/// Nonce size for AES-256-GCM (96 bits, the recommended size).
pub const NONCE_LEN: usize = 12;

/// Authentication tag size for AES-256-GCM (128 bits).
pub const TAG_LEN: usize = 16;

/// Smallest possible decoded container: nonce + tag, empty ciphertext.
const MIN_BLOB_LEN: usize = NONCE_LEN + TAG_LEN;

/// Derive the 256-bit AES key from an arbitrary-length secret.
fn derive_key(secret: &[u8]) -> Zeroizing<[u8; 32]> {
    let mut key = Zeroizing::new([0u8; 32]);
    key.copy_from_slice(&Sha256::digest(secret));
    key
}

/// Encrypt plaintext under a secret key.
///
/// Generates a fresh random 96-bit nonce from the OS CSPRNG on every
/// call and seals the plaintext with AES-256-GCM (no associated data).
/// Returns `base64(nonce ‖ tag ‖ ciphertext)`.
///
/// # Errors
///
/// Returns `CryptoError::Encryption` if the cipher primitive fails,
/// which does not happen for any input in practice.
pub fn encrypt(plaintext: &[u8], secret: &[u8]) -> Result<String> {
    let key = derive_key(secret);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_ref()));

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // RustCrypto emits ciphertext ‖ tag; the container stores
    // nonce ‖ tag ‖ ciphertext, so re-order while assembling.
    let sealed = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CryptoError::Encryption)?;
    let split = sealed.len() - TAG_LEN;

    let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
    blob.extend_from_slice(nonce.as_slice());
    blob.extend_from_slice(&sealed[split..]);
    blob.extend_from_slice(&sealed[..split]);

    Ok(BASE64.encode(blob))
}

/// Decrypt a container produced by [`encrypt`].
///
/// On success the returned plaintext is byte-identical to the original
/// input, including the empty string.
///
/// # Errors
///
/// Returns `CryptoError::Format` if the blob is not valid base64.
/// Returns `CryptoError::Decryption` for everything else: a truncated
/// container, a wrong key, a tag mismatch, or tampered ciphertext all
/// produce the same generic error.
pub fn decrypt(blob: &str, secret: &[u8]) -> Result<Vec<u8>> {
    let data = BASE64.decode(blob).map_err(CryptoError::Format)?;

    if data.len() < MIN_BLOB_LEN {
        return Err(CryptoError::Decryption.into());
    }

    let (nonce, rest) = data.split_at(NONCE_LEN);
    let (tag, ciphertext) = rest.split_at(TAG_LEN);

    // Back to the ciphertext ‖ tag layout the primitive verifies.
    let mut payload = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    payload.extend_from_slice(ciphertext);
    payload.extend_from_slice(tag);

    let key = derive_key(secret);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_ref()));

    cipher
        .decrypt(Nonce::from_slice(nonce), payload.as_slice())
        .map_err(|_| CryptoError::Decryption.into())
}
