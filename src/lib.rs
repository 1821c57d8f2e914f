// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Uniform symmetric encryption over two backends.
//!
//! * [`AesGcmCipher`]: AES-GCM bound to one key and one **fixed** nonce.
//!   Ciphertext is `encrypted || 16-byte tag`; decryption verifies the tag.
//!   Because the nonce never changes, encrypting the same plaintext twice
//!   yields the same ciphertext and GCM's security guarantees do not hold
//!   across messages. See [`cipher::aes`].
//! * [`Sm4CtrCipher`]: SM4 in counter mode via OpenSSL. Output length equals
//!   input length and there is no integrity protection.
//!
//! Both implement [`Cipher`]:
//!
//! ```no_run
//! use symcipher::{new_aes_gcm, Cipher};
//!
//! let cipher = new_aes_gcm(b"IHDggaKpZcMWMtVbLzRxVbOmX5c0L2F2", b"RDUpW3YNs4Kw")?;
//! let ciphertext = cipher.encrypt(b"hello")?;
//! assert_eq!(cipher.decrypt(&ciphertext)?, b"hello");
//! # Ok::<(), symcipher::CryptoError>(())
//! ```

pub mod cipher;
pub mod config;
pub mod error;
pub mod memory;
pub mod types;

pub use cipher::{new_cipher, AesGcmCipher, Cipher, Sm4CtrCipher};
pub use config::CipherConfig;
pub use error::{CryptoError, ErrorKind, Result};
pub use memory::SecretBytes;
pub use types::Algorithm;

/// Builds an AES-GCM cipher; the key length (16, 24 or 32) picks the AES
/// variant and `nonce` must be 12 bytes.
///
/// # Errors
/// Returns `CryptoError` if the key or nonce length is invalid
pub fn new_aes_gcm(key: &[u8], nonce: &[u8]) -> Result<Box<dyn Cipher>> {
    Ok(Box::new(AesGcmCipher::new(key, nonce)?))
}

/// Builds an SM4-CTR cipher from a 16-byte key and 16-byte iv.
///
/// # Errors
/// Returns `CryptoError` if the key or iv length is invalid
pub fn new_sm4(key: &[u8], iv: &[u8]) -> Result<Box<dyn Cipher>> {
    Ok(Box::new(Sm4CtrCipher::new(key, iv)?))
}
