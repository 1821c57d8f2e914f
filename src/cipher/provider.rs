// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::cipher::aes::AesGcmCipher;
use crate::cipher::sm4::Sm4CtrCipher;
use crate::error::{CryptoError, Result};
use crate::types::Algorithm;

/// Symmetric Cipher Trait
///
/// Implementations are immutable once built, so one instance can serve any
/// number of concurrent callers.
pub trait Cipher: Send + Sync {
    /// Encrypts one complete buffer. The input is never modified.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts one complete buffer produced by [`Cipher::encrypt`].
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;

    fn algorithm(&self) -> Algorithm;
}

impl<C: Cipher + ?Sized> Cipher for Box<C> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        (**self).decrypt(ciphertext)
    }

    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }
}

impl<C: Cipher + ?Sized> Cipher for std::sync::Arc<C> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        (**self).decrypt(ciphertext)
    }

    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }
}

/// Builds the cipher for `algorithm`.
///
/// `nonce` is the GCM nonce for the AES variants and the counter iv for SM4.
/// The AES variants also require the key length to match the named key size.
pub fn new_cipher(algorithm: Algorithm, key: &[u8], nonce: &[u8]) -> Result<Box<dyn Cipher>> {
    match algorithm {
        Algorithm::AES128GCM | Algorithm::AES192GCM | Algorithm::AES256GCM => {
            if key.len() != algorithm.key_size() {
                return Err(CryptoError::InvalidKeySize {
                    expected: algorithm.key_size(),
                    actual: key.len(),
                });
            }
            Ok(Box::new(AesGcmCipher::new(key, nonce)?))
        }
        Algorithm::SM4CTR => Ok(Box::new(Sm4CtrCipher::new(key, nonce)?)),
    }
}
