// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! AES-GCM with a nonce fixed at construction.
//!
//! # Nonce reuse
//!
//! Every [`AesGcmCipher::encrypt`] call on one instance uses the same nonce, so
//! encryption is deterministic: equal plaintexts give equal ciphertexts. GCM's
//! confidentiality and integrity guarantees assume a nonce is used once per
//! key. Anyone who sees two ciphertexts sealed by the same instance learns the
//! XOR of the plaintexts and can forge tags. Callers that need those
//! guarantees must build a fresh instance with a fresh nonce per message.

use crate::cipher::provider::Cipher;
use crate::error::{CryptoError, Result};
use crate::types::Algorithm;
use aes_gcm::aead::consts::U12;
use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::{Aead, AeadCore, AeadInPlace, KeyInit};
use aes_gcm::aes::{Aes128, Aes192, Aes256};
use aes_gcm::{AesGcm, Nonce};
use log::debug;

/// Nonce length required by the GCM construction used here.
pub const AES_GCM_NONCE_SIZE: usize = <AesGcm<Aes128, U12> as AeadCore>::NonceSize::USIZE;

/// Authentication tag appended to every ciphertext.
pub const AES_GCM_TAG_SIZE: usize = <AesGcm<Aes128, U12> as AeadCore>::TagSize::USIZE;

/// AES key length enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesKeyLength {
    Aes128,
    Aes192,
    Aes256,
}

impl AesKeyLength {
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(AesKeyLength::Aes128),
            24 => Ok(AesKeyLength::Aes192),
            32 => Ok(AesKeyLength::Aes256),
            other => Err(CryptoError::InvalidKeyLength(other)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            AesKeyLength::Aes128 => Algorithm::AES128GCM,
            AesKeyLength::Aes192 => Algorithm::AES192GCM,
            AesKeyLength::Aes256 => Algorithm::AES256GCM,
        }
    }
}

enum GcmEngine {
    Aes128(AesGcm<Aes128, U12>),
    Aes192(AesGcm<Aes192, U12>),
    Aes256(AesGcm<Aes256, U12>),
}

macro_rules! with_engine {
    ($engine:expr, $gcm:ident => $body:expr) => {
        match $engine {
            GcmEngine::Aes128($gcm) => $body,
            GcmEngine::Aes192($gcm) => $body,
            GcmEngine::Aes256($gcm) => $body,
        }
    };
}

impl GcmEngine {
    fn new(key_length: AesKeyLength, key: &[u8]) -> Result<Self> {
        let init_err = || CryptoError::CipherInit(format!("cannot build {}", key_length.algorithm()));
        Ok(match key_length {
            AesKeyLength::Aes128 => GcmEngine::Aes128(
                AesGcm::<Aes128, U12>::new_from_slice(key).map_err(|_| init_err())?,
            ),
            AesKeyLength::Aes192 => GcmEngine::Aes192(
                AesGcm::<Aes192, U12>::new_from_slice(key).map_err(|_| init_err())?,
            ),
            AesKeyLength::Aes256 => GcmEngine::Aes256(
                AesGcm::<Aes256, U12>::new_from_slice(key).map_err(|_| init_err())?,
            ),
        })
    }
}

/// AES-GCM cipher bound to one key and one nonce for its whole lifetime.
pub struct AesGcmCipher {
    engine: GcmEngine,
    nonce: Nonce<U12>,
    key_length: AesKeyLength,
}

impl AesGcmCipher {
    /// Builds the cipher. The key picks AES-128, AES-192 or AES-256 by its
    /// length; the nonce must be exactly [`AES_GCM_NONCE_SIZE`] bytes.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        let key_length = AesKeyLength::from_key_len(key.len())?;
        let engine = GcmEngine::new(key_length, key)?;

        if nonce.len() != AES_GCM_NONCE_SIZE {
            return Err(CryptoError::InvalidNonceSize {
                expected: AES_GCM_NONCE_SIZE,
                actual: nonce.len(),
            });
        }

        debug!("{} cipher constructed", key_length.algorithm());

        Ok(Self {
            engine,
            nonce: Nonce::<U12>::clone_from_slice(nonce),
            key_length,
        })
    }
}

impl Cipher for AesGcmCipher {
    /// Returns `ciphertext || tag`, `plaintext.len() + 16` bytes.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(plaintext.len() + AES_GCM_TAG_SIZE);
        buffer.extend_from_slice(plaintext);

        with_engine!(&self.engine, gcm => gcm.encrypt_in_place(&self.nonce, b"", &mut buffer))
            .map_err(|_| CryptoError::EncryptionFailed("AES-GCM seal failed".into()))?;

        Ok(buffer)
    }

    /// Verifies the trailing tag before releasing any plaintext.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        with_engine!(&self.engine, gcm => gcm.decrypt(&self.nonce, ciphertext))
            .map_err(|_| CryptoError::AuthenticationFailed)
    }

    fn algorithm(&self) -> Algorithm {
        self.key_length.algorithm()
    }
}

impl std::fmt::Debug for AesGcmCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesGcmCipher")
            .field("algorithm", &self.key_length.algorithm())
            .finish_non_exhaustive()
    }
}
