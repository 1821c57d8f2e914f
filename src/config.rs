// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::cipher::provider::{new_cipher, Cipher};
use crate::error::{CryptoError, Result};
use crate::memory::SecretBytes;
use crate::types::Algorithm;
use serde::{Deserialize, Serialize};

/// Serializable description of a cipher instance.
///
/// Key and nonce travel as hex strings, e.g.
/// `{"algorithm": "SM4CTR", "key": "6b466b...", "nonce": "583835..."}`.
/// For SM4-CTR `nonce` holds the counter iv.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherConfig {
    pub algorithm: Algorithm,
    pub key: SecretBytes,
    pub nonce: SecretBytes,
}

impl CipherConfig {
    pub fn new(algorithm: Algorithm, key: &[u8], nonce: &[u8]) -> Self {
        Self {
            algorithm,
            key: SecretBytes::from_slice(key),
            nonce: SecretBytes::from_slice(nonce),
        }
    }

    /// Parses hex-encoded key and nonce.
    pub fn from_hex(algorithm: Algorithm, key_hex: &str, nonce_hex: &str) -> Result<Self> {
        let key = SecretBytes::from_hex(key_hex)
            .map_err(|e| CryptoError::InvalidConfig(format!("key is not valid hex: {e}")))?;
        let nonce = SecretBytes::from_hex(nonce_hex)
            .map_err(|e| CryptoError::InvalidConfig(format!("nonce is not valid hex: {e}")))?;
        Ok(Self {
            algorithm,
            key,
            nonce,
        })
    }

    pub fn build(&self) -> Result<Box<dyn Cipher>> {
        new_cipher(self.algorithm, self.key.as_bytes(), self.nonce.as_bytes())
    }
}
