// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! SM4 in counter mode through OpenSSL's EVP interface.
//!
//! CTR is unauthenticated. Decrypting a tampered ciphertext succeeds and
//! yields tampered plaintext; callers that store or transmit SM4-CTR output
//! must authenticate it themselves.

use crate::cipher::evp::{Direction, EvpSession};
use crate::cipher::provider::Cipher;
use crate::error::{CryptoError, Result};
use crate::memory::SecretBytes;
use crate::types::Algorithm;
use log::debug;
use openssl::cipher::Cipher as EvpCipher;

pub const SM4_KEY_SIZE: usize = 16;
pub const SM4_IV_SIZE: usize = 16;
pub const SM4_BLOCK_SIZE: usize = 16;

/// SM4-CTR cipher. Holds only the key and iv; each call opens its own
/// engine context, so instances are freely shareable across threads.
#[derive(Clone)]
pub struct Sm4CtrCipher {
    key: SecretBytes,
    iv: SecretBytes,
}

impl Sm4CtrCipher {
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        if key.len() != SM4_KEY_SIZE {
            return Err(CryptoError::InvalidKeySize {
                expected: SM4_KEY_SIZE,
                actual: key.len(),
            });
        }

        if iv.len() != SM4_IV_SIZE {
            return Err(CryptoError::InvalidIvSize {
                expected: SM4_IV_SIZE,
                actual: iv.len(),
            });
        }

        debug!("{} cipher constructed", Algorithm::SM4CTR);

        Ok(Self {
            key: SecretBytes::from_slice(key),
            iv: SecretBytes::from_slice(iv),
        })
    }

    fn apply(&self, direction: Direction, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        EvpSession::open(
            direction,
            EvpCipher::sm4_ctr(),
            self.key.as_bytes(),
            self.iv.as_bytes(),
            SM4_BLOCK_SIZE,
        )?
        .run(input)
    }
}

impl Cipher for Sm4CtrCipher {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.apply(Direction::Encrypt, plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.apply(Direction::Decrypt, ciphertext)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::SM4CTR
    }
}

impl std::fmt::Debug for Sm4CtrCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sm4CtrCipher").finish_non_exhaustive()
    }
}
