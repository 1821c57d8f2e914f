// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key length: {0} (AES accepts 16, 24 or 32 bytes)")]
    InvalidKeyLength(usize),

    #[error("Invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("Invalid nonce size: expected {expected}, got {actual}")]
    InvalidNonceSize { expected: usize, actual: usize },

    #[error("Invalid iv size: expected {expected}, got {actual}")]
    InvalidIvSize { expected: usize, actual: usize },

    #[error("Cipher initialization failed: {0}")]
    CipherInit(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Message authentication failed")]
    AuthenticationFailed,
}

/// Coarse classification of a [`CryptoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad key, nonce or iv, or an engine that refused to build the cipher.
    /// Fix the inputs; retrying will not help.
    Construction,
    /// The engine failed while running an encrypt or decrypt call.
    Operation,
    /// The AEAD tag did not verify.
    Authentication,
}

impl CryptoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::InvalidKeyLength(_)
            | CryptoError::InvalidKeySize { .. }
            | CryptoError::InvalidNonceSize { .. }
            | CryptoError::InvalidIvSize { .. }
            | CryptoError::CipherInit(_)
            | CryptoError::InvalidConfig(_) => ErrorKind::Construction,
            CryptoError::EncryptionFailed(_) | CryptoError::DecryptionFailed(_) => {
                ErrorKind::Operation
            }
            CryptoError::AuthenticationFailed => ErrorKind::Authentication,
        }
    }

    pub fn is_authentication_failure(&self) -> bool {
        self.kind() == ErrorKind::Authentication
    }
}

pub type Result<T> = std::result::Result<T, CryptoError>;
