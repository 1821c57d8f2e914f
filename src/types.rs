// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::cipher::aes::{AES_GCM_NONCE_SIZE, AES_GCM_TAG_SIZE};
use crate::cipher::sm4::{SM4_IV_SIZE, SM4_KEY_SIZE};
use crate::error::CryptoError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    // Authenticated, fixed nonce
    AES128GCM,
    AES192GCM,
    AES256GCM,

    // Unauthenticated stream cipher (GB/T 32907)
    SM4CTR,
}

impl Algorithm {
    pub fn key_size(&self) -> usize {
        match self {
            Algorithm::AES128GCM => 16,
            Algorithm::AES192GCM => 24,
            Algorithm::AES256GCM => 32,
            Algorithm::SM4CTR => SM4_KEY_SIZE,
        }
    }

    /// Nonce length for AES-GCM, iv length for SM4-CTR.
    pub fn nonce_size(&self) -> usize {
        match self {
            Algorithm::AES128GCM | Algorithm::AES192GCM | Algorithm::AES256GCM => {
                AES_GCM_NONCE_SIZE
            }
            Algorithm::SM4CTR => SM4_IV_SIZE,
        }
    }

    /// Bytes appended to every ciphertext.
    pub fn tag_size(&self) -> usize {
        if self.is_authenticated() {
            AES_GCM_TAG_SIZE
        } else {
            0
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            self,
            Self::AES128GCM | Self::AES192GCM | Self::AES256GCM
        )
    }

    #[must_use]
    pub const fn is_national_standard(&self) -> bool {
        matches!(self, Self::SM4CTR)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::AES128GCM => "AES-128-GCM",
            Self::AES192GCM => "AES-192-GCM",
            Self::AES256GCM => "AES-256-GCM",
            Self::SM4CTR => "SM4-CTR",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Algorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "AES128GCM" => Ok(Self::AES128GCM),
            "AES192GCM" => Ok(Self::AES192GCM),
            "AES256GCM" => Ok(Self::AES256GCM),
            "SM4CTR" => Ok(Self::SM4CTR),
            _ => Err(CryptoError::InvalidConfig(format!(
                "unknown algorithm: {s}"
            ))),
        }
    }
}
