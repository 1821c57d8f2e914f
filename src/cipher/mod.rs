// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod aes;
pub mod evp;
pub mod provider;
pub mod sm4;


pub use aes::{AesGcmCipher, AesKeyLength, AES_GCM_NONCE_SIZE, AES_GCM_TAG_SIZE};
pub use provider::{new_cipher, Cipher};
pub use sm4::{Sm4CtrCipher, SM4_BLOCK_SIZE, SM4_IV_SIZE, SM4_KEY_SIZE};
