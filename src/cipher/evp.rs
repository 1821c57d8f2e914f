// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! One-shot OpenSSL EVP cipher sessions.
//!
//! An [`EvpSession`] owns exactly one `EVP_CIPHER_CTX` for the duration of a
//! single encrypt or decrypt call. The context is freed when the session is
//! dropped, so every exit path (success, early `?` return, panic unwinding)
//! releases it exactly once.

use crate::error::CryptoError;
use log::trace;
use openssl::cipher::CipherRef;
use openssl::cipher_ctx::CipherCtx;
use openssl::error::ErrorStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn label(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }

    /// Wraps an engine failure in the error matching this direction.
    fn failure(&self, stage: &str, err: &ErrorStack) -> CryptoError {
        let msg = format!("{stage}: {err}");
        match self {
            Direction::Encrypt => CryptoError::EncryptionFailed(msg),
            Direction::Decrypt => CryptoError::DecryptionFailed(msg),
        }
    }
}

pub struct EvpSession {
    ctx: CipherCtx,
    direction: Direction,
    block_size: usize,
}

impl EvpSession {
    /// Allocates a context, selects `cipher` for `direction`, then binds the
    /// key and iv in a second init step.
    ///
    /// `block_size` is the underlying block cipher's block length; output
    /// buffers are over-allocated by that much.
    pub fn open(
        direction: Direction,
        cipher: &CipherRef,
        key: &[u8],
        iv: &[u8],
        block_size: usize,
    ) -> crate::error::Result<Self> {
        let ctx = CipherCtx::new()
            .map_err(|e| direction.failure("allocate cipher context", &e))?;
        trace!("EVP {} context acquired", direction.label());

        let mut session = Self {
            ctx,
            direction,
            block_size,
        };

        session
            .init(Some(cipher), None, None)
            .map_err(|e| direction.failure("init cipher context", &e))?;
        session
            .init(None, Some(key), Some(iv))
            .map_err(|e| direction.failure("bind key and iv", &e))?;

        Ok(session)
    }

    fn init(
        &mut self,
        cipher: Option<&CipherRef>,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
    ) -> Result<(), ErrorStack> {
        match self.direction {
            Direction::Encrypt => self.ctx.encrypt_init(cipher, key, iv),
            Direction::Decrypt => self.ctx.decrypt_init(cipher, key, iv),
        }
    }

    /// Runs `input` through update and final, returning both outputs joined
    /// and truncated to the lengths the engine reported.
    pub fn run(mut self, input: &[u8]) -> crate::error::Result<Vec<u8>> {
        let direction = self.direction;

        let mut output = vec![0u8; input.len() + self.block_size];
        let written = self
            .ctx
            .cipher_update(input, Some(&mut output))
            .map_err(|e| direction.failure("cipher update", &e))?;

        let mut tail = vec![0u8; self.block_size];
        let flushed = self
            .ctx
            .cipher_final(&mut tail)
            .map_err(|e| direction.failure("cipher final", &e))?;

        output.truncate(written);
        output.extend_from_slice(&tail[..flushed]);
        Ok(output)
    }
}

impl Drop for EvpSession {
    fn drop(&mut self) {
        // The context itself is freed by `CipherCtx`'s own Drop, which runs after this.
        trace!("EVP {} context released", self.direction.label());
    }
}
