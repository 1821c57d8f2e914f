// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use symcipher::{new_aes_gcm, new_sm4, CryptoError, ErrorKind};

const PLAINTEXT: &[u8] = b"37045a07-8d63-494e-b2d1-8ded581b675a";

#[test]
fn test_aes_gcm_detects_every_single_bit_flip() {
    let cipher = new_aes_gcm(b"IHDggaKpZcMWMtVbLzRxVbOmX5c0L2F2", b"RDUpW3YNs4Kw").unwrap();
    let ciphertext = cipher.encrypt(PLAINTEXT).unwrap();

    for byte in 0..ciphertext.len() {
        for bit in 0..8 {
            let mut tampered = ciphertext.clone();
            tampered[byte] ^= 1 << bit;
            let err = cipher.decrypt(&tampered).err().unwrap();
            assert_eq!(err, CryptoError::AuthenticationFailed);
            assert_eq!(err.kind(), ErrorKind::Authentication);
        }
    }
}

#[test]
fn test_aes_gcm_detects_truncation_and_extension() {
    let cipher = new_aes_gcm(&[5u8; 16], b"RDUpW3YNs4Kw").unwrap();
    let ciphertext = cipher.encrypt(PLAINTEXT).unwrap();

    let truncated = &ciphertext[..ciphertext.len() - 1];
    assert!(matches!(
        cipher.decrypt(truncated),
        Err(CryptoError::AuthenticationFailed)
    ));

    let mut extended = ciphertext.clone();
    extended.push(0);
    assert!(matches!(
        cipher.decrypt(&extended),
        Err(CryptoError::AuthenticationFailed)
    ));
}

#[test]
fn test_sm4_has_no_integrity_check() {
    let cipher = new_sm4(b"kFkfZiCTSTz0iar2", b"X85xBwRMfmiG11QP").unwrap();
    let mut ciphertext = cipher.encrypt(PLAINTEXT).unwrap();
    ciphertext[0] ^= 0x80;

    let corrupted = cipher.decrypt(&ciphertext).unwrap();
    assert_ne!(corrupted, PLAINTEXT);
    assert_eq!(corrupted[0], PLAINTEXT[0] ^ 0x80);
}
