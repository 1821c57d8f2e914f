// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use symcipher::{Algorithm, CipherConfig, CryptoError};

#[test]
fn test_config_from_json() {
    let json = format!(
        r#"{{"algorithm": "SM4CTR", "key": "{}", "nonce": "{}"}}"#,
        hex::encode(b"kFkfZiCTSTz0iar2"),
        hex::encode(b"X85xBwRMfmiG11QP")
    );
    let config: CipherConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config.algorithm, Algorithm::SM4CTR);

    let cipher = config.build().unwrap();
    let ciphertext = cipher.encrypt(b"configured").unwrap();
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"configured");
}

#[test]
fn test_config_serializes_hex() {
    let config = CipherConfig::new(Algorithm::AES128GCM, &[0xab; 16], &[0x01; 12]);
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["algorithm"], "AES128GCM");
    assert_eq!(value["key"], "ab".repeat(16));
    assert_eq!(value["nonce"], "01".repeat(12));

    let restored: CipherConfig = serde_json::from_value(value).unwrap();
    assert_eq!(
        restored.build().unwrap().encrypt(b"x").unwrap(),
        config.build().unwrap().encrypt(b"x").unwrap()
    );
}

#[test]
fn test_config_rejects_bad_hex() {
    let json = r#"{"algorithm": "AES256GCM", "key": "xyz", "nonce": "00"}"#;
    assert!(serde_json::from_str::<CipherConfig>(json).is_err());
}

#[test]
fn test_config_key_size_must_match_algorithm() {
    let config = CipherConfig::new(Algorithm::AES128GCM, &[0u8; 32], &[0u8; 12]);
    assert_eq!(
        config.build().err().unwrap(),
        CryptoError::InvalidKeySize {
            expected: 16,
            actual: 32
        }
    );
}
