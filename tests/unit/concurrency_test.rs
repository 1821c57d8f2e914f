// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::thread;
use symcipher::{new_aes_gcm, new_sm4, Cipher};

fn hammer(cipher: Arc<dyn Cipher>) {
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let cipher = Arc::clone(&cipher);
            thread::spawn(move || {
                for round in 0..64 {
                    let plaintext = format!("worker-{worker}-round-{round}").into_bytes();
                    let ciphertext = cipher.encrypt(&plaintext).unwrap();
                    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_shared_aes_gcm_instance() {
    let cipher: Arc<dyn Cipher> =
        Arc::from(new_aes_gcm(b"IHDggaKpZcMWMtVbLzRxVbOmX5c0L2F2", b"RDUpW3YNs4Kw").unwrap());
    hammer(cipher);
}

#[test]
fn test_shared_sm4_instance() {
    let cipher: Arc<dyn Cipher> =
        Arc::from(new_sm4(b"kFkfZiCTSTz0iar2", b"X85xBwRMfmiG11QP").unwrap());
    hammer(cipher);
}

#[test]
fn test_concurrent_results_match_sequential() {
    let cipher: Arc<dyn Cipher> =
        Arc::from(new_sm4(b"kFkfZiCTSTz0iar2", b"X85xBwRMfmiG11QP").unwrap());
    let expected = cipher.encrypt(b"same input everywhere").unwrap();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                assert_eq!(cipher.encrypt(b"same input everywhere").unwrap(), expected);
            });
        }
    });
}
