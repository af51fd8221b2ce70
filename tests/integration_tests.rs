//! Integration tests for cipherbench.
//!
//! These tests cover the RSA and AES round trips the benchmark cases time,
//! the runner's repetition handling, and a full suite run.

use rand::thread_rng;
use rsa::{RsaPrivateKey, RsaPublicKey};

use cipherbench::{
    // RSA
    decrypt_blocks, encrypt_blocks, max_oaep_block_size, rsa_round_trip, split_into_blocks,
    // AES
    aes_cbc_decrypt, aes_cbc_encrypt, aes_round_trip, AES_BLOCK_SIZE,
    // Runner
    run_case, run_repeated, run_suite,
    // Types
    Algorithm, BenchmarkCase, BenchmarkConfig, Error, DEFAULT_SENTENCE,
};

/// Helper to build a payload of `len` bytes cycling through the default sentence.
fn payload(len: usize) -> Vec<u8> {
    DEFAULT_SENTENCE.bytes().cycle().take(len).collect()
}

/// Helper to build a quick config for runner tests.
fn small_config(cases: Vec<BenchmarkCase>) -> BenchmarkConfig {
    BenchmarkConfig::default()
        .with_cases(cases)
        .with_plaintext(payload(200))
        .with_symmetric_scale(2)
}

// =============================================================================
// RSA Round Trip Tests
// =============================================================================

mod rsa_round_trips {
    use super::*;

    #[test]
    fn test_small_message_single_block() {
        let message = payload(50);
        let block_size = max_oaep_block_size(1024).unwrap();
        assert_eq!(block_size, 62);
        assert_eq!(split_into_blocks(&message, block_size).len(), 1);

        let recovered = rsa_round_trip(1024, &message).unwrap();
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_large_message_multiple_blocks() {
        let message = payload(500);
        let blocks = split_into_blocks(&message, 62);
        assert_eq!(blocks.len(), 9);
        assert!(blocks.iter().all(|b| b.len() <= 62));

        let recovered = rsa_round_trip(1024, &message).unwrap();
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_block_ciphertexts_match_modulus() {
        let mut rng = thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, 1024).unwrap();
        let public_key = RsaPublicKey::from(&private_key);

        let message = payload(130);
        let ciphertexts = encrypt_blocks(&public_key, &message, 62).unwrap();

        assert_eq!(ciphertexts.len(), 3);
        for ciphertext in &ciphertexts {
            assert_eq!(ciphertext.len(), 128);
        }

        let recovered = decrypt_blocks(&private_key, &ciphertexts).unwrap();
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_oversized_block_fails() {
        let mut rng = thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, 1024).unwrap();
        let public_key = RsaPublicKey::from(&private_key);

        // 63 bytes is one more than OAEP/SHA-256 allows for RSA-1024
        let result = encrypt_blocks(&public_key, &payload(63), 63);
        assert!(matches!(result, Err(Error::Crypto(_))));
    }

    #[test]
    fn test_decrypt_with_other_key_fails() {
        let mut rng = thread_rng();
        let alice = RsaPrivateKey::new(&mut rng, 1024).unwrap();
        let bob = RsaPrivateKey::new(&mut rng, 1024).unwrap();

        let ciphertexts =
            encrypt_blocks(&RsaPublicKey::from(&alice), &payload(40), 62).unwrap();
        assert!(decrypt_blocks(&bob, &ciphertexts).is_err());
    }

    #[test]
    fn test_too_small_key_rejected() {
        assert!(matches!(
            rsa_round_trip(512, b"hello"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    #[ignore = "RSA-4096 key generation is slow in debug builds"]
    fn test_rsa4096_default_payload() {
        let config = BenchmarkConfig::default();
        let recovered = rsa_round_trip(4096, &config.plaintext).unwrap();
        assert_eq!(recovered, config.plaintext);
    }

    #[test]
    #[ignore = "RSA-8192 key generation is very slow (~30s release, minutes in debug)"]
    fn test_rsa8192_default_payload() {
        let config = BenchmarkConfig::default();
        assert!(config.cases.contains(&BenchmarkCase::rsa(8192)));

        let recovered = rsa_round_trip(8192, &config.plaintext).unwrap();
        assert_eq!(recovered, config.plaintext);
    }
}

// =============================================================================
// AES Round Trip Tests
// =============================================================================

mod aes_round_trips {
    use super::*;

    #[test]
    fn test_block_multiple_plaintext() {
        let message = payload(AES_BLOCK_SIZE * 4);
        for bits in [128, 192, 256] {
            assert_eq!(aes_round_trip(bits, &message).unwrap(), message);
        }
    }

    #[test]
    fn test_unaligned_plaintext() {
        let message = payload(AES_BLOCK_SIZE * 4 + 5);
        for bits in [128, 192, 256] {
            assert_eq!(aes_round_trip(bits, &message).unwrap(), message);
        }
    }

    #[test]
    fn test_empty_plaintext() {
        assert!(aes_round_trip(128, b"").unwrap().is_empty());
    }

    #[test]
    fn test_default_symmetric_payload() {
        let payload = BenchmarkConfig::default().symmetric_payload();
        assert_eq!(aes_round_trip(256, &payload).unwrap(), payload);
    }

    #[test]
    fn test_fixed_key_and_iv() {
        let key = [0x42u8; 32];
        let iv = [0x24u8; AES_BLOCK_SIZE];
        let message = payload(100);

        let ciphertext = aes_cbc_encrypt(&key, &iv, &message).unwrap();
        assert_eq!(ciphertext.len(), 112);
        assert_ne!(&ciphertext[..100], &message[..]);

        let recovered = aes_cbc_decrypt(&key, &iv, &ciphertext).unwrap();
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_truncated_ciphertext_fails() {
        let key = [1u8; 16];
        let iv = [2u8; AES_BLOCK_SIZE];
        let ciphertext = aes_cbc_encrypt(&key, &iv, &payload(40)).unwrap();

        assert!(aes_cbc_decrypt(&key, &iv, &ciphertext[..ciphertext.len() - 3]).is_err());
    }
}

// =============================================================================
// Runner Tests
// =============================================================================

mod runner {
    use super::*;

    #[test]
    fn test_every_repetition_recorded() {
        for repetitions in [1, 3, 5] {
            let sample = run_repeated(|| Ok(()), repetitions).unwrap();
            assert_eq!(sample.len(), repetitions);
            assert!(sample.values().iter().all(|&s| s >= 0.0));
        }
    }

    #[test]
    fn test_mean_matches_values() {
        let sample = run_repeated(
            || {
                std::thread::sleep(std::time::Duration::from_millis(1));
                Ok(())
            },
            3,
        )
        .unwrap();

        let expected = sample.values().iter().sum::<f64>() / 3.0;
        assert!((sample.mean() - expected).abs() < 1e-12);
        assert!(sample.min() >= 0.001);
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        assert!(matches!(
            run_repeated(|| Ok(()), 0),
            Err(Error::InvalidInput(_))
        ));

        let config = small_config(vec![BenchmarkCase::aes(128)]).with_repetitions(0);
        assert!(matches!(run_suite(&config), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_run_case_aes() {
        let config = small_config(vec![BenchmarkCase::aes(128)]);
        let sample = run_case(&config.cases[0], &config).unwrap();

        assert_eq!(sample.len(), 3);
        assert!(sample.values().iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_run_case_rsa() {
        let config = small_config(vec![BenchmarkCase::rsa(1024)]).with_repetitions(2);
        let sample = run_case(&config.cases[0], &config).unwrap();

        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn test_failing_case_aborts() {
        // Bypasses validation to reach the cryptographic failure path
        let config = small_config(vec![BenchmarkCase::aes(100)]);
        assert!(run_case(&config.cases[0], &config).is_err());
    }

    #[test]
    fn test_suite_order_and_labels() {
        let config = small_config(vec![
            BenchmarkCase::rsa(1024),
            BenchmarkCase::aes(256),
            BenchmarkCase::aes(128),
        ]);

        let table = run_suite(&config).unwrap();

        let labels: Vec<&str> = table.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["RSA 1024", "AES 256", "AES 128"]);
        for (_, sample) in table.iter() {
            assert_eq!(sample.len(), config.repetitions);
        }
    }

    #[test]
    fn test_suite_rejects_unsupported_case() {
        let config = small_config(vec![BenchmarkCase::aes(128), BenchmarkCase::rsa(512)]);
        assert!(matches!(run_suite(&config), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_suite_rejects_duplicate_case() {
        let config = small_config(vec![BenchmarkCase::aes(128), BenchmarkCase::aes(128)]);
        assert!(matches!(run_suite(&config), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_payload_per_algorithm() {
        let config = small_config(vec![]);
        assert_eq!(config.payload_for(Algorithm::Rsa).len(), 200);
        assert_eq!(config.payload_for(Algorithm::Aes).len(), 400);
    }
}
