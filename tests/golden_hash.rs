use serde_json::json;
use text_essence::{essential_hash, Engine, EssenceConfig, HashAlgorithm};

const SAMPLE: &str = "Bb, 1 ب\u{200c}ب، ۱";

fn engine_with(algorithm: &str) -> Engine {
    Engine::from_value(&json!({ "hashAlgorithm": algorithm })).unwrap()
}

#[test]
fn golden_default_sha256_hash() {
    assert_eq!(
        essential_hash(SAMPLE),
        "c97204dda788b45cb7867d72ca2d2c2926865cbec818e4a6dced5dfd643228a9"
    );
}

#[test]
fn golden_sha1_hash() {
    let hash = engine_with("sha1").essential_hash(SAMPLE);
    assert_eq!(hash, "d3866737c23f3bc1ac9cf8842f8304887657aae7");
    assert_eq!(hash.len(), 40);
}

#[test]
fn golden_hashes_for_other_algorithms() {
    let cases = [
        ("md5", "e8b451bf8b16c48a54b4c5a0eb781fbf"),
        ("sha224", "3d54eff5da79ab69b9a6252184fcd039816410004fb74a60beefa308"),
        (
            "sha384",
            "715deac9eabcdbacb3340d7591a8f3794af31fce48f68a95612518f528dc6c5ee431310affa26ad963592261d2afdd8c",
        ),
        (
            "sha512",
            "2c32132835f94156a7f4b6e0eac2332967c96936a77d3f98f6575b201a8092e27a7b9ebdbdbb0edc3d16f4989a7a19792ff12c1b8b993c4feb5640448a216b6b",
        ),
        (
            "sha3-256",
            "d2299e602bc6eff59937c332407b7ce5cc67098a89f369154f91f51b419cb290",
        ),
    ];

    for (algorithm, expected) in cases {
        assert_eq!(engine_with(algorithm).essential_hash(SAMPLE), expected, "{algorithm}");
    }
}

#[test]
fn hash_is_digest_of_essence() {
    let engine = Engine::default();
    assert_eq!(
        engine.essential_hash(SAMPLE),
        HashAlgorithm::Sha256.hex_digest(engine.essence(SAMPLE).as_bytes())
    );
    assert_eq!(essential_hash(SAMPLE), essential_hash("bb1بب۱"));
}

#[test]
fn hash_length_is_twice_digest_len() {
    for algorithm in HashAlgorithm::supported() {
        let engine = Engine::new(EssenceConfig::new(false, *algorithm));
        let hash = engine.essential_hash(SAMPLE);
        assert_eq!(hash.len(), 2 * algorithm.digest_len(), "{algorithm}");
        assert_eq!(hash, hash.to_lowercase());
    }
}

#[test]
fn algorithm_names_are_case_insensitive() {
    assert_eq!(
        engine_with("SHA1").essential_hash(SAMPLE),
        engine_with("sha1").essential_hash(SAMPLE)
    );
}

#[test]
fn diacritics_flag_changes_hash_only_when_marks_present() {
    let stripping = Engine::from_value(&json!({ "removeDiacriticalMarks": true })).unwrap();
    assert_eq!(stripping.essential_hash(SAMPLE), essential_hash(SAMPLE));
    assert_ne!(stripping.essential_hash("Éé"), essential_hash("Éé"));
    assert_eq!(stripping.essential_hash("Éé"), essential_hash("ee"));
}
