use super::*;

#[test]
fn test_djb2_known_values() {
    // Seed value for the empty string, then hash * 33 + c per byte
    assert_eq!(djb2_hash(""), 5381);
    assert_eq!(djb2_hash("a"), 5381 * 33 + 97);
    assert_eq!(djb2_hash("bob"), 193487480);
    assert_eq!(djb2_hash("alice"), 210706582979);
}

#[test]
fn test_djb2_wraps_on_overflow() {
    // Long enough to overflow 64 bits many times over
    let s = "hello world";
    assert_eq!(djb2_hash(s), 13876786532495509697);

    let long = "x".repeat(4096);
    assert_eq!(djb2_hash(&long), djb2_hash(&long));
}

#[test]
fn test_hash_string_consistency() {
    // Test that the same string always produces the same hash
    let s = "hello world";
    let hash1 = hash_string(s);
    let hash2 = hash_string(s);
    let hash3 = hash_string(s);

    assert_eq!(hash1, hash2);
    assert_eq!(hash2, hash3);

    // hash_string should use djb2_hash by default
    assert_eq!(hash1, djb2_hash(s));
}

#[test]
fn test_hash_different_strings() {
    let s1 = "hello";
    let s2 = "world";
    let s3 = "hello world";

    for algo in HashAlgorithm::ALL {
        assert_ne!(algo.hash(s1), algo.hash(s2), "{}", algo);
        assert_ne!(algo.hash(s2), algo.hash(s3), "{}", algo);
        assert_ne!(algo.hash(s1), algo.hash(s3), "{}", algo);
    }
}

#[test]
fn test_fnv1a_empty_string_is_offset_basis() {
    assert_eq!(fnv1a_hash(""), 14695981039346656037);
}

#[test]
fn test_bucket_in_range() {
    let keys = ["alice", "bob", "carol", "dan", "erin", "", "SENTINEL"];

    for algo in HashAlgorithm::ALL {
        for size in [1, 2, 5, 7, 64] {
            for key in keys {
                let bucket = algo.bucket(key, size);
                assert!(bucket < size);
                assert_eq!(bucket, algo.bucket(key, size));
            }
        }
    }
}

#[test]
fn test_djb2_buckets_for_five() {
    assert_eq!(HashAlgorithm::Djb2.bucket("alice", 5), 4);
    assert_eq!(HashAlgorithm::Djb2.bucket("erin", 5), 4);
    assert_eq!(HashAlgorithm::Djb2.bucket("bob", 5), 0);
    assert_eq!(HashAlgorithm::Djb2.bucket("grace", 5), 0);
    assert_eq!(HashAlgorithm::Djb2.bucket("dan", 5), 3);
}

#[test]
fn test_algorithm_parse_and_display() {
    for algo in HashAlgorithm::ALL {
        assert_eq!(algo.to_string().parse::<HashAlgorithm>(), Ok(algo));
    }
    assert_eq!("XXH64".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Xxh64));
    assert!("murmur".parse::<HashAlgorithm>().is_err());
    assert_eq!(HashAlgorithm::default(), HashAlgorithm::Djb2);
}

#[test]
fn test_algorithm_serde_names() {
    let json = serde_json::to_string(&HashAlgorithm::Fnv1a).unwrap();
    assert_eq!(json, "\"fnv1a\"");

    let algo: HashAlgorithm = serde_json::from_str("\"crc32\"").unwrap();
    assert_eq!(algo, HashAlgorithm::Crc32);
}
