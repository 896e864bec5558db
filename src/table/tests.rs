use super::*;
use crate::chain::RESERVED_KEY;
use crate::infrastructure::hash::HashAlgorithm;
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};

// With djb2 and five buckets:
//   bucket 0: bob, grace
//   bucket 3: carol, dan, frank
//   bucket 4: alice, erin, heidi, ivan

fn table() -> StringTable {
    StringTable::new(DEFAULT_TABLE_SIZE).unwrap()
}

#[test]
fn test_table_create_empty() {
    let table = table();

    assert_eq!(table.size(), 5);
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert_eq!(table.hash_algorithm(), HashAlgorithm::Djb2);

    for index in 0..table.size() {
        assert_eq!(table.print_bucket(index).unwrap(), "Empty list.");
    }
}

#[test]
fn test_table_create_zero_size() {
    assert_eq!(
        StringTable::new(0).unwrap_err(),
        TableError::InvalidTableSize(0)
    );
    assert!(StringTableBuilder::new().size(0).try_build().is_err());
}

#[test]
fn test_table_round_trip() {
    let mut table = table();

    let bucket = table.insert("dan").unwrap();
    assert_eq!(bucket, 3);

    let found = table.find("dan").unwrap();
    assert_eq!(found, Lookup { bucket: 3, key: "dan" });
    assert_eq!(table.len(), 1);

    assert_eq!(table.remove("dan").unwrap(), "dan");
    assert_eq!(
        table.find("dan").unwrap_err(),
        TableError::NotFound("dan".to_string())
    );
    assert!(table.is_empty());
}

#[test]
fn test_table_find_before_insert() {
    let table = table();
    assert_eq!(
        table.find("carol").unwrap_err(),
        TableError::NotFound("carol".to_string())
    );
    assert_eq!(table.contains("carol"), Ok(false));
}

#[test]
fn test_table_remove_missing_key() {
    let mut table = table();
    table.insert("alice").unwrap();

    assert_eq!(
        table.remove("erin").unwrap_err(),
        TableError::NotFound("erin".to_string())
    );
    assert_eq!(table.len(), 1);
    assert_eq!(table.print_bucket(4).unwrap(), "alice");
}

#[test]
fn test_table_reserved_marker_rejected() {
    let mut table = table();
    table.insert("judy").unwrap();
    let before = table.to_string();

    let rejected = TableError::ReservedKeyRejected(RESERVED_KEY.to_string());
    assert_eq!(table.insert(RESERVED_KEY).unwrap_err(), rejected);
    assert_eq!(table.find(RESERVED_KEY).unwrap_err(), rejected);
    assert_eq!(table.remove(RESERVED_KEY).unwrap_err(), rejected);
    assert_eq!(table.contains(RESERVED_KEY).unwrap_err(), rejected);

    assert_eq!(table.len(), 1);
    assert_eq!(table.to_string(), before);
}

#[test]
fn test_table_marker_lookalikes_are_keys() {
    let mut table = table();

    for key in ["sentinel", "SENTINEL ", "SENTINE", "SENTINELS"] {
        table.insert(key).unwrap();
        assert_eq!(table.find(key).unwrap().key, key);
    }
    assert_eq!(table.len(), 4);
}

#[test]
fn test_table_newest_first_within_bucket() {
    let mut table = table();

    assert_eq!(table.insert("alice").unwrap(), 4);
    assert_eq!(table.insert("erin").unwrap(), 4);
    assert_eq!(table.print_bucket(4).unwrap(), "erin alice");

    table.insert("heidi").unwrap();
    assert_eq!(table.print_bucket(4).unwrap(), "heidi erin alice");
}

#[test]
fn test_table_bucket_determinism() {
    let table = table();

    for key in ["alice", "bob", "carol", "dan", "erin"] {
        assert_eq!(table.bucket_of(key), table.bucket_of(key));
        assert_eq!(table.bucket_of(key), HashAlgorithm::Djb2.bucket(key, 5));
    }
    assert_eq!(table.bucket_of("alice"), table.bucket_of("ivan"));
}

#[test]
fn test_table_colliding_keys_compared_exactly() {
    let mut table = table();
    table.insert("alice").unwrap();
    table.insert("ivan").unwrap();

    assert_eq!(table.find("alice").unwrap(), Lookup { bucket: 4, key: "alice" });
    assert_eq!(table.find("ivan").unwrap(), Lookup { bucket: 4, key: "ivan" });

    // Same bucket, never inserted
    assert!(matches!(table.find("erin"), Err(TableError::NotFound(_))));

    table.remove("alice").unwrap();
    assert_eq!(table.print_bucket(4).unwrap(), "ivan");
}

#[test]
fn test_table_remove_isolated_to_bucket() {
    let mut table = table();
    for key in ["bob", "grace", "carol", "dan", "alice", "judy"] {
        table.insert(key).unwrap();
    }

    let others: Vec<String> = [0, 2, 4]
        .iter()
        .map(|&i| table.print_bucket(i).unwrap())
        .collect();

    table.remove("carol").unwrap();
    table.remove("dan").unwrap();

    assert_eq!(table.print_bucket(3).unwrap(), "Empty list.");
    let after: Vec<String> = [0, 2, 4]
        .iter()
        .map(|&i| table.print_bucket(i).unwrap())
        .collect();
    assert_eq!(others, after);
}

#[test]
fn test_table_duplicate_keys_shadow() {
    let mut table = table();
    table.insert("bob").unwrap();
    table.insert("bob").unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.print_bucket(0).unwrap(), "bob bob");

    table.remove("bob").unwrap();
    assert!(table.contains("bob").unwrap());
    table.remove("bob").unwrap();
    assert!(!table.contains("bob").unwrap());
}

#[test]
fn test_table_display() {
    let mut table = table();
    table.insert("alice").unwrap();
    table.insert("bob").unwrap();
    table.insert("erin").unwrap();

    let expected = "0 = bob\n\
                    1 = Empty list.\n\
                    2 = Empty list.\n\
                    3 = Empty list.\n\
                    4 = erin alice";
    assert_eq!(table.to_string(), expected);
}

#[test]
fn test_table_bucket_out_of_range() {
    let table = table();
    assert_eq!(
        table.print_bucket(5).unwrap_err(),
        TableError::BucketOutOfRange(5)
    );
    assert!(table.bucket(4).is_ok());
}

#[test]
fn test_table_destroy_empty_and_populated() {
    table().destroy();

    let mut table = table();
    for i in 0..100 {
        table.insert(&format!("name{}", i)).unwrap();
    }
    assert_eq!(table.len(), 100);
    table.destroy();
}

#[test]
fn test_table_clear() {
    let mut table = table();
    table.insert("alice").unwrap();
    table.insert("bob").unwrap();

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.keys().count(), 0);

    table.insert("alice").unwrap();
    assert_eq!(table.find("alice").unwrap().bucket, 4);
}

#[test]
fn test_table_builder_hash_algorithms() {
    for algo in HashAlgorithm::ALL {
        let mut table = StringTableBuilder::new()
            .size(7)
            .hash(algo)
            .try_build()
            .unwrap();
        assert_eq!(table.size(), 7);
        assert_eq!(table.hash_algorithm(), algo);

        let bucket = table.insert("carol").unwrap();
        assert_eq!(bucket, algo.bucket("carol", 7));
        assert_eq!(table.find("carol").unwrap().bucket, bucket);
    }
}

#[test]
fn test_table_randomized_round_trip() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    let mut table = StringTable::new(13).unwrap();
    let mut inserted = Vec::new();

    for _ in 0..500 {
        let len = rng.gen_range(1..20);
        let key: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        table.insert(&key).unwrap();
        inserted.push(key);
    }
    assert_eq!(table.len(), inserted.len());

    for key in &inserted {
        assert!(table.contains(key).unwrap());
    }

    for key in &inserted {
        table.remove(key).unwrap();
    }
    assert!(table.is_empty());
    for (_, chain) in table.buckets() {
        assert!(chain.is_empty());
    }
}
