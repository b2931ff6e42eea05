use crate::prelude::*;

#[test]
fn external_names() {
    let pairs = [
        ("bingo_molecules", "BINGO_MOLECULE"),
        ("bingo_reactions", "BINGO_REACTION"),
    ];
    for (external, key) in pairs {
        let name = IndexName::from_key(key).unwrap();
        assert_eq!(name.to_string(), external);
        // formatting is pure
        assert_eq!(name.to_string(), name.to_string());
        assert_eq!(name.key().key(), key);
    }
}

#[test]
fn direct_construction() {
    assert_eq!(
        IndexName::new(IndexKey::BingoMolecule).to_string(),
        "bingo_molecules"
    );
    assert_eq!(
        IndexName::new(IndexKey::BingoReaction).to_string(),
        "bingo_reactions"
    );
    assert_eq!(index_name!("BINGO_MOLECULE"), IndexName::BINGO_MOLECULE);
    assert_eq!(index_name!("BINGO_REACTION"), IndexName::BINGO_REACTION);
}

#[test]
fn invalid_key() {
    assert_eq!(
        IndexName::from_key("BINGO_POLYMER"),
        Err(IndexError::InvalidIndexKey("BINGO_POLYMER".to_string()))
    );
    // keys are case sensitive, and the external name isn't a key
    assert!(matches!(
        IndexName::from_key("bingo_molecule"),
        Err(IndexError::InvalidIndexKey(_))
    ));
    assert!(matches!(
        IndexName::from_key("bingo_molecules"),
        Err(IndexError::InvalidIndexKey(_))
    ));
    assert!("".parse::<IndexKey>().is_err());
}

#[test]
#[should_panic(expected = "Unregistered index key BINGO_POLYMER")]
fn macro_panics_on_invalid_key() {
    let _ = index_name!("BINGO_POLYMER");
}

#[test]
fn reverse_lookup() {
    for key in IndexKey::ALL {
        let name = IndexName::new(key);
        assert_eq!(name.to_string().parse::<IndexName>(), Ok(name));
        assert_eq!(name.key(), key);
    }
    assert!(matches!(
        "custom_index".parse::<IndexName>(),
        Err(IndexError::InvalidIndexKey(s)) if s == "custom_index"
    ));
}

#[test]
fn equality() {
    assert_eq!(
        IndexName::from_key("BINGO_MOLECULE").unwrap(),
        IndexName::new(IndexKey::BingoMolecule)
    );
    assert_ne!(IndexName::BINGO_MOLECULE, IndexName::BINGO_REACTION);
    let set = IndexKey::ALL
        .into_iter()
        .chain(IndexKey::ALL)
        .map(IndexName::from)
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(set.len(), 2);
}

#[test]
fn key_kind_mapping() {
    for key in IndexKey::ALL {
        assert_eq!(IndexKey::for_kind(key.record_kind()), key);
    }
    assert_eq!(IndexKey::BingoMolecule.to_string(), "BINGO_MOLECULE");
}

#[test]
fn error_messages() {
    assert_eq!(
        IndexError::InvalidIndexKey("X".to_string()).to_string(),
        "\"X\" is not a registered index key"
    );
    assert_eq!(
        IndexError::UnsupportedRecordKind("polymer".to_string()).to_string(),
        "no index is registered for records of kind \"polymer\""
    );
}
