//! Index names used for storing records in a search backend
use crate::record::{ChemicalRecord, MoleculeRecord, ReactionRecord, RecordKind};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use tracing::*;

/// Build an [`IndexName`] from its key text, panicking if the key isn't registered
#[macro_export]
macro_rules! index_name {
    ($key:literal) => {
        $crate::index::IndexName::from_key($key)
            .expect(concat!("Unregistered index key ", $key))
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum IndexError {
    #[error("{0:?} is not a registered index key")]
    InvalidIndexKey(String),
    #[error("no index is registered for records of kind {0:?}")]
    UnsupportedRecordKind(String),
}

/// The registered index keys. There's exactly one index per record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndexKey {
    BingoMolecule,
    BingoReaction,
}
impl IndexKey {
    pub const ALL: [Self; 2] = [Self::BingoMolecule, Self::BingoReaction];

    /// The constant name of this key
    pub const fn key(self) -> &'static str {
        match self {
            Self::BingoMolecule => "BINGO_MOLECULE",
            Self::BingoReaction => "BINGO_REACTION",
        }
    }
    /// The name the search backend knows this index by
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BingoMolecule => "bingo_molecules",
            Self::BingoReaction => "bingo_reactions",
        }
    }
    pub const fn record_kind(self) -> RecordKind {
        match self {
            Self::BingoMolecule => RecordKind::Molecule,
            Self::BingoReaction => RecordKind::Reaction,
        }
    }
    pub const fn for_kind(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Molecule => Self::BingoMolecule,
            RecordKind::Reaction => Self::BingoReaction,
        }
    }
}
impl Display for IndexKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
impl FromStr for IndexKey {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| IndexError::InvalidIndexKey(s.to_string()))
    }
}

/// Name of the index a record is stored in.
///
/// This always holds one of the registered keys, so formatting it can't fail. The `Display` impl
/// gives the backend-facing name, and `FromStr` goes the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexName(IndexKey);
impl IndexName {
    pub const BINGO_MOLECULE: Self = Self(IndexKey::BingoMolecule);
    pub const BINGO_REACTION: Self = Self(IndexKey::BingoReaction);

    pub const fn new(key: IndexKey) -> Self {
        Self(key)
    }
    /// Construct from the text of a key constant, e.g. `"BINGO_MOLECULE"`
    pub fn from_key(key: &str) -> Result<Self, IndexError> {
        key.parse().map(Self)
    }
    pub const fn key(self) -> IndexKey {
        self.0
    }
    pub const fn as_str(self) -> &'static str {
        self.0.as_str()
    }
    pub const fn for_kind(kind: RecordKind) -> Self {
        Self(IndexKey::for_kind(kind))
    }

    /// Get the index that a record should be stored in
    pub fn get_index_name(record: &ChemicalRecord) -> Self {
        let kind = record.kind();
        let name = Self::for_kind(kind);
        trace!(%kind, index = name.as_str(), "resolved index");
        name
    }

    /// Resolve from an untyped kind tag, like the ones stored alongside documents.
    ///
    /// Unlike the typed path, this can see kinds with no index, and those are rejected.
    pub fn for_kind_str(kind: &str) -> Result<Self, IndexError> {
        match kind.parse::<RecordKind>() {
            Ok(kind) => Ok(Self::for_kind(kind)),
            Err(_) => {
                debug!(kind, "refusing to route unknown record kind");
                Err(IndexError::UnsupportedRecordKind(kind.to_string()))
            }
        }
    }
}
impl From<IndexKey> for IndexName {
    fn from(value: IndexKey) -> Self {
        Self(value)
    }
}
impl Display for IndexName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
/// Looks up the backend-facing name, so `"bingo_molecules".parse()` gives `BINGO_MOLECULE`
impl FromStr for IndexName {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .map(Self)
            .ok_or_else(|| IndexError::InvalidIndexKey(s.to_string()))
    }
}

/// Anything that knows which kind of record it is can be routed to an index.
pub trait Indexed {
    fn record_kind(&self) -> RecordKind;

    fn index_name(&self) -> IndexName {
        IndexName::for_kind(self.record_kind())
    }
}
impl Indexed for RecordKind {
    fn record_kind(&self) -> RecordKind {
        *self
    }
}
impl Indexed for MoleculeRecord {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Molecule
    }
}
impl Indexed for ReactionRecord {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Reaction
    }
}
impl Indexed for ChemicalRecord {
    fn record_kind(&self) -> RecordKind {
        self.kind()
    }
    fn index_name(&self) -> IndexName {
        IndexName::get_index_name(self)
    }
}

/// Free-function form of [`IndexName::get_index_name`]
pub fn get_index_name(record: &ChemicalRecord) -> IndexName {
    IndexName::get_index_name(record)
}
