//! Records handed over from the chemistry side to be indexed.
//!
//! Structures are kept as the text they came in as, tagged with their format. Nothing here parses
//! them; the format only decides which kind of record a structure can belong to.
use crate::index::IndexName;
use ahash::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use tracing::*;

/// Which kind of entity a record holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    Molecule,
    Reaction,
}
impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Molecule => "molecule",
            Self::Reaction => "reaction",
        }
    }
}
impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unknown record kind {0:?}")]
pub struct UnknownRecordKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("molecule") {
            Ok(Self::Molecule)
        } else if s.eq_ignore_ascii_case("reaction") {
            Ok(Self::Reaction)
        } else {
            Err(UnknownRecordKind(s.to_string()))
        }
    }
}

/// Format of a structure's source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureFormat {
    Smiles,
    Molfile,
    ReactionSmiles,
    Rxnfile,
}
impl StructureFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smiles => "smiles",
            Self::Molfile => "molfile",
            Self::ReactionSmiles => "reaction-smiles",
            Self::Rxnfile => "rxnfile",
        }
    }
    /// The only kind of record a structure in this format can describe
    pub fn record_kind(self) -> RecordKind {
        match self {
            Self::Smiles | Self::Molfile => RecordKind::Molecule,
            Self::ReactionSmiles | Self::Rxnfile => RecordKind::Reaction,
        }
    }
}
impl Display for StructureFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unparsed structure text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Structure {
    pub format: StructureFormat,
    pub text: String,
}
impl Structure {
    pub fn new(format: StructureFormat, text: impl Into<String>) -> Self {
        Self {
            format,
            text: text.into(),
        }
    }
    pub fn smiles(text: impl Into<String>) -> Self {
        Self::new(StructureFormat::Smiles, text)
    }
    pub fn molfile(text: impl Into<String>) -> Self {
        Self::new(StructureFormat::Molfile, text)
    }
    pub fn reaction_smiles(text: impl Into<String>) -> Self {
        Self::new(StructureFormat::ReactionSmiles, text)
    }
    pub fn rxnfile(text: impl Into<String>) -> Self {
        Self::new(StructureFormat::Rxnfile, text)
    }
    pub fn kind(&self) -> RecordKind {
        self.format.record_kind()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum RecordError {
    #[error("a record needs a structure")]
    MissingStructure,
    #[error("the structure text is blank")]
    EmptyStructure,
    #[error("a {format} structure can't be used for a {kind} record")]
    FormatMismatch {
        format: StructureFormat,
        kind: RecordKind,
    },
}

/// Data shared by both kinds of record
#[derive(Debug, Clone, PartialEq, Eq)]
struct RecordData {
    id: Option<String>,
    name: Option<String>,
    structure: Structure,
    sim_fingerprint: Vec<u32>,
    sub_fingerprint: Vec<u32>,
    custom: HashMap<String, String>,
}

macro_rules! record_accessors {
    () => {
        pub fn structure(&self) -> &Structure {
            &self.0.structure
        }
        pub fn id(&self) -> Option<&str> {
            self.0.id.as_deref()
        }
        pub fn name(&self) -> Option<&str> {
            self.0.name.as_deref()
        }
        /// Bits set in the similarity fingerprint, sorted
        pub fn sim_fingerprint(&self) -> &[u32] {
            &self.0.sim_fingerprint
        }
        /// Bits set in the substructure fingerprint, sorted
        pub fn sub_fingerprint(&self) -> &[u32] {
            &self.0.sub_fingerprint
        }
        pub fn custom_object(&self, key: &str) -> Option<&str> {
            self.0.custom.get(key).map(String::as_str)
        }
        pub fn custom_objects(&self) -> impl Iterator<Item = (&str, &str)> {
            self.0
                .custom
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoleculeRecord(RecordData);
impl MoleculeRecord {
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }
    pub fn kind(&self) -> RecordKind {
        RecordKind::Molecule
    }
    record_accessors!();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRecord(RecordData);
impl ReactionRecord {
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }
    pub fn kind(&self) -> RecordKind {
        RecordKind::Reaction
    }
    record_accessors!();
}

/// A record that can be indexed, either a molecule or a reaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChemicalRecord {
    Molecule(MoleculeRecord),
    Reaction(ReactionRecord),
}
impl ChemicalRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Molecule(_) => RecordKind::Molecule,
            Self::Reaction(_) => RecordKind::Reaction,
        }
    }
    pub fn index_name(&self) -> IndexName {
        IndexName::get_index_name(self)
    }
    fn data(&self) -> &RecordData {
        match self {
            Self::Molecule(m) => &m.0,
            Self::Reaction(r) => &r.0,
        }
    }
    pub fn structure(&self) -> &Structure {
        &self.data().structure
    }
    pub fn id(&self) -> Option<&str> {
        self.data().id.as_deref()
    }
    pub fn name(&self) -> Option<&str> {
        self.data().name.as_deref()
    }
    pub fn sim_fingerprint(&self) -> &[u32] {
        &self.data().sim_fingerprint
    }
    pub fn sub_fingerprint(&self) -> &[u32] {
        &self.data().sub_fingerprint
    }
    pub fn custom_object(&self, key: &str) -> Option<&str> {
        self.data().custom.get(key).map(String::as_str)
    }
    pub fn custom_objects(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data()
            .custom
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
    pub fn as_molecule(&self) -> Option<&MoleculeRecord> {
        if let Self::Molecule(m) = self {
            Some(m)
        } else {
            None
        }
    }
    pub fn as_reaction(&self) -> Option<&ReactionRecord> {
        if let Self::Reaction(r) = self {
            Some(r)
        } else {
            None
        }
    }
}
impl From<MoleculeRecord> for ChemicalRecord {
    fn from(value: MoleculeRecord) -> Self {
        Self::Molecule(value)
    }
}
impl From<ReactionRecord> for ChemicalRecord {
    fn from(value: ReactionRecord) -> Self {
        Self::Reaction(value)
    }
}

/// Builder for both kinds of record. The kind is picked when building.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    id: Option<String>,
    name: Option<String>,
    structure: Option<Structure>,
    sim_fingerprint: Vec<u32>,
    sub_fingerprint: Vec<u32>,
    custom: HashMap<String, String>,
}
impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn with_structure(mut self, structure: Structure) -> Self {
        self.structure = Some(structure);
        self
    }
    pub fn with_smiles(self, text: impl Into<String>) -> Self {
        self.with_structure(Structure::smiles(text))
    }
    pub fn with_molfile(self, text: impl Into<String>) -> Self {
        self.with_structure(Structure::molfile(text))
    }
    pub fn with_reaction_smiles(self, text: impl Into<String>) -> Self {
        self.with_structure(Structure::reaction_smiles(text))
    }
    pub fn with_rxnfile(self, text: impl Into<String>) -> Self {
        self.with_structure(Structure::rxnfile(text))
    }
    pub fn with_sim_fingerprint<I: IntoIterator<Item = u32>>(mut self, bits: I) -> Self {
        self.sim_fingerprint = normalize_bits(bits);
        self
    }
    pub fn with_sub_fingerprint<I: IntoIterator<Item = u32>>(mut self, bits: I) -> Self {
        self.sub_fingerprint = normalize_bits(bits);
        self
    }
    /// Attach an arbitrary property. Setting the same key twice keeps the last value.
    pub fn with_custom_object(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }
    pub fn set_structure(&mut self, structure: Structure) -> &mut Self {
        self.structure = Some(structure);
        self
    }

    fn finish(self, kind: RecordKind) -> Result<RecordData, RecordError> {
        let structure = self.structure.ok_or(RecordError::MissingStructure)?;
        if structure.text.trim().is_empty() {
            return Err(RecordError::EmptyStructure);
        }
        if structure.kind() != kind {
            return Err(RecordError::FormatMismatch {
                format: structure.format,
                kind,
            });
        }
        debug!(%kind, format = %structure.format, id = ?self.id, "built record");
        Ok(RecordData {
            id: self.id,
            name: self.name,
            structure,
            sim_fingerprint: self.sim_fingerprint,
            sub_fingerprint: self.sub_fingerprint,
            custom: self.custom,
        })
    }

    pub fn build_molecule(self) -> Result<MoleculeRecord, RecordError> {
        self.finish(RecordKind::Molecule).map(MoleculeRecord)
    }
    pub fn build_reaction(self) -> Result<ReactionRecord, RecordError> {
        self.finish(RecordKind::Reaction).map(ReactionRecord)
    }
    pub fn build(self, kind: RecordKind) -> Result<ChemicalRecord, RecordError> {
        match kind {
            RecordKind::Molecule => self.build_molecule().map(ChemicalRecord::Molecule),
            RecordKind::Reaction => self.build_reaction().map(ChemicalRecord::Reaction),
        }
    }
    /// Build whichever kind of record the structure's format describes
    pub fn build_inferred(self) -> Result<ChemicalRecord, RecordError> {
        let kind = self
            .structure
            .as_ref()
            .ok_or(RecordError::MissingStructure)?
            .kind();
        self.build(kind)
    }
}

fn normalize_bits<I: IntoIterator<Item = u32>>(bits: I) -> Vec<u32> {
    let mut out = bits.into_iter().collect::<Vec<_>>();
    out.sort_unstable();
    out.dedup();
    out
}
