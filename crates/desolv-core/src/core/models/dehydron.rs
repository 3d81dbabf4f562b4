use super::sequence::SequenceId;
use std::fmt;

/// Identifies a residue by its textual sequence id and chain, as written in an
/// annotation file or supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueKey {
    pub sequence_id: String,
    pub chain_id: Option<char>,
}

impl ResidueKey {
    pub fn new(sequence_id: impl Into<String>, chain_id: Option<char>) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            chain_id,
        }
    }

    /// The key's sequence id, if it is well formed.
    pub fn parsed_sequence_id(&self) -> Option<SequenceId> {
        self.sequence_id.parse().ok()
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chain_id {
            Some(chain) => write!(f, "{}/{}", self.sequence_id, chain),
            None => write!(f, "{}", self.sequence_id),
        }
    }
}

/// A poorly wrapped backbone hydrogen bond, given as the two residues it joins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dehydron {
    pub first: ResidueKey,
    pub second: ResidueKey,
}

impl Dehydron {
    pub fn new(first: ResidueKey, second: ResidueKey) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for Dehydron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
