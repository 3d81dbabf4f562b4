use super::columns::BondColumns;
use super::traits::RecordFile;
use crate::core::models::dehydron::{Dehydron, ResidueKey};
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

const HBOND_PREFIX: &str = "HB_";

#[derive(Debug, Error)]
pub enum BondsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
#[error("Invalid option '{0}'")]
pub struct ParseOptionError(String);

/// Known revisions of the annotation file's column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BondLayout {
    /// Residue ids in columns 49-52 and 72-75.
    #[default]
    Standard,
    /// Residue ids in columns 50-52 and 73-75, numeric only.
    Narrow,
}

impl BondLayout {
    pub fn columns(self) -> BondColumns {
        match self {
            BondLayout::Standard => BondColumns::STANDARD,
            BondLayout::Narrow => BondColumns::NARROW,
        }
    }
}

impl FromStr for BondLayout {
    type Err = ParseOptionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(BondLayout::Standard),
            "narrow" => Ok(BondLayout::Narrow),
            _ => Err(ParseOptionError(s.to_string())),
        }
    }
}

impl fmt::Display for BondLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondLayout::Standard => write!(f, "standard"),
            BondLayout::Narrow => write!(f, "narrow"),
        }
    }
}

/// How a candidate pair is compared with the last emitted pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Suppress a pair only when both residue ids repeat the last emitted pair.
    #[default]
    ExactPair,
    /// Suppress a pair when either residue id repeats its counterpart in the last
    /// emitted pair.
    EitherField,
}

impl DuplicatePolicy {
    fn is_duplicate(self, last: Option<&(String, String)>, first: &str, second: &str) -> bool {
        let Some((last_first, last_second)) = last else {
            return false;
        };
        match self {
            DuplicatePolicy::ExactPair => last_first == first && last_second == second,
            DuplicatePolicy::EitherField => last_first == first || last_second == second,
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = ParseOptionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact-pair" | "exact_pair" | "exact" => Ok(DuplicatePolicy::ExactPair),
            "either-field" | "either_field" | "either" => Ok(DuplicatePolicy::EitherField),
            _ => Err(ParseOptionError(s.to_string())),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::ExactPair => write!(f, "exact-pair"),
            DuplicatePolicy::EitherField => write!(f, "either-field"),
        }
    }
}

/// Streaming state: the last emitted id pair and everything emitted so far.
#[derive(Debug, Default)]
struct ScanState {
    last: Option<(String, String)>,
    dehydrons: Vec<Dehydron>,
}

/// Reader for dehydron annotation files.
///
/// Each `HB_` line names the two residues of a hydrogen bond. Lines with a blank
/// residue field are ignored, and runs of consecutive repeats are collapsed
/// according to the [`DuplicatePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondsFile {
    columns: BondColumns,
    policy: DuplicatePolicy,
}

impl Default for BondsFile {
    fn default() -> Self {
        Self::new(BondLayout::default(), DuplicatePolicy::default())
    }
}

impl BondsFile {
    pub fn new(layout: BondLayout, policy: DuplicatePolicy) -> Self {
        Self::with_columns(layout.columns(), policy)
    }

    pub fn with_columns(columns: BondColumns, policy: DuplicatePolicy) -> Self {
        Self { columns, policy }
    }

    /// Extracts dehydrons from lines already in memory.
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<Dehydron>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .fold(ScanState::default(), |state, line| {
                self.step(state, line.as_ref())
            })
            .dehydrons
    }

    fn step(&self, mut state: ScanState, line: &str) -> ScanState {
        if !line.starts_with(HBOND_PREFIX) {
            return state;
        }

        let first = self.columns.first_residue.slice(line);
        let second = self.columns.second_residue.slice(line);
        if first.is_empty() || second.is_empty() {
            return state;
        }
        if self.columns.numeric_residues && !(is_numeric(first) && is_numeric(second)) {
            return state;
        }
        if self.policy.is_duplicate(state.last.as_ref(), first, second) {
            return state;
        }

        state.dehydrons.push(Dehydron::new(
            ResidueKey::new(first, self.columns.first_chain.char(line)),
            ResidueKey::new(second, self.columns.second_chain.char(line)),
        ));
        state.last = Some((first.to_string(), second.to_string()));
        state
    }
}

impl RecordFile for BondsFile {
    type Output = Vec<Dehydron>;
    type Error = BondsError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Vec<Dehydron>, BondsError> {
        let mut state = ScanState::default();
        for line in reader.lines() {
            state = self.step(state, &line?);
        }
        info!(
            dehydrons = state.dehydrons.len(),
            "Loaded dehydron annotations"
        );
        Ok(state.dehydrons)
    }
}

fn is_numeric(field: &str) -> bool {
    field.chars().all(|c| c.is_ascii_digit())
}
