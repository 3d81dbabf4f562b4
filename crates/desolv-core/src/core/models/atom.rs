use super::sequence::SequenceId;
use nalgebra::Point3;
use std::fmt;

/// A single ATOM or HETATM record of a structure file.
///
/// Atoms are created once by the parser and never mutated afterwards. The residue
/// an atom belongs to is implied by its position in the file, not stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom name (e.g., "CA", "N", "OG1").
    pub name: String,
    /// The three-letter residue name (e.g., "SER", "SEP").
    pub residue_name: String,
    /// Residue number plus insertion code.
    pub sequence_id: SequenceId,
    /// Chain identifier; `None` when the column is blank.
    pub chain_id: Option<char>,
    /// Alternate location indicator; `None` when the column is blank.
    pub alt_location: Option<char>,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
    /// Whether the record was a HETATM line.
    pub is_hetero: bool,
}

impl Atom {
    /// Creates a standard (non-hetero) atom without an alternate location.
    pub fn new(
        name: &str,
        residue_name: &str,
        sequence_id: SequenceId,
        chain_id: Option<char>,
        position: Point3<f64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            residue_name: residue_name.to_string(),
            sequence_id,
            chain_id,
            alt_location: None,
            position,
            is_hetero: false,
        }
    }

    /// Euclidean distance to another atom in Angstroms.
    pub fn distance_to(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in compound {} at ({:.3}, {:.3}, {:.3}) (sequence {}, chain {})",
            self.name,
            self.residue_name,
            self.position.x,
            self.position.y,
            self.position.z,
            self.sequence_id,
            self.chain_id.unwrap_or('-')
        )
    }
}
