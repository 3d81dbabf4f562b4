//! Fixed-column layouts for the record types this crate reads.
//!
//! Every offset used by the readers is declared here exactly once, as a 0-based,
//! half-open byte range. Ranges are checked for emptiness at compile time.

use std::fmt;

/// A named, half-open column range within a fixed-width record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

impl Columns {
    pub const fn new(name: &'static str, start: usize, end: usize) -> Self {
        assert!(start < end, "column range must not be empty");
        Self { name, start, end }
    }

    pub const fn width(&self) -> usize {
        self.end - self.start
    }

    /// The trimmed field text. Columns past the end of a short line read as blank.
    pub fn slice<'l>(&self, line: &'l str) -> &'l str {
        let end = self.end.min(line.len());
        line.get(self.start..end).unwrap_or("").trim()
    }

    /// The first non-blank character of a single-character field.
    pub fn char(&self, line: &str) -> Option<char> {
        self.slice(line).chars().next()
    }

    pub const fn overlaps(&self, other: &Columns) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Columns {
    /// Formats the range the way the format documentation numbers columns:
    /// 1-based and inclusive.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width() == 1 {
            write!(f, "{}", self.end)
        } else {
            write!(f, "{}-{}", self.start + 1, self.end)
        }
    }
}

/// Column layout of ATOM and HETATM records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomColumns {
    pub atom_name: Columns,
    pub alt_location: Columns,
    pub residue_name: Columns,
    pub chain_id: Columns,
    pub sequence_number: Columns,
    pub insertion_code: Columns,
    pub x: Columns,
    pub y: Columns,
    pub z: Columns,
}

impl AtomColumns {
    pub const PDB: AtomColumns = AtomColumns {
        atom_name: Columns::new("atom name", 12, 16),
        alt_location: Columns::new("alternate location", 16, 17),
        residue_name: Columns::new("residue name", 17, 20),
        chain_id: Columns::new("chain id", 21, 22),
        sequence_number: Columns::new("residue number", 22, 26),
        insertion_code: Columns::new("insertion code", 26, 27),
        x: Columns::new("x coordinate", 30, 38),
        y: Columns::new("y coordinate", 38, 46),
        z: Columns::new("z coordinate", 46, 54),
    };

    pub fn fields(&self) -> [Columns; 9] {
        [
            self.atom_name,
            self.alt_location,
            self.residue_name,
            self.chain_id,
            self.sequence_number,
            self.insertion_code,
            self.x,
            self.y,
            self.z,
        ]
    }
}

/// Column layout of a record describing a residue range (HELIX, SHEET).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeColumns {
    pub chain_id: Columns,
    pub start_number: Columns,
    pub start_insertion_code: Columns,
    pub end_number: Columns,
    pub end_insertion_code: Columns,
}

impl RangeColumns {
    pub const HELIX: RangeColumns = RangeColumns {
        chain_id: Columns::new("chain id", 19, 20),
        start_number: Columns::new("start residue number", 21, 25),
        start_insertion_code: Columns::new("start insertion code", 25, 26),
        end_number: Columns::new("end residue number", 33, 37),
        end_insertion_code: Columns::new("end insertion code", 37, 38),
    };

    pub const SHEET: RangeColumns = RangeColumns {
        chain_id: Columns::new("chain id", 21, 22),
        start_number: Columns::new("start residue number", 22, 26),
        start_insertion_code: Columns::new("start insertion code", 26, 27),
        end_number: Columns::new("end residue number", 33, 37),
        end_insertion_code: Columns::new("end insertion code", 37, 38),
    };

    pub fn fields(&self) -> [Columns; 5] {
        [
            self.chain_id,
            self.start_number,
            self.start_insertion_code,
            self.end_number,
            self.end_insertion_code,
        ]
    }
}

/// Column layout of `HB_` lines in a dehydron annotation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondColumns {
    pub first_chain: Columns,
    pub first_residue: Columns,
    pub second_chain: Columns,
    pub second_residue: Columns,
    /// Whether both residue fields must be purely numeric for a line to count.
    pub numeric_residues: bool,
}

impl BondColumns {
    pub const STANDARD: BondColumns = BondColumns {
        first_chain: Columns::new("first chain id", 46, 47),
        first_residue: Columns::new("first residue", 48, 52),
        second_chain: Columns::new("second chain id", 69, 70),
        second_residue: Columns::new("second residue", 71, 75),
        numeric_residues: false,
    };

    pub const NARROW: BondColumns = BondColumns {
        first_chain: Columns::new("first chain id", 46, 47),
        first_residue: Columns::new("first residue", 49, 52),
        second_chain: Columns::new("second chain id", 69, 70),
        second_residue: Columns::new("second residue", 72, 75),
        numeric_residues: true,
    };

    pub fn fields(&self) -> [Columns; 4] {
        [
            self.first_chain,
            self.first_residue,
            self.second_chain,
            self.second_residue,
        ]
    }
}
