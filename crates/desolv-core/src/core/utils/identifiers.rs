use phf::{Map, Set, phf_map, phf_set};

/// Name of the atom used as a residue's representative position.
pub const ALPHA_CARBON_ATOM_NAME: &str = "CA";

const UNLISTED_INSERTION_CODE_RANK: u8 = 12;
const INSERTION_CODE_DIVISOR: f64 = 12.0;

static INSERTION_CODE_RANKS: Map<char, u8> = phf_map! {
    'A' => 1, 'B' => 2, 'C' => 3, 'D' => 4, 'E' => 5,
    'F' => 6, 'G' => 7, 'H' => 8, 'I' => 9, 'J' => 10,
    'X' => 11,
};

// Phosphotyrosine, phosphoserine, phosphothreonine.
static PHOSPHO_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "PTR", "SEP", "TPO",
};

/// Rank of an insertion code in biological insertion order.
///
/// A blank code ranks 0, `A` through `J` rank 1 through 10, `X` ranks 11 and every
/// other code shares the final rank 12.
pub fn insertion_code_rank(insertion_code: Option<char>) -> u8 {
    match insertion_code {
        None => 0,
        Some(code) => INSERTION_CODE_RANKS
            .get(&code)
            .copied()
            .unwrap_or(UNLISTED_INSERTION_CODE_RANK),
    }
}

/// Maps a residue number and insertion code onto the real line so that inserted
/// residues sort after their base number.
pub fn sequence_ordinal(number: i32, insertion_code: Option<char>) -> f64 {
    f64::from(number) + f64::from(insertion_code_rank(insertion_code)) / INSERTION_CODE_DIVISOR
}

pub fn is_phospho_residue(residue_name: &str) -> bool {
    PHOSPHO_RESIDUE_NAMES.contains(residue_name.trim())
}
