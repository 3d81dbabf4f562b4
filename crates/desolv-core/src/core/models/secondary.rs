use super::sequence::SequenceId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryStructureKind {
    Helix,
    Sheet,
}

impl fmt::Display for SecondaryStructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SecondaryStructureKind::Helix => "Helix",
                SecondaryStructureKind::Sheet => "Sheet",
            }
        )
    }
}

/// An annotated helix or strand: an inclusive residue range on one chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryStructureRange {
    pub kind: SecondaryStructureKind,
    pub chain_id: Option<char>,
    pub start: SequenceId,
    pub end: SequenceId,
}

impl SecondaryStructureRange {
    pub fn new(
        kind: SecondaryStructureKind,
        chain_id: Option<char>,
        start: SequenceId,
        end: SequenceId,
    ) -> Self {
        Self {
            kind,
            chain_id,
            start,
            end,
        }
    }

    /// Whether a residue on `chain_id` with id `sequence_id` lies in this range.
    /// Both bounds are inclusive and compared by ordinal.
    pub fn contains(&self, chain_id: Option<char>, sequence_id: &SequenceId) -> bool {
        let ordinal = sequence_id.ordinal();
        self.chain_id == chain_id
            && ordinal >= self.start.ordinal()
            && ordinal <= self.end.ordinal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helix(start: &str, end: &str) -> SecondaryStructureRange {
        SecondaryStructureRange::new(
            SecondaryStructureKind::Helix,
            Some('A'),
            start.parse().unwrap(),
            end.parse().unwrap(),
        )
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let range = helix("5", "9");
        assert!(range.contains(Some('A'), &"5".parse().unwrap()));
        assert!(range.contains(Some('A'), &"9".parse().unwrap()));
        assert!(!range.contains(Some('A'), &"4".parse().unwrap()));
        assert!(!range.contains(Some('A'), &"10".parse().unwrap()));
    }

    #[test]
    fn contains_respects_insertion_code_order() {
        let range = helix("5A", "6");
        assert!(!range.contains(Some('A'), &"5".parse().unwrap()));
        assert!(range.contains(Some('A'), &"5A".parse().unwrap()));
        assert!(range.contains(Some('A'), &"5C".parse().unwrap()));
        assert!(!range.contains(Some('A'), &"6A".parse().unwrap()));
    }

    #[test]
    fn contains_is_chain_scoped() {
        let range = helix("1", "100");
        assert!(!range.contains(Some('B'), &"50".parse().unwrap()));
        assert!(!range.contains(None, &"50".parse().unwrap()));
    }

    #[test]
    fn kind_display_is_capitalized() {
        assert_eq!(SecondaryStructureKind::Helix.to_string(), "Helix");
        assert_eq!(SecondaryStructureKind::Sheet.to_string(), "Sheet");
    }
}
