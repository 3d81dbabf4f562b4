use super::atom::Atom;
use super::dehydron::ResidueKey;
use super::sequence::SequenceId;
use crate::core::utils::identifiers::ALPHA_CARBON_ATOM_NAME;
use std::fmt;

/// A residue: a non-empty run of consecutive atoms sharing one sequence id.
///
/// Compounds borrow from the atom list of a [`Structure`](super::structure::Structure)
/// and are derived on demand, so they are cheap to copy. The chain id and residue
/// name are those of the first atom in the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compound<'a> {
    first: &'a Atom,
    atoms: &'a [Atom],
}

impl<'a> Compound<'a> {
    /// Wraps a run of atoms, or returns `None` for an empty run.
    pub(crate) fn from_run(atoms: &'a [Atom]) -> Option<Self> {
        let first = atoms.first()?;
        Some(Self { first, atoms })
    }

    pub fn sequence_id(&self) -> SequenceId {
        self.first.sequence_id
    }

    pub fn chain_id(&self) -> Option<char> {
        self.first.chain_id
    }

    pub fn name(&self) -> &'a str {
        &self.first.residue_name
    }

    pub fn atoms(&self) -> &'a [Atom] {
        self.atoms
    }

    /// The first atom with the given name, if any.
    pub fn atom(&self, name: &str) -> Option<&'a Atom> {
        self.atoms.iter().find(|atom| atom.name == name)
    }

    pub fn alpha_carbon(&self) -> Option<&'a Atom> {
        self.atom(ALPHA_CARBON_ATOM_NAME)
    }

    pub fn key(&self) -> ResidueKey {
        ResidueKey::new(self.sequence_id().to_string(), self.chain_id())
    }
}

impl fmt::Display for Compound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compound {} {}", self.name(), self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn serine_atoms() -> Vec<Atom> {
        let id = SequenceId::new(15, Some('A'));
        vec![
            Atom::new("N", "SEP", id, Some('B'), Point3::new(0.0, 0.0, 0.0)),
            Atom::new("CA", "SEP", id, Some('B'), Point3::new(1.5, 0.0, 0.0)),
            Atom::new("CB", "SEP", id, Some('B'), Point3::new(2.0, 1.4, 0.0)),
            Atom::new("CA", "SEP", id, Some('B'), Point3::new(9.0, 9.0, 9.0)),
        ]
    }

    #[test]
    fn from_run_rejects_empty_slices() {
        assert!(Compound::from_run(&[]).is_none());
    }

    #[test]
    fn compound_takes_identity_from_first_atom() {
        let atoms = serine_atoms();
        let compound = Compound::from_run(&atoms).unwrap();
        assert_eq!(compound.name(), "SEP");
        assert_eq!(compound.chain_id(), Some('B'));
        assert_eq!(compound.sequence_id(), SequenceId::new(15, Some('A')));
        assert_eq!(compound.atoms().len(), 4);
        assert_eq!(compound.key(), ResidueKey::new("15A", Some('B')));
    }

    #[test]
    fn atom_lookup_returns_first_match_or_none() {
        let atoms = serine_atoms();
        let compound = Compound::from_run(&atoms).unwrap();
        let ca = compound.alpha_carbon().unwrap();
        assert_eq!(ca.position, Point3::new(1.5, 0.0, 0.0));
        assert_eq!(compound.atom("CB").unwrap().name, "CB");
        assert!(compound.atom("OG").is_none());
    }

    #[test]
    fn display_names_the_residue() {
        let atoms = serine_atoms();
        let compound = Compound::from_run(&atoms).unwrap();
        assert_eq!(compound.to_string(), "Compound SEP 15A/B");
    }
}
