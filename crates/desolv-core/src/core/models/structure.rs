use super::atom::Atom;
use super::secondary::{SecondaryStructureKind, SecondaryStructureRange};

/// The parsed contents of one structure file.
///
/// Holds every atom in file order together with the helix and sheet annotations.
/// A `Structure` is assembled through [`StructureBuilder`] and is read-only
/// afterwards, so any number of queries may borrow it at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    atoms: Vec<Atom>,
    helices: Vec<SecondaryStructureRange>,
    sheets: Vec<SecondaryStructureRange>,
}

impl Structure {
    /// Atoms in file order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Helix ranges in registration order.
    pub fn helices(&self) -> &[SecondaryStructureRange] {
        &self.helices
    }

    /// Sheet ranges in registration order.
    pub fn sheets(&self) -> &[SecondaryStructureRange] {
        &self.sheets
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// Accumulates atoms and ranges in the order a reader encounters them.
#[derive(Debug, Default)]
pub struct StructureBuilder {
    structure: Structure,
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_atom(&mut self, atom: Atom) -> &mut Self {
        self.structure.atoms.push(atom);
        self
    }

    /// Registers a range with the helix or sheet list according to its kind.
    pub fn add_range(&mut self, range: SecondaryStructureRange) -> &mut Self {
        match range.kind {
            SecondaryStructureKind::Helix => self.structure.helices.push(range),
            SecondaryStructureKind::Sheet => self.structure.sheets.push(range),
        }
        self
    }

    pub fn atom_count(&self) -> usize {
        self.structure.atoms.len()
    }

    pub fn build(self) -> Structure {
        self.structure
    }
}
