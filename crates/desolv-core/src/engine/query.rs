use super::config::{AtomFilter, CompoundFilter};
use crate::core::models::atom::Atom;
use crate::core::models::compound::Compound;
use crate::core::models::dehydron::ResidueKey;
use crate::core::models::secondary::SecondaryStructureRange;
use crate::core::models::structure::Structure;
use crate::core::utils::identifiers::is_phospho_residue;
use std::collections::BTreeMap;

/// Read-only structural queries over one [`Structure`].
///
/// Compounds are not cached; each call regroups the atom list in a single pass.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    structure: &'a Structure,
}

impl<'a> QueryEngine<'a> {
    pub fn new(structure: &'a Structure) -> Self {
        Self { structure }
    }

    pub fn structure(&self) -> &'a Structure {
        self.structure
    }

    /// Maximal runs of consecutive atoms sharing a sequence id, in file order.
    ///
    /// Runs are split on sequence id alone. Two runs with the same id that are not
    /// contiguous stay separate compounds.
    pub fn compounds(&self) -> Vec<Compound<'a>> {
        self.structure
            .atoms()
            .chunk_by(|a, b| a.sequence_id == b.sequence_id)
            .filter_map(Compound::from_run)
            .collect()
    }

    pub fn atoms(&self, filter: &AtomFilter) -> Vec<&'a Atom> {
        self.structure
            .atoms()
            .iter()
            .filter(|atom| filter.matches(atom))
            .collect()
    }

    pub fn compounds_matching(&self, filter: &CompoundFilter) -> Vec<Compound<'a>> {
        self.compounds()
            .into_iter()
            .filter(|compound| filter.matches(compound))
            .collect()
    }

    /// Phosphorylated residues (PTR, SEP, TPO).
    pub fn phospho_sites(&self) -> Vec<Compound<'a>> {
        self.compounds()
            .into_iter()
            .filter(|compound| is_phospho_residue(compound.name()))
            .collect()
    }

    /// Consecutive compound pairs that are sequence neighbours on the same chain.
    ///
    /// Compounds are split into runs of equal chain id. Within a run, a pair is
    /// adjacent when the second number follows the first by exactly one, or when
    /// either id carries an insertion code (order is then not checked).
    pub fn adjacent_compounds(&self) -> Vec<(Compound<'a>, Compound<'a>)> {
        let compounds = self.compounds();
        compounds
            .chunk_by(|a, b| a.chain_id() == b.chain_id())
            .flat_map(|run| run.windows(2))
            .filter_map(|pair| match pair {
                [prev, next] if are_adjacent(prev, next) => Some((*prev, *next)),
                _ => None,
            })
            .collect()
    }

    /// Compounds covered by each helix range, one list per range in registration order.
    pub fn helices(&self) -> Vec<Vec<Compound<'a>>> {
        self.members_of(self.structure.helices())
    }

    /// Compounds covered by each sheet range, one list per range in registration order.
    pub fn sheets(&self) -> Vec<Vec<Compound<'a>>> {
        self.members_of(self.structure.sheets())
    }

    fn members_of(&self, ranges: &[SecondaryStructureRange]) -> Vec<Vec<Compound<'a>>> {
        let compounds = self.compounds();
        ranges
            .iter()
            .map(|range| {
                compounds
                    .iter()
                    .filter(|c| range.contains(c.chain_id(), &c.sequence_id()))
                    .copied()
                    .collect()
            })
            .collect()
    }

    /// The first compound whose id and chain match `key`. Keys whose sequence id
    /// does not parse never match.
    pub fn find_compound(&self, key: &ResidueKey) -> Option<Compound<'a>> {
        let sequence_id = key.parsed_sequence_id()?;
        self.structure
            .atoms()
            .chunk_by(|a, b| a.sequence_id == b.sequence_id)
            .filter_map(Compound::from_run)
            .find(|c| c.sequence_id() == sequence_id && c.chain_id() == key.chain_id)
    }

    /// Distinct chain ids in order of first appearance.
    pub fn chain_ids(&self) -> Vec<Option<char>> {
        let mut chains: Vec<Option<char>> = Vec::new();
        for atom in self.structure.atoms() {
            if !chains.contains(&atom.chain_id) {
                chains.push(atom.chain_id);
            }
        }
        chains
    }

    pub fn residue_name_counts(&self) -> BTreeMap<String, usize> {
        count_by_residue_name(&self.compounds())
    }
}

/// Number of compounds per residue name.
pub fn count_by_residue_name(compounds: &[Compound<'_>]) -> BTreeMap<String, usize> {
    compounds.iter().fold(BTreeMap::new(), |mut counts, c| {
        *counts.entry(c.name().to_string()).or_insert(0) += 1;
        counts
    })
}

fn are_adjacent(prev: &Compound<'_>, next: &Compound<'_>) -> bool {
    let (prev, next) = (prev.sequence_id(), next.sequence_id());
    if prev.has_insertion_code() || next.has_insertion_code() {
        return true;
    }
    prev.number.checked_add(1) == Some(next.number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::secondary::SecondaryStructureKind;
    use crate::core::models::sequence::SequenceId;
    use crate::core::models::structure::StructureBuilder;
    use nalgebra::Point3;

    fn atom(name: &str, residue: &str, id: &str, chain: char) -> Atom {
        Atom::new(
            name,
            residue,
            id.parse().unwrap(),
            Some(chain),
            Point3::origin(),
        )
    }

    fn structure(atoms: Vec<Atom>) -> Structure {
        let mut builder = StructureBuilder::new();
        for a in atoms {
            builder.add_atom(a);
        }
        builder.build()
    }

    fn ids(compounds: &[Compound<'_>]) -> Vec<String> {
        compounds.iter().map(|c| c.key().to_string()).collect()
    }

    fn range(
        kind: SecondaryStructureKind,
        chain: char,
        start: &str,
        end: &str,
    ) -> SecondaryStructureRange {
        SecondaryStructureRange::new(
            kind,
            Some(chain),
            start.parse().unwrap(),
            end.parse().unwrap(),
        )
    }

    #[test]
    fn compounds_are_maximal_runs_of_equal_sequence_id() {
        let s = structure(vec![
            atom("N", "ALA", "5", 'A'),
            atom("CA", "ALA", "5", 'A'),
            atom("CA", "GLY", "6", 'A'),
            atom("CA", "SER", "6A", 'A'),
            atom("CB", "SER", "6A", 'A'),
        ]);
        let engine = QueryEngine::new(&s);
        let compounds = engine.compounds();
        assert_eq!(ids(&compounds), ["5/A", "6/A", "6A/A"]);
        assert_eq!(compounds[0].atoms().len(), 2);
        assert_eq!(compounds[2].atoms().len(), 2);
        assert_eq!(engine.compounds(), compounds);
    }

    #[test]
    fn non_contiguous_runs_with_same_id_stay_separate() {
        let s = structure(vec![
            atom("CA", "ALA", "1", 'A'),
            atom("CA", "GLY", "2", 'A'),
            atom("CA", "ALA", "1", 'A'),
        ]);
        assert_eq!(
            ids(&QueryEngine::new(&s).compounds()),
            ["1/A", "2/A", "1/A"]
        );
    }

    #[test]
    fn grouping_ignores_chain_changes_within_a_run() {
        let s = structure(vec![atom("CA", "ALA", "1", 'A'), atom("CA", "ALA", "1", 'B')]);
        let compounds = QueryEngine::new(&s).compounds();
        assert_eq!(compounds.len(), 1);
        assert_eq!(compounds[0].chain_id(), Some('A'));
    }

    #[test]
    fn empty_structure_has_no_compounds() {
        let s = Structure::default();
        let engine = QueryEngine::new(&s);
        assert!(engine.compounds().is_empty());
        assert!(engine.adjacent_compounds().is_empty());
        assert!(engine.chain_ids().is_empty());
    }

    #[test]
    fn consecutive_numbers_are_adjacent_and_gaps_are_not() {
        let s = structure(vec![
            atom("CA", "ALA", "1", 'A'),
            atom("CA", "ALA", "2", 'A'),
            atom("CA", "ALA", "4", 'A'),
            atom("CA", "ALA", "5", 'A'),
        ]);
        let pairs = QueryEngine::new(&s).adjacent_compounds();
        let pairs: Vec<_> = pairs
            .iter()
            .map(|(a, b)| (a.sequence_id().number, b.sequence_id().number))
            .collect();
        assert_eq!(pairs, [(1, 2), (4, 5)]);
    }

    #[test]
    fn insertion_codes_are_always_adjacent() {
        let s = structure(vec![
            atom("CA", "ALA", "10", 'A'),
            atom("CA", "ALA", "10A", 'A'),
            atom("CA", "ALA", "30", 'A'),
        ]);
        let pairs = QueryEngine::new(&s).adjacent_compounds();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].0.sequence_id(), SequenceId::new(10, Some('A')));
        assert_eq!(pairs[1].1.sequence_id(), SequenceId::new(30, None));
    }

    #[test]
    fn adjacency_does_not_cross_chain_boundaries() {
        let s = structure(vec![
            atom("CA", "ALA", "1", 'A'),
            atom("CA", "ALA", "2", 'B'),
            atom("CA", "ALA", "3", 'B'),
        ]);
        let pairs = QueryEngine::new(&s).adjacent_compounds();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.key(), ResidueKey::new("2", Some('B')));
    }

    #[test]
    fn decreasing_numbers_are_not_adjacent() {
        let s = structure(vec![atom("CA", "ALA", "2", 'A'), atom("CA", "ALA", "1", 'A')]);
        assert!(QueryEngine::new(&s).adjacent_compounds().is_empty());
    }

    #[test]
    fn secondary_structure_members_are_inclusive_and_chain_scoped() {
        let mut builder = StructureBuilder::new();
        for (id, chain) in [("4", 'A'), ("5", 'A'), ("6", 'A'), ("7", 'A'), ("5", 'B')] {
            builder.add_atom(atom("CA", "ALA", id, chain));
        }
        builder.add_range(range(SecondaryStructureKind::Helix, 'A', "5", "6"));
        builder.add_range(range(SecondaryStructureKind::Sheet, 'B', "1", "9"));
        builder.add_range(range(SecondaryStructureKind::Helix, 'A', "6", "7"));
        let s = builder.build();
        let engine = QueryEngine::new(&s);

        let helices = engine.helices();
        assert_eq!(helices.len(), 2);
        assert_eq!(ids(&helices[0]), ["5/A", "6/A"]);
        assert_eq!(ids(&helices[1]), ["6/A", "7/A"]);

        let sheets = engine.sheets();
        assert_eq!(sheets.len(), 1);
        assert_eq!(ids(&sheets[0]), ["5/B"]);
    }

    #[test]
    fn range_with_no_members_yields_empty_list() {
        let mut builder = StructureBuilder::new();
        builder.add_atom(atom("CA", "ALA", "1", 'A'));
        builder.add_range(range(SecondaryStructureKind::Helix, 'A', "50", "60"));
        let s = builder.build();
        assert_eq!(QueryEngine::new(&s).helices(), vec![Vec::new()]);
    }

    #[test]
    fn phospho_sites_select_modified_residues() {
        let s = structure(vec![
            atom("CA", "SER", "1", 'A'),
            atom("CA", "SEP", "2", 'A'),
            atom("CA", "TPO", "3", 'A'),
            atom("CA", "PTR", "4", 'B'),
            atom("CA", "THR", "5", 'B'),
        ]);
        let sites = QueryEngine::new(&s).phospho_sites();
        assert_eq!(ids(&sites), ["2/A", "3/A", "4/B"]);
    }

    #[test]
    fn find_compound_matches_id_and_chain() {
        let s = structure(vec![
            atom("CA", "ALA", "7", 'A'),
            atom("CA", "LEU", "8", 'A'),
            atom("CA", "GLY", "7", 'B'),
            atom("CA", "SER", "7A", 'B'),
        ]);
        let engine = QueryEngine::new(&s);
        let name_of = |id: &str, chain: char| {
            engine
                .find_compound(&ResidueKey::new(id, Some(chain)))
                .map(|c| c.name().to_string())
        };
        assert_eq!(name_of("7", 'A').as_deref(), Some("ALA"));
        assert_eq!(name_of("7", 'B').as_deref(), Some("GLY"));
        assert_eq!(name_of("7A", 'B').as_deref(), Some("SER"));
        assert_eq!(name_of("7", 'C'), None);
        assert_eq!(name_of("9", 'A'), None);
        assert_eq!(name_of("", 'A'), None);
    }

    #[test]
    fn contiguous_equal_ids_on_two_chains_are_one_compound() {
        let s = structure(vec![atom("CA", "ALA", "7", 'A'), atom("CA", "GLY", "7", 'B')]);
        let engine = QueryEngine::new(&s);
        let find = |chain| engine.find_compound(&ResidueKey::new("7", Some(chain)));
        assert_eq!(find('A').map(|c| c.atoms().len()), Some(2));
        assert!(find('B').is_none());
    }

    #[test]
    fn find_compound_returns_first_match() {
        let s = structure(vec![
            atom("CA", "ALA", "1", 'A'),
            atom("CA", "GLY", "2", 'A'),
            atom("CA", "SER", "1", 'A'),
        ]);
        let found = QueryEngine::new(&s).find_compound(&ResidueKey::new("1", Some('A')));
        assert_eq!(found.unwrap().name(), "ALA");
    }

    #[test]
    fn filters_select_atoms_and_compounds() {
        let s = structure(vec![
            atom("N", "SEP", "1", 'A'),
            atom("CA", "SEP", "1", 'A'),
            atom("CA", "GLY", "2", 'A'),
        ]);
        let engine = QueryEngine::new(&s);

        let alpha = engine.atoms(&AtomFilter::new().atom_names(["CA"]));
        assert_eq!(alpha.len(), 2);

        let sep = engine.compounds_matching(&CompoundFilter::new().residue_names(["SEP"]));
        assert_eq!(ids(&sep), ["1/A"]);

        let by_key = CompoundFilter::new().residues([ResidueKey::new("2", Some('A'))]);
        let keyed = engine.compounds_matching(&by_key);
        assert_eq!(ids(&keyed), ["2/A"]);
    }

    #[test]
    fn counts_compounds_per_residue_name_and_lists_chains() {
        let s = structure(vec![
            atom("N", "ALA", "1", 'A'),
            atom("CA", "ALA", "1", 'A'),
            atom("CA", "GLY", "2", 'A'),
            atom("CA", "ALA", "3", 'B'),
        ]);
        let engine = QueryEngine::new(&s);
        let counts = engine.residue_name_counts();
        assert_eq!(counts.get("ALA"), Some(&2));
        assert_eq!(counts.get("GLY"), Some(&1));
        assert_eq!(counts.len(), 2);
        assert_eq!(engine.chain_ids(), [Some('A'), Some('B')]);

        let glycine_only = count_by_residue_name(&engine.compounds()[1..2]);
        assert_eq!(
            glycine_only.into_iter().collect::<Vec<_>>(),
            [("GLY".to_string(), 1)]
        );
    }
}
