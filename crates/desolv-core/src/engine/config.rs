use crate::core::io::bonds::{BondLayout, DuplicatePolicy};
use crate::core::models::atom::Atom;
use crate::core::models::compound::Compound;
use crate::core::models::dehydron::ResidueKey;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Residue-name selection must name at least one residue")]
    EmptyResidueSelection,
}

/// Restricts atoms by atom name and/or residue name. An absent field does not restrict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomFilter {
    pub atom_names: Option<HashSet<String>>,
    pub residue_names: Option<HashSet<String>>,
}

impl AtomFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.atom_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn residue_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.residue_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn matches(&self, atom: &Atom) -> bool {
        self.atom_names
            .as_ref()
            .is_none_or(|names| names.contains(&atom.name))
            && self
                .residue_names
                .as_ref()
                .is_none_or(|names| names.contains(&atom.residue_name))
    }
}

/// Restricts compounds by residue name and/or membership in a set of residues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundFilter {
    pub residue_names: Option<HashSet<String>>,
    pub residues: Option<HashSet<ResidueKey>>,
}

impl CompoundFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn residue_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.residue_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn residues<I>(mut self, residues: I) -> Self
    where
        I: IntoIterator<Item = ResidueKey>,
    {
        self.residues = Some(residues.into_iter().collect());
        self
    }

    pub fn matches(&self, compound: &Compound<'_>) -> bool {
        self.residue_names
            .as_ref()
            .is_none_or(|names| names.contains(compound.name()))
            && self
                .residues
                .as_ref()
                .is_none_or(|keys| keys.contains(&compound.key()))
    }
}

/// Which residues are tested against each dehydron's desolvation domain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InterestSelection {
    /// Phosphorylated tyrosine, serine and threonine (PTR, SEP, TPO).
    #[default]
    PhosphoSites,
    /// Every compound whose residue name is listed.
    ResidueNames(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisConfig {
    pub bond_layout: BondLayout,
    pub duplicate_policy: DuplicatePolicy,
    pub residues_of_interest: InterestSelection,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    bond_layout: Option<BondLayout>,
    duplicate_policy: Option<DuplicatePolicy>,
    residues_of_interest: Option<InterestSelection>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bond_layout(mut self, layout: BondLayout) -> Self {
        self.bond_layout = Some(layout);
        self
    }
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = Some(policy);
        self
    }
    pub fn residues_of_interest(mut self, selection: InterestSelection) -> Self {
        self.residues_of_interest = Some(selection);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let residues_of_interest = self.residues_of_interest.unwrap_or_default();
        if let InterestSelection::ResidueNames(names) = &residues_of_interest {
            if names.iter().all(|name| name.trim().is_empty()) {
                return Err(ConfigError::EmptyResidueSelection);
            }
        }
        Ok(AnalysisConfig {
            bond_layout: self.bond_layout.unwrap_or_default(),
            duplicate_policy: self.duplicate_policy.unwrap_or_default(),
            residues_of_interest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::SequenceId;
    use nalgebra::Point3;

    fn atom(name: &str, residue: &str, number: i32) -> Atom {
        Atom::new(
            name,
            residue,
            SequenceId::new(number, None),
            Some('A'),
            Point3::origin(),
        )
    }

    #[test]
    fn empty_filters_match_everything() {
        let a = atom("CA", "SER", 1);
        assert!(AtomFilter::new().matches(&a));
        let atoms = [a];
        let compound = Compound::from_run(&atoms).unwrap();
        assert!(CompoundFilter::new().matches(&compound));
    }

    #[test]
    fn atom_filter_combines_fields() {
        let filter = AtomFilter::new()
            .atom_names(["CA"])
            .residue_names(["SEP", "TPO"]);
        assert!(filter.matches(&atom("CA", "SEP", 1)));
        assert!(!filter.matches(&atom("CB", "SEP", 1)));
        assert!(!filter.matches(&atom("CA", "SER", 1)));
    }

    #[test]
    fn compound_filter_checks_membership_by_key() {
        let atoms = [atom("CA", "SEP", 7)];
        let compound = Compound::from_run(&atoms).unwrap();

        let by_key = CompoundFilter::new().residues([ResidueKey::new("7", Some('A'))]);
        assert!(by_key.matches(&compound));

        let other_chain = CompoundFilter::new().residues([ResidueKey::new("7", Some('B'))]);
        assert!(!other_chain.matches(&compound));

        let by_name = CompoundFilter::new().residue_names(["TPO"]);
        assert!(!by_name.matches(&compound));
    }

    #[test]
    fn builder_uses_defaults_for_missing_fields() {
        let config = AnalysisConfigBuilder::new().build().unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.residues_of_interest, InterestSelection::PhosphoSites);
        assert_eq!(config.bond_layout, BondLayout::Standard);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::ExactPair);
    }

    #[test]
    fn builder_sets_all_fields() {
        let config = AnalysisConfigBuilder::new()
            .bond_layout(BondLayout::Narrow)
            .duplicate_policy(DuplicatePolicy::EitherField)
            .residues_of_interest(InterestSelection::ResidueNames(vec!["SER".into()]))
            .build()
            .unwrap();
        assert_eq!(config.bond_layout, BondLayout::Narrow);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::EitherField);
        assert_eq!(
            config.residues_of_interest,
            InterestSelection::ResidueNames(vec!["SER".into()])
        );
    }

    #[test]
    fn builder_rejects_empty_residue_name_selection() {
        let result = AnalysisConfigBuilder::new()
            .residues_of_interest(InterestSelection::ResidueNames(vec![" ".into()]))
            .build();
        assert_eq!(result, Err(ConfigError::EmptyResidueSelection));
    }
}
