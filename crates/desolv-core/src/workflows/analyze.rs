use super::error::WorkflowError;
use crate::core::io::bonds::BondsFile;
use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::RecordFile;
use crate::core::models::compound::Compound;
use crate::core::models::dehydron::Dehydron;
use crate::core::models::structure::Structure;
use crate::engine::config::{AnalysisConfig, CompoundFilter, InterestSelection};
use crate::engine::proximity::{self, Association};
use crate::engine::query::QueryEngine;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument};

/// One residue/dehydron association, flattened for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRecord {
    pub file: String,
    pub residue_name: String,
    pub residue_id: String,
    pub residue_chain: String,
    pub first_id: String,
    pub first_chain: String,
    pub second_id: String,
    pub second_chain: String,
    pub first_distance: f64,
    pub second_distance: f64,
}

impl AssociationRecord {
    fn from_association(file: &str, association: &Association<'_>) -> Self {
        let (first, second) = association.endpoints;
        Self {
            file: file.to_string(),
            residue_name: association.residue.name().to_string(),
            residue_id: association.residue.sequence_id().to_string(),
            residue_chain: chain_label(association.residue.chain_id()),
            first_id: first.sequence_id().to_string(),
            first_chain: chain_label(first.chain_id()),
            second_id: second.sequence_id().to_string(),
            second_chain: chain_label(second.chain_id()),
            first_distance: association.distances.0,
            second_distance: association.distances.1,
        }
    }
}

fn chain_label(chain_id: Option<char>) -> String {
    chain_id.map(String::from).unwrap_or_default()
}

/// Everything learned from one structure file, detached from the parsed structure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileAnalysis {
    pub name: String,
    pub atom_count: usize,
    pub compound_count: usize,
    pub chain_count: usize,
    pub residue_counts: BTreeMap<String, usize>,
    pub phospho_site_count: usize,
    pub residue_of_interest_count: usize,
    pub helix_count: usize,
    pub sheet_count: usize,
    pub adjacent_pair_count: usize,
    /// `None` when no bonds file was available and the dehydron step was skipped.
    pub dehydron_count: Option<usize>,
    pub associations: Vec<AssociationRecord>,
    pub skipped_count: usize,
}

/// Reads a structure file and, when given, its bonds file, then analyzes them.
///
/// # Errors
///
/// Returns [`WorkflowError`] if either file cannot be read or the structure file
/// fails to parse.
#[instrument(skip_all, name = "analyze_workflow", fields(structure = %structure_path.display()))]
pub fn run(
    structure_path: &Path,
    bonds_path: Option<&Path>,
    config: &AnalysisConfig,
) -> Result<FileAnalysis, WorkflowError> {
    let structure = PdbFile
        .read_from_path(structure_path)
        .map_err(|e| WorkflowError::structure(structure_path, e))?;

    let dehydrons = match bonds_path {
        Some(path) => Some(
            BondsFile::new(config.bond_layout, config.duplicate_policy)
                .read_from_path(path)
                .map_err(|e| WorkflowError::bonds(path, e))?,
        ),
        None => None,
    };

    let name = structure_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| structure_path.to_string_lossy().to_string());

    Ok(analyze_structure(&name, &structure, dehydrons.as_deref(), config))
}

/// Analyzes an already parsed structure. `dehydrons` of `None` skips the proximity step.
pub fn analyze_structure(
    name: &str,
    structure: &Structure,
    dehydrons: Option<&[Dehydron]>,
    config: &AnalysisConfig,
) -> FileAnalysis {
    let engine = QueryEngine::new(structure);
    let compounds = engine.compounds();
    let phospho_sites = engine.phospho_sites();
    let residues = residues_of_interest(&engine, config, &phospho_sites);

    let mut analysis = FileAnalysis {
        name: name.to_string(),
        atom_count: structure.atom_count(),
        compound_count: compounds.len(),
        chain_count: engine.chain_ids().len(),
        residue_counts: engine.residue_name_counts(),
        phospho_site_count: phospho_sites.len(),
        residue_of_interest_count: residues.len(),
        helix_count: structure.helices().len(),
        sheet_count: structure.sheets().len(),
        adjacent_pair_count: engine.adjacent_compounds().len(),
        ..FileAnalysis::default()
    };

    if let Some(dehydrons) = dehydrons {
        let report = proximity::analyze(&engine, &residues, dehydrons);
        analysis.dehydron_count = Some(dehydrons.len());
        analysis.skipped_count = report.skipped.len();
        analysis.associations = report
            .associations
            .iter()
            .map(|a| AssociationRecord::from_association(name, a))
            .collect();
    }

    info!(
        file = name,
        compounds = analysis.compound_count,
        phospho_sites = analysis.phospho_site_count,
        associations = analysis.associations.len(),
        "Analyzed structure"
    );
    analysis
}

fn residues_of_interest<'a>(
    engine: &QueryEngine<'a>,
    config: &AnalysisConfig,
    phospho_sites: &[Compound<'a>],
) -> Vec<Compound<'a>> {
    match &config.residues_of_interest {
        InterestSelection::PhosphoSites => phospho_sites.to_vec(),
        InterestSelection::ResidueNames(names) => {
            let filter = CompoundFilter::new().residue_names(names.iter().map(|n| n.trim()));
            engine.compounds_matching(&filter)
        }
    }
}
