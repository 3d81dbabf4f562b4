use super::analyze::{AssociationRecord, FileAnalysis};
use super::error::WorkflowError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ASSOCIATIONS_FILE_NAME: &str = "associations.csv";
pub const RESIDUE_COUNTS_FILE_NAME: &str = "residue_counts.csv";

#[derive(Debug, Serialize)]
struct ResidueCountRecord<'a> {
    residue_name: &'a str,
    count: usize,
}

/// Totals over a set of analyzed files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_phospho_sites: usize,
    pub total_associations: usize,
    pub total_dehydrons: usize,
    pub residue_counts: BTreeMap<String, usize>,
}

impl AnalysisSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, analysis: &FileAnalysis) {
        self.files_processed += 1;
        self.total_phospho_sites += analysis.phospho_site_count;
        self.total_associations += analysis.associations.len();
        self.total_dehydrons += analysis.dehydron_count.unwrap_or(0);
        for (name, count) in &analysis.residue_counts {
            *self.residue_counts.entry(name.clone()).or_insert(0) += count;
        }
    }

    pub fn record_failure(&mut self) {
        self.files_failed += 1;
    }

    pub fn from_results<'r, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'r Result<FileAnalysis, WorkflowError>>,
    {
        results
            .into_iter()
            .fold(Self::new(), |mut summary, result| {
                match result {
                    Ok(analysis) => summary.record(analysis),
                    Err(_) => summary.record_failure(),
                }
                summary
            })
    }
}

pub fn write_associations<W: io::Write>(
    writer: W,
    records: &[AssociationRecord],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    if records.is_empty() {
        writer.write_record([
            "file",
            "residue_name",
            "residue_id",
            "residue_chain",
            "first_id",
            "first_chain",
            "second_id",
            "second_chain",
            "first_distance",
            "second_distance",
        ])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_residue_counts<W: io::Write>(
    writer: W,
    counts: &BTreeMap<String, usize>,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    if counts.is_empty() {
        writer.write_record(["residue_name", "count"])?;
    }
    for (name, count) in counts {
        writer.serialize(ResidueCountRecord {
            residue_name: name,
            count: *count,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Paths of the reports written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub associations: PathBuf,
    pub residue_counts: PathBuf,
}

/// Writes the associations of every analysis and the merged residue counts into
/// `output_dir`, creating the directory if needed.
pub fn write_reports<'r, I>(output_dir: &Path, analyses: I) -> Result<ReportPaths, WorkflowError>
where
    I: IntoIterator<Item = &'r FileAnalysis>,
{
    fs::create_dir_all(output_dir).map_err(|e| WorkflowError::io(output_dir, e))?;

    let mut records = Vec::new();
    let mut summary = AnalysisSummary::new();
    for analysis in analyses {
        records.extend(analysis.associations.iter().cloned());
        summary.record(analysis);
    }

    let paths = ReportPaths {
        associations: output_dir.join(ASSOCIATIONS_FILE_NAME),
        residue_counts: output_dir.join(RESIDUE_COUNTS_FILE_NAME),
    };
    let counts = &summary.residue_counts;
    write_csv(&paths.associations, |f| write_associations(f, &records))?;
    write_csv(&paths.residue_counts, |f| write_residue_counts(f, counts))?;

    info!(
        dir = %output_dir.display(),
        associations = records.len(),
        "Wrote reports"
    );
    Ok(paths)
}

fn write_csv<F>(path: &Path, write: F) -> Result<(), WorkflowError>
where
    F: FnOnce(fs::File) -> Result<(), csv::Error>,
{
    let file = fs::File::create(path).map_err(|e| WorkflowError::io(path, e))?;
    write(file).map_err(|e| WorkflowError::csv(path, e))
}
