use super::analyze::{self, FileAnalysis};
use super::error::WorkflowError;
use super::report::AnalysisSummary;
use crate::engine::config::AnalysisConfig;
use crate::engine::progress::{Progress, ProgressReporter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

const STRUCTURE_EXTENSION: &str = "pdb";
const BONDS_SUFFIX: &str = "_bonds.txt";

#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileAnalysis, WorkflowError>,
}

#[derive(Debug)]
pub struct BatchResult {
    pub files: Vec<FileOutcome>,
    pub summary: AnalysisSummary,
}

impl BatchResult {
    pub fn analyses(&self) -> impl Iterator<Item = &FileAnalysis> {
        self.files.iter().filter_map(|f| f.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &WorkflowError)> {
        self.files
            .iter()
            .filter_map(|f| f.result.as_ref().err().map(|e| (f.path.as_path(), e)))
    }
}

/// Structure files directly inside `dir`, sorted by path.
pub fn find_structure_files(dir: &Path) -> Result<Vec<PathBuf>, WorkflowError> {
    let entries = fs::read_dir(dir).map_err(|e| WorkflowError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| WorkflowError::io(dir, e))?.path();
        let is_structure = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(STRUCTURE_EXTENSION));
        if is_structure && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// The companion bonds file of a structure file: `NAME.pdb` pairs with `NAME_bonds.txt`.
pub fn bonds_path_for(structure_path: &Path) -> PathBuf {
    let stem = structure_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    structure_path.with_file_name(format!("{stem}{BONDS_SUFFIX}"))
}

/// Analyzes every structure file in `dir`. One file failing never stops the others.
#[instrument(skip_all, name = "batch_workflow", fields(dir = %dir.display()))]
pub fn run(
    dir: &Path,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<BatchResult, WorkflowError> {
    let paths = find_structure_files(dir)?;
    info!(files = paths.len(), "Starting batch analysis");
    reporter.report(Progress::BatchStart {
        total_files: paths.len() as u64,
    });

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        reporter.report(Progress::FileStart { name: name.clone() });

        let bonds_path = bonds_path_for(&path);
        let bonds = if bonds_path.is_file() {
            Some(bonds_path.as_path())
        } else {
            warn!(
                structure = %path.display(),
                bonds = %bonds_path.display(),
                "No bonds file found; skipping dehydron analysis"
            );
            let message = format!("{name}: no bonds file, dehydron analysis skipped");
            reporter.report(Progress::Message(message));
            None
        };

        let result = analyze::run(&path, bonds, config);
        if let Err(e) = &result {
            warn!(file = %path.display(), error = %e, "Failed to analyze file");
        }
        reporter.report(Progress::FileFinish {
            success: result.is_ok(),
        });
        files.push(FileOutcome { path, result });
    }

    let summary = AnalysisSummary::from_results(files.iter().map(|f| &f.result));
    reporter.report(Progress::BatchFinish);
    info!(
        processed = summary.files_processed,
        failed = summary.files_failed,
        "Batch analysis finished"
    );
    Ok(BatchResult { files, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    const SEP_CA: &str =
        "HETATM    1  CA  SEP A   3       2.000   0.000   0.000  1.00  0.00           C\n";

    #[test]
    fn bonds_path_uses_companion_naming() {
        assert_eq!(
            bonds_path_for(Path::new("/data/1abc.pdb")),
            PathBuf::from("/data/1abc_bonds.txt")
        );
    }

    #[test]
    fn finds_only_structure_files_in_sorted_order() {
        let dir = tempdir().unwrap();
        for name in ["b.pdb", "a.PDB", "a_bonds.txt", "notes.md"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdb")).unwrap();

        let files = find_structure_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.PDB", "b.pdb"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let result = find_structure_files(&dir.path().join("absent"));
        assert!(matches!(result, Err(WorkflowError::Io { .. })));
    }

    #[test]
    fn one_bad_file_does_not_abort_the_batch() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("good.pdb"), SEP_CA).unwrap();
        fs::write(
            dir.path().join("bad.pdb"),
            "ATOM      1  CA  ALA A   1       x.xxx   0.000   0.000\n",
        )
        .unwrap();

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let result = run(dir.path(), &AnalysisConfig::default(), &reporter).unwrap();
        drop(reporter);

        assert_eq!(result.files.len(), 2);
        assert_eq!(result.summary.files_processed, 1);
        assert_eq!(result.summary.files_failed, 1);
        assert_eq!(result.summary.total_phospho_sites, 1);

        let failures: Vec<_> = result.failures().collect();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].0.ends_with("bad.pdb"));

        let good = result.analyses().next().unwrap();
        assert_eq!(good.name, "good.pdb");
        assert_eq!(good.dehydron_count, None);

        let events = events.into_inner().unwrap();
        assert!(matches!(
            events.first(),
            Some(Progress::BatchStart { total_files: 2 })
        ));
        assert!(matches!(events.last(), Some(Progress::BatchFinish)));
        let finished = events
            .iter()
            .filter(|e| matches!(e, Progress::FileFinish { .. }))
            .count();
        assert_eq!(finished, 2);

        let messages: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                Progress::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("bad.pdb"));
        assert!(messages[1].starts_with("good.pdb: no bonds file"));
    }

    #[test]
    fn companion_bonds_file_enables_dehydron_analysis() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1abc.pdb"), SEP_CA).unwrap();
        fs::write(dir.path().join("1abc_bonds.txt"), "no bonds here\n").unwrap();

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let result = run(dir.path(), &AnalysisConfig::default(), &reporter).unwrap();
        drop(reporter);

        let analysis = result.analyses().next().unwrap();
        assert_eq!(analysis.dehydron_count, Some(0));
        assert_eq!(result.summary.files_processed, 1);
        assert_eq!(result.summary.total_dehydrons, 0);

        let events = events.into_inner().unwrap();
        assert!(!events.iter().any(|e| matches!(e, Progress::Message(_))));
    }
}
