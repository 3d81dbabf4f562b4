use crate::cli::BatchArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use crate::utils::summary::format_summary;
use desolv::engine::progress::ProgressReporter;
use desolv::workflows::{batch, report};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: BatchArgs, config_path: Option<&Path>) -> Result<()> {
    let config = config::build_config(&args.overrides, config_path)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Scanning {:?} for structure files", &args.dir);
    let result = batch::run(&args.dir, &config, &reporter)?;

    if result.files.is_empty() {
        warn!("No structure files found in {:?}", &args.dir);
        println!(
            "Warning: no structure files found in {}",
            args.dir.display()
        );
        return Ok(());
    }

    print!("{}", format_summary(&result.summary));
    for (path, error) in result.failures() {
        eprintln!("  ✗ {}: {}", path.display(), error);
    }

    if let Some(output) = &args.output {
        let paths = report::write_reports(output, result.analyses())?;
        println!(
            "✓ Associations written to: {}",
            paths.associations.display()
        );
        println!(
            "✓ Residue counts written to: {}",
            paths.residue_counts.display()
        );
    }

    Ok(())
}
