use crate::cli::AnalyzeArgs;
use crate::config;
use crate::error::Result;
use crate::utils::summary::format_analysis;
use desolv::workflows::{analyze, report};
use std::path::Path;
use tracing::info;

pub fn run(args: AnalyzeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = config::build_config(&args.overrides, config_path)?;

    info!("Analyzing structure {:?}", &args.structure);
    let analysis = analyze::run(&args.structure, args.bonds.as_deref(), &config)?;
    print!("{}", format_analysis(&analysis));

    if let Some(output) = &args.output {
        let paths = report::write_reports(output, [&analysis])?;
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
