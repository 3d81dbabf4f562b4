use crate::cli::InfoArgs;
use crate::error::Result;
use crate::utils::summary::format_analysis;
use desolv::engine::config::AnalysisConfig;
use desolv::workflows::analyze;
use tracing::info;

pub fn run(args: InfoArgs) -> Result<()> {
    info!("Loading structure {:?}", &args.structure);
    let analysis = analyze::run(&args.structure, None, &AnalysisConfig::default())?;
    print!("{}", format_analysis(&analysis));
    Ok(())
}
