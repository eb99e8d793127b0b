use clap::Parser;
use orchestrator::config::{OrchestratorConfig, DEFAULT_OUTPUT_ROOT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pp-orchestrator", bin_name = "pp-orchestrator", version)]
#[command(
    about = "Guided Power Platform solution generator (expense approval demonstration)",
    long_about = None
)]
pub struct Cli {
    /// Directory that receives the generated solution folders
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_ROOT)]
    pub output_dir: PathBuf,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// List the known solution patterns and exit
    #[arg(long)]
    pub list_patterns: bool,
}

impl Cli {
    pub fn config(&self) -> OrchestratorConfig {
        OrchestratorConfig::default()
            .with_output_root(&self.output_dir)
            .with_verbose(self.verbose)
    }
}
