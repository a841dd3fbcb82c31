pub mod cli;
pub mod toml_config;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "kwrank")]
#[command(about = "Competitor keyword analysis: fetch SEMrush data, score and rank PPC candidates")]
pub struct CliConfig {
    /// Path to the TOML campaign configuration
    #[arg(long, short, default_value = "kwrank.toml")]
    pub config: String,

    /// Override the configured output directory
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
