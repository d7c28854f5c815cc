pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-deob")]
#[command(about = "Best-effort cosmetic cleanup for obfuscated script source")]
pub struct CliConfig {
    /// Input file; reads stdin when omitted or `-`
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the cleaned text to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the full result (text and techniques) as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output and list applied techniques on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Log elapsed time and memory usage
    #[arg(long)]
    pub monitor: bool,
}
