use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "qtally")]
#[command(about = "Category coverage auditor for question bank sources")]
#[command(version)]
pub struct Cli {
    /// Source file to scan (default: input.path from config)
    pub file: Option<PathBuf>,

    /// Insufficient-category threshold (default: report.threshold from config)
    #[arg(short, long)]
    pub threshold: Option<u64>,

    /// Config file (default: ./qtally.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Verbose diagnostics (stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
