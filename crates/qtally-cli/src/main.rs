use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use qtally_core::{extract, render, Config, Result, SourceText, Tally};

mod args;
use args::{Cli, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        handle_completions(shell);
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.clone());

    if cli.init_config {
        let path = Config::init(&config_path)?;
        println!("Config written: {}", path.display().to_string().cyan());
        return Ok(());
    }

    let config = Config::load(&config_path)?;

    let source_path = cli.file.clone().unwrap_or_else(|| config.input.path.clone());
    let threshold = cli.threshold.unwrap_or(config.report.threshold);

    let source = SourceText::load(&source_path)?;

    if cli.verbose {
        eprintln!(
            "{} {} ({} bytes)",
            "[SOURCE]".cyan().bold(),
            source.path.display(),
            source.len()
        );
        eprintln!("{} threshold = {}", "[REPORT]".cyan().bold(), threshold);
    }

    let tally = Tally::from_labels(extract(source.as_str()));

    for line in render(&tally, threshold) {
        println!("{}", line);
    }

    Ok(())
}

/// CLI flag wins over the working-directory default.
fn resolve_config_path(cli_config: Option<PathBuf>) -> PathBuf {
    cli_config.unwrap_or_else(Config::default_path)
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "qtally", &mut io::stdout());
}
