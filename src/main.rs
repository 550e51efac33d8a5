//! repo-report - layout and statistics reports for Git repositories
//!
//! This is the main entry point for the repo-report command-line interface.

use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use repo_report::progress;
use repo_report::repo::Repo;
use repo_report::report::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "repo-report", version)]
#[command(about = "Report layout properties and statistics of a Git repository")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print static layout properties for the requested keys
    Info {
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Synonym for --format=nul
        #[arg(short = 'z')]
        nul_terminated: bool,

        /// Field keys to resolve, in output order
        keys: Vec<String>,
    },

    /// Count references by kind and reachable objects by type
    Stats {
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Show progress on stderr
        #[arg(long, overrides_with = "no_progress")]
        progress: bool,

        /// Never show progress
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Info {
            format,
            nul_terminated,
            keys,
        } => cmd_info(format, nul_terminated, &keys),
        Command::Stats {
            format,
            progress,
            no_progress,
        } => cmd_stats(format, progress, no_progress),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_info(
    format: Option<OutputFormat>,
    nul_terminated: bool,
    keys: &[String],
) -> Result<ExitCode, Box<dyn Error>> {
    let format = if nul_terminated {
        OutputFormat::Nul
    } else {
        format.unwrap_or(OutputFormat::Keyvalue)
    };
    if !format.supports_info() {
        return Err("unsupported output format".into());
    }

    let repo = Repo::discover(".")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for (key, value) in report::resolve(keys.iter().map(String::as_str), &repo) {
        match value {
            Ok(value) => report::write_value(&mut out, format, key, &value)?,
            Err(e) => {
                failed = true;
                eprintln!("error: {e}");
            }
        }
    }
    out.flush()?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_stats(
    format: Option<OutputFormat>,
    progress: bool,
    no_progress: bool,
) -> Result<ExitCode, Box<dyn Error>> {
    let format = format.unwrap_or(OutputFormat::Table);
    let show_progress = if no_progress {
        false
    } else {
        progress || io::stderr().is_terminal()
    };

    let repo = Repo::discover(".")?;
    let refs = repo.classified_refs()?;

    let mut sink = progress::sink_for(show_progress);
    let stats = report::collect(&repo, &refs, sink.as_mut())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format.delimiters() {
        None => report::stats_table(&stats).write(&mut out)?,
        Some((key_delim, record_delim)) => {
            report::write_stats(&mut out, &stats, key_delim, record_delim)?
        }
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
