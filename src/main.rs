use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use lexcover::config::AppConfig;
use lexcover::core::coverage::{parse_target_list, CoverageReport, EnglishCoverageEngine};

/// Check which target words and phrases occur in a transcript.
#[derive(Debug, Parser)]
#[command(name = "lexcover", version, about)]
struct Cli {
    /// Transcript file, or `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    transcript: PathBuf,

    /// Target word or phrase (repeatable)
    #[arg(short = 'w', long = "target", value_name = "ITEM")]
    targets: Vec<String>,

    /// File with one target per line (commas also separate)
    #[arg(long, value_name = "FILE")]
    targets_file: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/lexcover/config.toml)
    #[arg(short, long, value_name = "FILE", env = "LEXCOVER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the maximum verb/particle gap
    #[arg(long, value_name = "N")]
    max_gap: Option<usize>,

    /// Include how each target matched
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit --config must load; the default location falls back to
    // defaults, with the failure logged once the subscriber exists.
    let (mut config, load_error) = match &cli.config {
        Some(path) => (
            AppConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None,
        ),
        None => match AppConfig::load() {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(e)),
        },
    };
    if let Some(max_gap) = cli.max_gap {
        config.coverage.max_gap = max_gap;
    }

    let _log_guard = lexcover::core::logging::init(&config.logging);
    tracing::debug!("lexcover v{} starting", lexcover::VERSION);
    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load config at {}: {e}, using defaults",
            AppConfig::config_path().display()
        );
    }

    let engine =
        EnglishCoverageEngine::new(&config.coverage).context("Invalid coverage configuration")?;

    let transcript = read_transcript(&cli.transcript)?;

    let mut targets = cli.targets;
    if let Some(path) = &cli.targets_file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read targets from {}", path.display()))?;
        targets.extend(parse_target_list(&contents));
    }
    if targets.is_empty() {
        bail!("No targets given; use --target or --targets-file");
    }

    let report = if cli.explain {
        CoverageReport::build_explained(&engine, &transcript, &targets)
    } else {
        CoverageReport::build(&engine, &transcript, &targets)
    };
    tracing::info!(
        covered = report.covered,
        total = report.total,
        "Coverage computed"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn read_transcript(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read transcript from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript from {}", path.display()))
    }
}
