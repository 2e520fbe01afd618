mod cli;

use clap::Parser;
use psidash::derive::{Visualization, VisualizationKind};
use psidash::engine::{self, FileStore, ScoreEngine, TierClassifier};
use psidash::error::PsiError;
use psidash::source::{self, SourceOutcome};
use psidash::types::config::{PsiConfig, ReportFormatConfig};
use psidash::{analyze, config, logging, report};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, PsiError> {
    let cli = cli::Cli::parse();
    let loaded = config::load_config(&cli.root)?;
    let has_config = loaded.is_some();
    let cfg = loaded.unwrap_or_default();
    logging::init(&logging::resolve(
        cli.verbose,
        cli.quiet,
        cfg.log_level(),
        cfg.log_json(),
    ));
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        root = %cli.root.display(),
        config = has_config,
        "psidash starting"
    );

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let mut rng = make_rng(cmd.seed.or(cfg.seed()));
            let Some(domain) = engine::normalize_web(&cmd.url) else {
                return Ok(invalid_url(&cmd.url));
            };

            let outcome = if cmd.mock {
                SourceOutcome::mock()
            } else if let Some(path) = &cmd.pagespeed_report {
                source::resolve_report_file(path)
            } else {
                let store_path = store_path(&cli.root, cmd.store.as_deref(), &cfg);
                let mut store = FileStore::open(&store_path)?;
                let scores =
                    score_engine(&cfg).get_or_create_for(&mut store, &mut rng, &domain)?;
                SourceOutcome::simulated(scores)
            };

            let analysis = analyze::build_report(&cmd.url, Some(&domain), outcome, &mut rng);
            let format = match (cmd.format, cfg.report_format()) {
                (Some(cli::ReportFormat::Json), _) | (None, Some(ReportFormatConfig::Json)) => {
                    report::OutputFormat::Json
                }
                _ => report::OutputFormat::Md,
            };
            println!("{}", report::render(&analysis, format)?);

            if analysis.mocked {
                eprintln!("warning: PageSpeed data unavailable, mock scores were used");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Domain(cmd) => match engine::normalize(&cmd.url) {
            Some(domain) => {
                println!("{domain}");
                Ok(exit_code::SUCCESS)
            }
            None => Ok(invalid_url(&cmd.url)),
        },
        cli::Commands::Derive(cmd) => {
            let mut rng = make_rng(cmd.seed.or(cfg.seed()));
            let kind = match cmd.kind {
                cli::VisualizationArg::Vitals => VisualizationKind::Vitals,
                cli::VisualizationArg::Breakdown => VisualizationKind::Breakdown,
                cli::VisualizationArg::Waterfall => VisualizationKind::Waterfall,
                cli::VisualizationArg::Overlay => VisualizationKind::Overlay,
                cli::VisualizationArg::Dependencies => VisualizationKind::Dependencies,
            };
            let visualization = Visualization::derive(kind, cmd.score, &mut rng);
            println!("{}", serde_json::to_string_pretty(&visualization)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Cache(cli::CacheCommand::List(cmd)) => {
            let store_path = store_path(&cli.root, cmd.store.as_deref(), &cfg);
            let store = FileStore::open(&store_path)?;
            let mut entries = store.entries().peekable();
            if entries.peek().is_none() {
                println!("cache: no entries in {}", store.path().display());
                return Ok(exit_code::SUCCESS);
            }
            for (key, value) in entries {
                println!("{key} {value}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn score_engine(cfg: &PsiConfig) -> ScoreEngine {
    ScoreEngine::new(
        TierClassifier::with_extra_top_sites(cfg.extra_top_sites()),
        cfg.key_prefix(),
    )
}

fn store_path(root: &Path, flag: Option<&Path>, cfg: &PsiConfig) -> PathBuf {
    match flag {
        Some(path) => path.to_path_buf(),
        None => config::resolve_path(root, cfg.store_path()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn invalid_url(url: &str) -> i32 {
    eprintln!("error: {}", PsiError::InvalidUrl(url.to_string()));
    exit_code::INVALID_INPUT
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
