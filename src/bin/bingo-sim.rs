//! Command-line Bingo simulation.
//!
//! ```text
//! bingo-sim --iterations 100000 --seed 7 --parallel
//! bingo-sim --config run.toml --json --save-scores out/scores.bin
//! ```
//!
//! Log level comes from `BINGO_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bingo_sim::{simulate, ScoreFile, SimulationConfig};

/// Estimate the distribution of the round at which a random Bingo card wins.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of cards to simulate
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Number of distinct call values
    #[arg(short, long)]
    max_num: Option<u32>,

    /// Root seed; defaults to the config file value, or a random seed without one
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run trials on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Print a JSON report instead of the summary line
    #[arg(long)]
    json: bool,

    /// Save raw scores to this bincode file
    #[arg(long)]
    save_scores: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env("BINGO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_config(args: &Args) -> anyhow::Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulationConfig::new().with_seed(rand::random()),
    };

    if let Some(iterations) = args.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(max_num) = args.max_num {
        config = config.with_max_num(max_num);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.parallel {
        config = config.with_parallel(true);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = build_config(&args)?;
    info!(seed = config.seed, "using seed");

    let result = simulate(config)?;
    info!(
        trials_per_second = result.trials_per_second() as u64,
        "throughput"
    );

    if let Some(path) = &args.save_scores {
        ScoreFile::from(&result)
            .save(path)
            .with_context(|| format!("saving scores to {}", path.display()))?;
        info!(path = %path.display(), "scores saved");
    }

    let Some(stats) = result.statistics() else {
        println!("no trials run");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{} {}", stats.mean, stats.std_dev);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(flags: &[&str]) -> Args {
        Args::parse_from(std::iter::once("bingo-sim").chain(flags.iter().copied()))
    }

    fn write_config(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("run.toml");
        std::fs::write(
            &path,
            "iterations = 500\nmax_num = 60\nseed = 11\nparallel = false\nchunk_size = 64\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_config_file_values_kept_without_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir);

        let config = build_config(&parse(&["--config", path.to_str().unwrap()])).unwrap();
        assert_eq!(config, SimulationConfig::from_toml_file(&path).unwrap());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir);

        let args = parse(&[
            "-c",
            path.to_str().unwrap(),
            "-n",
            "2000",
            "--max-num",
            "90",
            "--seed",
            "5",
            "--parallel",
        ]);
        let config = build_config(&args).unwrap();

        assert_eq!(config.iterations, 2000);
        assert_eq!(config.max_num, 90);
        assert_eq!(config.seed, 5);
        assert!(config.parallel);
        assert_eq!(config.chunk_size, 64);
    }

    #[test]
    fn test_flags_apply_without_config_file() {
        let config = build_config(&parse(&["-m", "30", "-p", "-s", "3"])).unwrap();

        assert_eq!(config.max_num, 30);
        assert!(config.parallel);
        assert_eq!(config.seed, 3);
        assert_eq!(config.iterations, SimulationConfig::default().iterations);
    }

    #[test]
    fn test_seed_is_random_without_flag_or_file() {
        let seeds: Vec<u64> = (0..4)
            .map(|_| build_config(&parse(&[])).unwrap().seed)
            .collect();

        // Equal draws every time would mean a fixed seed.
        assert!(seeds.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let err = build_config(&parse(&["--config", missing.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
