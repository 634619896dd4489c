use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ml_gomoku::config::AppConfig;
use ml_gomoku::training::{Collector, EpisodeLog};

/// Fill a replay buffer from random Gomoku self-play.
#[derive(Parser)]
#[command(name = "collect", about = "Collect Gomoku self-play experience into a replay buffer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of episodes
    #[arg(long)]
    episodes: Option<usize>,

    /// Seed both move selection and replay sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Override the sample batch size
    #[arg(long)]
    batch_size: Option<usize>,

    /// Store only the observed transition, not its symmetric variants
    #[arg(long)]
    no_symmetry: bool,

    /// Override the episode log directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(episodes) = cli.episodes {
        config.collect.episodes = episodes;
    }
    if let Some(seed) = cli.seed {
        config.collect.seed = Some(seed);
        config.replay.seed = Some(seed);
    }
    if let Some(batch_size) = cli.batch_size {
        config.replay.batch_size = batch_size;
    }
    if cli.no_symmetry {
        config.replay.augment_symmetries = false;
    }
    if let Some(log_dir) = cli.log_dir {
        config.collect.log_dir = log_dir;
    }
    config.validate().context("validating config after CLI overrides")?;

    let mut collector = Collector::new(&config);
    let mut log = EpisodeLog::new(&config.collect.log_dir);
    collector.run(&mut log).context("collecting self-play episodes")?;

    let buffered = collector.buffer().len();
    if buffered >= config.replay.batch_size {
        let batch = collector.sample_batch().context("sampling a batch")?;
        let terminal = batch.dones.iter().filter(|&&d| d).count();
        let mean_reward = batch.rewards.iter().sum::<f32>() / batch.len() as f32;
        log::info!(
            "Sampled {} of {} transitions | terminal: {} | mean reward: {:.4}",
            batch.len(),
            buffered,
            terminal,
            mean_reward
        );
    } else {
        log::warn!(
            "buffer holds {} transitions, fewer than batch size {}; skipping sample",
            buffered,
            config.replay.batch_size
        );
    }

    log.save().context("saving episode log")?;
    Ok(())
}
