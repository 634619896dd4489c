use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::EpisodeLogError;

/// Column order of `training.csv`.
pub const COLUMNS: [&str; 6] = ["episode", "outcome", "reward", "loss", "epsilon", "buffer"];

/// Per-episode statistics owned by the training loop.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeRecord {
    pub episode: usize,
    pub outcome: String,
    pub reward: f32,
    /// Absent when no learning update ran during the episode.
    pub loss: Option<f32>,
    pub epsilon: f32,
    /// Replay buffer occupancy at the end of the episode.
    pub buffer: usize,
}

/// Accumulates episode records and writes them as CSV.
pub struct EpisodeLog {
    log_dir: PathBuf,
    records: Vec<EpisodeRecord>,
}

impl EpisodeLog {
    /// The directory is not created here; `save` creates it on first write.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        EpisodeLog {
            log_dir: log_dir.into(),
            records: Vec::new(),
        }
    }

    pub fn log_episode(&mut self, record: EpisodeRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[EpisodeRecord] {
        &self.records
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Write every record to `<log_dir>/training.csv`, replacing any previous
    /// file. Returns `None` without touching the filesystem when nothing was
    /// logged.
    pub fn save(&self) -> Result<Option<PathBuf>, EpisodeLogError> {
        if self.records.is_empty() {
            return Ok(None);
        }

        std::fs::create_dir_all(&self.log_dir).map_err(|e| EpisodeLogError::CreateDir {
            path: self.log_dir.clone(),
            source: e,
        })?;

        let path = self.log_dir.join("training.csv");
        std::fs::write(&path, self.to_csv()).map_err(|e| EpisodeLogError::Write {
            path: path.clone(),
            source: e,
        })?;

        log::info!("saved {} episode records to {}", self.records.len(), path.display());
        Ok(Some(path))
    }

    fn to_csv(&self) -> String {
        let mut out = COLUMNS.join(",");
        out.push('\n');
        for r in &self.records {
            let loss = r.loss.map(|l| l.to_string()).unwrap_or_default();
            // writing into a String cannot fail
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                r.episode, r.outcome, r.reward, loss, r.epsilon, r.buffer
            );
        }
        out
    }
}
