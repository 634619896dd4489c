use std::path::PathBuf;

use crate::ai::{encode_board, RandomAgent};
use crate::config::AppConfig;
use crate::error::{GameError, ReplayError};
use crate::game::{Board, GameOutcome, Stone};
use crate::training::episode_log::{EpisodeLog, EpisodeRecord};
use crate::training::replay_buffer::{Batch, ReplayBuffer};
use crate::training::reward::RewardShaper;
use crate::training::symmetry::SymmetryExpander;
use crate::training::transition::Transition;

/// Self-play collection settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    pub episodes: usize,
    pub log_interval: usize,
    pub log_dir: PathBuf,
    /// Fixed move-selection seed; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for CollectConfig {
    fn default() -> Self {
        CollectConfig {
            episodes: 1000,
            log_interval: 100,
            log_dir: PathBuf::from("logs"),
            seed: None,
        }
    }
}

/// Fills a replay buffer from random self-play.
///
/// Each placement is scored with the environment reward (1.0 for the winning
/// move) plus the shaped reward, optionally expanded into its eight symmetric
/// variants, and pushed into the buffer.
pub struct Collector {
    board_size: usize,
    episodes: usize,
    /// Episodes between progress lines; `0` disables them.
    log_interval: usize,
    batch_size: usize,
    augment: bool,
    shaper: RewardShaper,
    expander: SymmetryExpander,
    buffer: ReplayBuffer,
    agent: RandomAgent,
}

impl Collector {
    pub fn new(config: &AppConfig) -> Self {
        let agent = match config.collect.seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        };
        Collector {
            board_size: config.board.size,
            episodes: config.collect.episodes,
            log_interval: config.collect.log_interval,
            batch_size: config.replay.batch_size,
            augment: config.replay.augment_symmetries,
            shaper: RewardShaper::new(config.rewards.clone()),
            expander: SymmetryExpander::new(config.board.size),
            buffer: ReplayBuffer::from_config(&config.replay),
            agent,
        }
    }

    pub fn buffer(&self) -> &ReplayBuffer {
        &self.buffer
    }

    /// Draw one training batch of the configured size.
    pub fn sample_batch(&mut self) -> Result<Batch, ReplayError> {
        self.buffer.sample(self.batch_size)
    }

    /// Play every configured episode, recording each one in `log`.
    pub fn run(&mut self, log: &mut EpisodeLog) -> Result<(), GameError> {
        let mut black_wins = 0;
        let mut white_wins = 0;
        let mut draws = 0;

        log::info!(
            "Collecting {} episodes on a {}x{} board (symmetry augmentation: {})",
            self.episodes,
            self.board_size,
            self.board_size,
            self.augment
        );

        for episode in 1..=self.episodes {
            let (record, outcome) = self.play_episode(episode)?;
            match outcome {
                GameOutcome::Winner(Stone::Black) => black_wins += 1,
                GameOutcome::Winner(Stone::White) => white_wins += 1,
                GameOutcome::Draw => draws += 1,
            }
            log.log_episode(record);

            if self.log_interval > 0 && episode % self.log_interval == 0 {
                log::info!(
                    "Episode {}/{} | buffer: {}/{} | black: {} | white: {} | draw: {}",
                    episode,
                    self.episodes,
                    self.buffer.len(),
                    self.buffer.capacity(),
                    black_wins,
                    white_wins,
                    draws,
                );
                black_wins = 0;
                white_wins = 0;
                draws = 0;
            }
        }

        Ok(())
    }

    /// Play one random self-play game and store its transitions.
    pub fn play_episode(&mut self, episode: usize) -> Result<(EpisodeRecord, GameOutcome), GameError> {
        let n = self.board_size;
        let mut board = Board::new(n);
        let mut to_move = Stone::Black;
        let mut total_reward = 0.0;
        let mut moves = 0;

        let outcome = loop {
            let Some(action) = self.agent.select_action(&board) else {
                break GameOutcome::Draw;
            };
            let (row, col) = (action / n, action % n);

            let state = encode_board(&board, to_move);
            board.place(row, col, to_move.to_cell())?;
            moves += 1;

            let won = board.check_win(row, col);
            let done = won || board.is_full();
            let env_reward = if won { 1.0 } else { 0.0 };
            let reward = env_reward + self.shaper.shape(&board, row, col, to_move, to_move.other());
            total_reward += reward;

            self.store(Transition {
                state,
                action,
                reward,
                next_state: (!done).then(|| encode_board(&board, to_move.other())),
                done,
            });

            if won {
                break GameOutcome::Winner(to_move);
            }
            if done {
                break GameOutcome::Draw;
            }
            to_move = to_move.other();
        };

        log::debug!(
            "episode {} finished after {} moves: {} (reward {:.3})",
            episode,
            moves,
            outcome.label(),
            total_reward
        );

        let record = EpisodeRecord {
            episode,
            outcome: outcome.label().to_string(),
            reward: total_reward,
            loss: None,
            // the random policy always explores
            epsilon: 1.0,
            buffer: self.buffer.len(),
        };
        Ok((record, outcome))
    }

    fn store(&mut self, transition: Transition) {
        if self.augment {
            for variant in self.expander.expand(&transition) {
                self.buffer.push(variant);
            }
        } else {
            self.buffer.push(transition);
        }
    }
}
