//! Experience management: transitions, the replay buffer, D4 symmetry
//! augmentation, reward shaping, and the self-play collector that wires them
//! together.

pub mod collector;
pub mod episode_log;
pub mod replay_buffer;
pub mod reward;
pub mod symmetry;
pub mod transition;

pub use collector::{CollectConfig, Collector};
pub use episode_log::{EpisodeLog, EpisodeRecord};
pub use replay_buffer::{Batch, ReplayBuffer, ReplayConfig};
pub use reward::{RewardComponents, RewardConfig, RewardShaper};
pub use symmetry::{Symmetry, SymmetryExpander, SYMMETRIES};
pub use transition::Transition;
