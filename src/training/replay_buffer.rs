use burn::prelude::*;
use burn::tensor::TensorData;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::error::ReplayError;
use crate::tensor::{stack_batch, BoardTensor};
use crate::training::transition::Transition;

/// Replay buffer settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub capacity: usize,
    pub batch_size: usize,
    /// Push all eight symmetric variants of every transition.
    pub augment_symmetries: bool,
    /// Fixed sampling seed; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            capacity: 100_000,
            batch_size: 64,
            augment_symmetries: true,
            seed: None,
        }
    }
}

/// Fixed-capacity ring buffer of transitions with FIFO eviction.
///
/// Not synchronized: `push` and `sample` take `&mut self`, so sharing one
/// buffer across threads needs an external lock.
pub struct ReplayBuffer {
    buffer: Vec<Transition>,
    capacity: usize,
    position: usize,
    rng: StdRng,
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, StdRng::from_os_rng())
    }

    /// Buffer whose sampling sequence is reproducible.
    pub fn with_seed(capacity: usize, seed: u64) -> Self {
        Self::with_rng(capacity, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &ReplayConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.capacity, seed),
            None => Self::new(config.capacity),
        }
    }

    fn with_rng(capacity: usize, rng: StdRng) -> Self {
        assert!(capacity > 0, "replay capacity must be positive");
        ReplayBuffer {
            buffer: Vec::with_capacity(capacity),
            capacity,
            position: 0,
            rng,
        }
    }

    /// Add a transition to the buffer. Overwrites the oldest when full.
    pub fn push(&mut self, transition: Transition) {
        if self.buffer.len() < self.capacity {
            self.buffer.push(transition);
        } else {
            self.buffer[self.position] = transition;
        }
        self.position = (self.position + 1) % self.capacity;
    }

    /// Sample `batch_size` distinct transitions uniformly at random.
    pub fn sample(&mut self, batch_size: usize) -> Result<Batch, ReplayError> {
        let available = self.buffer.len();
        if batch_size > available {
            return Err(ReplayError::InsufficientData {
                requested: batch_size,
                available,
            });
        }

        let indices = index::sample(&mut self.rng, available, batch_size);
        let mut batch = Batch::with_capacity(batch_size);
        for i in indices.iter() {
            batch.push(&self.buffer[i]);
        }
        Ok(batch)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A sampled batch as five parallel, equal-length columns.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub states: Vec<BoardTensor>,
    pub actions: Vec<usize>,
    pub rewards: Vec<f32>,
    pub next_states: Vec<Option<BoardTensor>>,
    pub dones: Vec<bool>,
}

impl Batch {
    fn with_capacity(n: usize) -> Self {
        Batch {
            states: Vec::with_capacity(n),
            actions: Vec::with_capacity(n),
            rewards: Vec::with_capacity(n),
            next_states: Vec::with_capacity(n),
            dones: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, t: &Transition) {
        self.states.push(t.state.clone());
        self.actions.push(t.action);
        self.rewards.push(t.reward);
        self.next_states.push(t.next_state.clone());
        self.dones.push(t.done);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Done flags as `1.0` / `0.0`.
    pub fn done_mask(&self) -> Vec<f32> {
        self.dones.iter().map(|&d| if d { 1.0 } else { 0.0 }).collect()
    }

    /// States as `[batch, channels, N, N]`; `None` for an empty batch.
    pub fn states_tensor<B: Backend>(&self, device: &B::Device) -> Option<Tensor<B, 4>> {
        stack_batch(&self.states, device)
    }

    pub fn actions_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 1, Int> {
        let actions: Vec<i64> = self.actions.iter().map(|&a| a as i64).collect();
        Tensor::<B, 1, Int>::from_data(TensorData::from(actions.as_slice()), device)
    }

    pub fn rewards_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 1> {
        Tensor::<B, 1>::from_data(TensorData::from(self.rewards.as_slice()), device)
    }

    pub fn dones_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 1> {
        Tensor::<B, 1>::from_data(TensorData::from(self.done_mask().as_slice()), device)
    }

    /// Stacked next states of the non-terminal rows, paired with the batch
    /// row index of each. `None` when every row is terminal.
    pub fn next_states_tensor<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Option<(Tensor<B, 4>, Tensor<B, 1, Int>)> {
        let (rows, tensors): (Vec<i64>, Vec<&BoardTensor>) = self
            .next_states
            .iter()
            .enumerate()
            .filter_map(|(i, next)| next.as_ref().map(|t| (i as i64, t)))
            .unzip();
        let stacked = stack_batch(tensors, device)?;
        let rows = Tensor::<B, 1, Int>::from_data(TensorData::from(rows.as_slice()), device);
        Some((stacked, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use std::collections::HashSet;

    type TestBackend = NdArray<f32>;

    /// Transition tagged by its action so it can be identified after sampling.
    fn tagged(action: usize) -> Transition {
        let mut state = BoardTensor::zeros(2, 3);
        state.set(0, 0, 0, action as f32);
        Transition {
            state: state.clone(),
            action,
            reward: action as f32 * 0.5,
            next_state: if action % 2 == 0 { Some(state) } else { None },
            done: action % 2 == 1,
        }
    }

    #[test]
    fn test_push_and_len() {
        let mut buf = ReplayBuffer::new(10);
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());

        buf.push(tagged(0));
        assert_eq!(buf.len(), 1);

        for i in 1..10 {
            buf.push(tagged(i));
        }
        assert_eq!(buf.len(), 10);
        assert_eq!(buf.capacity(), 10);
    }

    #[test]
    fn test_fifo_eviction() {
        let capacity = 5;
        let mut buf = ReplayBuffer::with_seed(capacity, 7);
        for i in 0..=capacity {
            buf.push(tagged(i));
        }
        assert_eq!(buf.len(), capacity);

        let batch = buf.sample(capacity).unwrap();
        let present: HashSet<usize> = batch.actions.iter().copied().collect();
        assert!(!present.contains(&0), "oldest transition should be evicted");
        let expected: HashSet<usize> = (1..=capacity).collect();
        assert_eq!(present, expected);
    }

    #[test]
    fn test_eviction_wraps_repeatedly() {
        let mut buf = ReplayBuffer::with_seed(4, 1);
        for i in 0..11 {
            buf.push(tagged(i));
        }
        let batch = buf.sample(4).unwrap();
        let present: HashSet<usize> = batch.actions.iter().copied().collect();
        let expected: HashSet<usize> = (7..11).collect();
        assert_eq!(present, expected);
    }

    #[test]
    fn test_sample_distinct() {
        let mut buf = ReplayBuffer::with_seed(100, 42);
        for i in 0..50 {
            buf.push(tagged(i));
        }
        for _ in 0..20 {
            let batch = buf.sample(10).unwrap();
            assert_eq!(batch.len(), 10);
            let unique: HashSet<usize> = batch.actions.iter().copied().collect();
            assert_eq!(unique.len(), 10);
        }
        // sampling is non-destructive
        assert_eq!(buf.len(), 50);
    }

    #[test]
    fn test_sample_columns_stay_aligned() {
        let mut buf = ReplayBuffer::with_seed(32, 3);
        for i in 0..32 {
            buf.push(tagged(i));
        }
        let batch = buf.sample(16).unwrap();
        assert_eq!(batch.states.len(), 16);
        assert_eq!(batch.rewards.len(), 16);
        assert_eq!(batch.next_states.len(), 16);
        assert_eq!(batch.dones.len(), 16);
        for row in 0..batch.len() {
            let action = batch.actions[row];
            assert_eq!(batch.states[row].get(0, 0, 0), action as f32);
            assert_eq!(batch.rewards[row], action as f32 * 0.5);
            assert_eq!(batch.dones[row], action % 2 == 1);
            assert_eq!(batch.next_states[row].is_none(), batch.dones[row]);
        }
    }

    #[test]
    fn test_sample_too_many() {
        let mut buf = ReplayBuffer::new(10);
        buf.push(tagged(0));
        assert_eq!(
            buf.sample(5).unwrap_err(),
            ReplayError::InsufficientData {
                requested: 5,
                available: 1,
            }
        );
    }

    #[test]
    fn test_sample_zero_is_empty() {
        let mut buf = ReplayBuffer::new(4);
        let batch = buf.sample(0).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let mut a = ReplayBuffer::with_seed(64, 99);
        let mut b = ReplayBuffer::with_seed(64, 99);
        for i in 0..64 {
            a.push(tagged(i));
            b.push(tagged(i));
        }
        assert_eq!(a.sample(8).unwrap().actions, b.sample(8).unwrap().actions);
    }

    #[test]
    fn test_stored_copy_is_independent() {
        let mut buf = ReplayBuffer::new(2);
        let mut live = BoardTensor::zeros(1, 3);
        buf.push(Transition {
            state: live.clone(),
            action: 4,
            reward: 0.0,
            next_state: None,
            done: true,
        });
        live.set(0, 1, 1, 9.0);
        let batch = buf.sample(1).unwrap();
        assert_eq!(batch.states[0].get(0, 1, 1), 0.0);
    }

    #[test]
    #[should_panic(expected = "replay capacity must be positive")]
    fn test_zero_capacity_panics() {
        ReplayBuffer::new(0);
    }

    #[test]
    fn test_from_config() {
        let config = ReplayConfig {
            capacity: 8,
            seed: Some(5),
            ..Default::default()
        };
        let buf = ReplayBuffer::from_config(&config);
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_batch_tensors() {
        let mut buf = ReplayBuffer::with_seed(8, 11);
        for i in 0..8 {
            buf.push(tagged(i));
        }
        let batch = buf.sample(6).unwrap();
        let device = Default::default();

        let states = batch.states_tensor::<TestBackend>(&device).unwrap();
        assert_eq!(states.dims(), [6, 2, 3, 3]);
        assert_eq!(batch.actions_tensor::<TestBackend>(&device).dims(), [6]);
        assert_eq!(batch.rewards_tensor::<TestBackend>(&device).dims(), [6]);

        let dones: Vec<f32> = batch
            .dones_tensor::<TestBackend>(&device)
            .into_data()
            .to_vec()
            .unwrap();
        assert_eq!(dones, batch.done_mask());

        let live = batch.next_states.iter().filter(|n| n.is_some()).count();
        match batch.next_states_tensor::<TestBackend>(&device) {
            Some((next, rows)) => {
                assert_eq!(next.dims(), [live, 2, 3, 3]);
                assert_eq!(rows.dims(), [live]);
            }
            None => assert_eq!(live, 0),
        }
    }

    #[test]
    fn test_next_states_tensor_all_terminal() {
        let mut buf = ReplayBuffer::new(4);
        buf.push(tagged(1));
        buf.push(tagged(3));
        let batch = buf.sample(2).unwrap();
        let device = Default::default();
        assert!(batch.next_states_tensor::<TestBackend>(&device).is_none());
    }
}
