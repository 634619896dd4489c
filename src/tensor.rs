//! Opaque multi-channel board tensors.
//!
//! A [`BoardTensor`] is a `channels × N × N` block of `f32` values stored
//! channel-major, row-major. This crate never interprets the channels; it only
//! moves cells around (see [`crate::training::symmetry`]) and stacks tensors
//! into burn batches for the learning update.

use burn::prelude::*;
use burn::tensor::TensorData;

use crate::error::TensorError;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardTensor {
    channels: usize,
    size: usize,
    data: Vec<f32>,
}

impl BoardTensor {
    /// All-zero tensor of shape `[channels, size, size]`.
    pub fn zeros(channels: usize, size: usize) -> Self {
        BoardTensor {
            channels,
            size,
            data: vec![0.0; channels * size * size],
        }
    }

    /// Wrap raw channel-major data, checking its length against the shape.
    pub fn from_vec(channels: usize, size: usize, data: Vec<f32>) -> Result<Self, TensorError> {
        let expected = channels * size * size;
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                channels,
                size,
                expected,
                actual: data.len(),
            });
        }
        Ok(BoardTensor {
            channels,
            size,
            data,
        })
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Spatial side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn shape(&self) -> [usize; 3] {
        [self.channels, self.size, self.size]
    }

    pub fn get(&self, channel: usize, row: usize, col: usize) -> f32 {
        self.data[self.offset(channel, row, col)]
    }

    pub fn set(&mut self, channel: usize, row: usize, col: usize, value: f32) {
        let idx = self.offset(channel, row, col);
        self.data[idx] = value;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Convert to a burn tensor of shape `[channels, N, N]`.
    pub fn to_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 3> {
        Tensor::<B, 1>::from_data(TensorData::from(self.data.as_slice()), device).reshape([
            self.channels as i32,
            self.size as i32,
            self.size as i32,
        ])
    }

    fn offset(&self, channel: usize, row: usize, col: usize) -> usize {
        debug_assert!(channel < self.channels && row < self.size && col < self.size);
        (channel * self.size + row) * self.size + col
    }
}

/// Stack same-shaped tensors into a batch of shape `[batch, channels, N, N]`.
///
/// Returns `None` for an empty slice since the channel and spatial dimensions
/// are unknown.
pub fn stack_batch<'a, B, I>(tensors: I, device: &B::Device) -> Option<Tensor<B, 4>>
where
    B: Backend,
    I: IntoIterator<Item = &'a BoardTensor>,
{
    let mut iter = tensors.into_iter();
    let first = iter.next()?;
    let [channels, size, _] = first.shape();

    let mut flat = first.as_slice().to_vec();
    let mut batch_size = 1;
    for tensor in iter {
        debug_assert_eq!(tensor.shape(), first.shape(), "batch tensors must share a shape");
        flat.extend_from_slice(tensor.as_slice());
        batch_size += 1;
    }

    Some(
        Tensor::<B, 1>::from_data(TensorData::from(flat.as_slice()), device).reshape([
            batch_size as i32,
            channels as i32,
            size as i32,
            size as i32,
        ]),
    )
}
