//! # ML Gomoku
//!
//! Experience management for training a reinforcement-learning agent on
//! Gomoku: a fixed-capacity replay buffer, D4 symmetry augmentation that keeps
//! board tensors and move indices consistent, and heuristic reward shaping
//! over line patterns.
//!
//! ## Modules
//!
//! - [`game`] — Board, stones, and the read-only board query interface
//! - [`tensor`] — Opaque multi-channel board tensors and burn batch stacking
//! - [`ai`] — Board encoding and a uniform random agent
//! - [`training`] — Replay buffer, symmetry expander, reward shaper, collector
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod tensor;
pub mod training;
