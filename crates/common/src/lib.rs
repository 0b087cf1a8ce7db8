//! Shared types for the paintspace brush: transforms, hand poses, configuration.
//!
//! # Invariants
//! - Types here carry no behaviour beyond construction and lookup.
//! - `BrushConfig` is fixed once a brush is constructed.

pub mod config;
pub mod types;

pub use config::{BrushConfig, ConfigError, GestureThresholds, MAX_INTERPOLATION_LIMIT};
pub use types::{Finger, FingerType, FrameId, HandFrame, HandPose, Handedness, Transform};
