//! Gesture input: tracking-device frames classified into paint actions.
//!
//! # Invariants
//! - A device frame is classified at most once.
//! - Classification is a pure step over explicit state; no engine callbacks.
//! - Missing or malformed input is a `NoOp`, never an error.

pub mod action;
pub mod classifier;
pub mod device;
pub mod poses;

pub use action::PaintAction;
pub use classifier::{ClassifierState, GestureClassifier, GestureIntent};
pub use device::{FrameGuard, HandTrackingDevice, ScriptedDevice};

pub fn crate_info() -> &'static str {
    "paintspace-input v0.1.0"
}
