//! Rendering adapter: where placed stroke instances and spray signals go.
//!
//! # Invariants
//! - The brush hands transforms to a sink and never reads identities back.
//! - Sinks and effects are fire-and-forget; no call returns an acknowledgment.
//!
//! # Workaround
//! The host engine owns real instanced meshes and particle systems. This crate
//! defines the traits the brush talks to, with in-memory implementations and
//! a debug text renderer so strokes can be inspected without a GPU.

mod effect;
mod renderer;
mod sink;

pub use effect::{ParticleEffect, SprayEmitter};
pub use renderer::{DebugTextRenderer, Renderer};
pub use sink::{InstanceSink, InstancedMesh};

pub fn crate_info() -> &'static str {
    "paintspace-render v0.1.0"
}
