//! Brush kernel: turns classified gestures into stroke placements and spray signals.
//!
//! # Invariants
//! - Stroke and debounce state change only inside a brush tick, clear, or
//!   explicit action application; nothing runs concurrently.
//! - A stroke point in an active stroke is never farther than one spatial unit
//!   from the previous placement, unless bridging the gap would take more than
//!   `max_interpolation` points. Such a gap is left unbridged.
//! - No runtime condition inside a tick is an error.

pub mod brush;
pub mod spray;
pub mod stroke;

pub use brush::{MessageLevel, PaintBrush, StatusMessage, TickReport};
pub use spray::SprayToggle;
pub use stroke::{StrokeInterpolator, StrokeState, yaw_rotation};

pub fn crate_info() -> &'static str {
    "paintspace-kernel v0.1.0"
}
