use glam::Vec3;
use paintspace_common::{BrushConfig, ConfigError};
use paintspace_export::MeshExporter;
use paintspace_input::{
    ClassifierState, FrameGuard, GestureClassifier, HandTrackingDevice, PaintAction,
};
use paintspace_render::{InstanceSink, ParticleEffect};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use crate::spray::SprayToggle;
use crate::stroke::{StrokeInterpolator, StrokeState};

const EXPORT_OK: &str = "Export successful";
const EXPORT_FAILED: &str = "-Error exporting-";

/// Severity of a transient on-screen message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Failure,
}

/// Short-lived message for the host to show the user.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
    /// How long the host should keep the message on screen.
    pub ttl: Duration,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub action: PaintAction,
    /// Instances handed to the sink this tick.
    pub placed: usize,
}

impl TickReport {
    fn idle() -> Self {
        Self {
            action: PaintAction::NoOp,
            placed: 0,
        }
    }
}

/// Gesture-driven paint brush.
///
/// Owns the per-frame state (last frame id, debounce timer, stroke anchor,
/// spray flag) and the collaborators it writes to. The host calls
/// [`PaintBrush::tick`] once per render tick with the brush's world location.
pub struct PaintBrush<S, E> {
    classifier: GestureClassifier,
    interpolator: StrokeInterpolator,
    frames: FrameGuard,
    gesture: ClassifierState,
    stroke: StrokeState,
    spray: SprayToggle,
    message_ttl: Duration,
    sink: S,
    effect: E,
}

impl<S: InstanceSink, E: ParticleEffect> PaintBrush<S, E> {
    /// Create a brush. Fails if `config` does not pass [`BrushConfig::validate`].
    pub fn new(config: &BrushConfig, sink: S, effect: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            classifier: GestureClassifier::new(config),
            interpolator: StrokeInterpolator::new(config),
            frames: FrameGuard::new(),
            gesture: ClassifierState::default(),
            stroke: StrokeState::default(),
            spray: SprayToggle::new(),
            message_ttl: Duration::try_from_secs_f32(config.message_ttl_secs)
                .unwrap_or_default(),
            sink,
            effect,
        })
    }

    /// Replace the interpolator, e.g. to paint at a different spatial unit.
    pub fn with_interpolator(mut self, interpolator: StrokeInterpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Run one render tick.
    ///
    /// Polls `device`; if it is connected and reports a frame not seen before,
    /// classifies it with `dt` and applies the resulting action at `location`.
    pub fn tick(
        &mut self,
        device: &mut dyn HandTrackingDevice,
        location: Vec3,
        dt: f32,
    ) -> TickReport {
        let _span = tracing::info_span!("brush_tick").entered();

        let Some(frame) = self.frames.poll(device) else {
            return TickReport::idle();
        };

        let (gesture, action) = self.classifier.classify(self.gesture, &frame, dt);
        self.gesture = gesture;
        let placed = self.apply(action, location);

        trace!(frame = frame.id.0, ?action, placed, "tick complete");
        TickReport { action, placed }
    }

    /// Apply a single action at `location`. Returns the number of instances placed.
    pub fn apply(&mut self, action: PaintAction, location: Vec3) -> usize {
        if let Some(on) = action.spray() {
            self.spray.set(on, &mut self.effect);
        }
        if action.ends_stroke() {
            if self.stroke.is_active() {
                debug!(?action, "stroke ended");
            }
            self.stroke = self.stroke.ended();
        }
        if action != PaintAction::PlaceStrokePoint {
            return 0;
        }

        let fresh = !self.stroke.is_active();
        let (stroke, placed) = self.interpolator.place(self.stroke, location);
        self.stroke = stroke;
        if fresh {
            debug!(?location, "stroke started");
        }
        trace!(count = placed.len(), "placing stroke instances");

        let count = placed.len();
        for transform in placed {
            self.sink.add_instance(transform);
        }
        count
    }

    /// Remove every painted instance and force-kill spray particles.
    ///
    /// The next stroke point starts a fresh stroke.
    pub fn clear(&mut self) {
        info!(instances = self.sink.instances().len(), "clearing all strokes");
        self.sink.clear_instances();
        self.effect.kill_particles();
        self.stroke = self.stroke.ended();
    }

    /// Hand the full instance list to `exporter` and report the outcome as a
    /// transient message. Failures are not retried.
    pub fn export(&self, exporter: &mut dyn MeshExporter) -> StatusMessage {
        match exporter.export(self.sink.instances()) {
            Ok(report) => {
                info!(
                    path = %report.path.display(),
                    vertices = report.vertex_count,
                    sha256 = %report.sha256,
                    "export successful"
                );
                self.message(EXPORT_OK, MessageLevel::Success)
            }
            Err(err) => {
                warn!(error = %err, "export failed");
                self.message(EXPORT_FAILED, MessageLevel::Failure)
            }
        }
    }

    fn message(&self, text: &str, level: MessageLevel) -> StatusMessage {
        StatusMessage {
            text: text.to_string(),
            level,
            ttl: self.message_ttl,
        }
    }

    pub fn stroke(&self) -> StrokeState {
        self.stroke
    }

    pub fn gesture(&self) -> ClassifierState {
        self.gesture
    }

    pub fn is_spraying(&self) -> bool {
        self.spray.is_on()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }
}
