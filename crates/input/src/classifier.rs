use paintspace_common::{BrushConfig, FingerType, GestureThresholds, HandFrame, HandPose};
use tracing::{debug, warn};

use crate::action::PaintAction;

/// The paint gesture a hand is currently making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureIntent {
    /// Thumb tucked, index pointing, fist open.
    Spray,
    /// Thumb and index pinched together.
    Stroke,
}

impl GestureIntent {
    /// The action fired once this intent has been held long enough.
    pub fn action(self) -> PaintAction {
        match self {
            Self::Spray => PaintAction::SprayOn,
            Self::Stroke => PaintAction::PlaceStrokePoint,
        }
    }
}

/// Debounce state carried from one classified frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassifierState {
    /// Intent being held, if any.
    pub held: Option<GestureIntent>,
    /// Seconds `held` has been held. Zero when nothing is held.
    pub timer: f32,
}

impl ClassifierState {
    /// Whether the held intent has passed `threshold` and is firing.
    pub fn is_firing(&self, threshold: f32) -> bool {
        self.held.is_some() && self.timer >= threshold
    }
}

/// Maps hand poses to paint actions with a hold-time debounce.
///
/// The classifier itself is immutable; all per-frame state lives in
/// [`ClassifierState`], passed in and returned by [`GestureClassifier::classify`].
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    hold_threshold: f32,
    thresholds: GestureThresholds,
    reset_on_hand_loss: bool,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(&BrushConfig::default())
    }
}

impl GestureClassifier {
    pub fn new(config: &BrushConfig) -> Self {
        Self {
            hold_threshold: config.hold_threshold_secs,
            thresholds: config.gestures,
            reset_on_hand_loss: config.reset_on_hand_loss,
        }
    }

    /// Seconds a gesture must be held before it fires.
    pub fn hold_threshold(&self) -> f32 {
        self.hold_threshold
    }

    /// Read the paint intent of a single hand.
    ///
    /// Returns `None` if the thumb or index finger is missing, and
    /// `Some(None)` if the hand makes no paint gesture. Spray takes priority
    /// over stroke.
    pub fn intent(&self, hand: &HandPose) -> Option<Option<GestureIntent>> {
        let thumb = hand.finger(FingerType::Thumb)?;
        let index = hand.finger(FingerType::Index)?;

        let intent = if !thumb.extended
            && index.extended
            && hand.grab_strength < self.thresholds.spray_grab_max
        {
            Some(GestureIntent::Spray)
        } else if hand.pinch_strength > self.thresholds.stroke_pinch_min {
            Some(GestureIntent::Stroke)
        } else {
            None
        };
        Some(intent)
    }

    /// Classify one device frame, `dt` seconds after the previous tick.
    ///
    /// Returns the next state and the action for this frame. A negative or
    /// non-finite `dt`, or a right hand with strengths outside [0, 1], is
    /// `NoOp` and leaves the state untouched.
    pub fn classify(
        &self,
        state: ClassifierState,
        frame: &HandFrame,
        dt: f32,
    ) -> (ClassifierState, PaintAction) {
        if !dt.is_finite() || dt < 0.0 {
            warn!(frame = frame.id.0, dt, "ignoring frame with invalid tick duration");
            return (state, PaintAction::NoOp);
        }

        let Some(hand) = frame.right_hand() else {
            if self.reset_on_hand_loss {
                if state.held.is_some() {
                    debug!(frame = frame.id.0, "right hand lost, resetting stroke");
                }
                return (ClassifierState::default(), PaintAction::ResetStroke);
            }
            return (state, PaintAction::NoOp);
        };

        if !hand.is_well_formed() {
            warn!(
                frame = frame.id.0,
                pinch = hand.pinch_strength,
                grab = hand.grab_strength,
                "ignoring malformed hand pose"
            );
            return (state, PaintAction::NoOp);
        }

        let Some(intent) = self.intent(hand) else {
            return (state, PaintAction::NoOp);
        };

        let Some(intent) = intent else {
            if state.held.is_some() {
                debug!(frame = frame.id.0, released = ?state.held, "gesture released");
            }
            return (ClassifierState::default(), PaintAction::SprayOff);
        };

        let mut next = if state.held == Some(intent) {
            state
        } else {
            debug!(frame = frame.id.0, ?intent, "gesture started");
            ClassifierState {
                held: Some(intent),
                timer: 0.0,
            }
        };

        // Accumulate only while below the threshold so the timer stays bounded
        // during long holds.
        if next.timer < self.hold_threshold {
            next.timer += dt;
            if next.timer >= self.hold_threshold {
                debug!(frame = frame.id.0, ?intent, held = next.timer, "gesture accepted");
            }
        }

        let action = if next.timer >= self.hold_threshold {
            intent.action()
        } else {
            PaintAction::NoOp
        };
        (next, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poses;
    use glam::Vec3;
    use paintspace_common::{Finger, FrameId, Handedness};

    fn frame(hands: Vec<HandPose>) -> HandFrame {
        HandFrame::new(FrameId(1), hands)
    }

    fn run(
        classifier: &GestureClassifier,
        pose: &HandPose,
        dts: &[f32],
    ) -> (ClassifierState, Vec<PaintAction>) {
        let mut state = ClassifierState::default();
        let mut actions = Vec::new();
        for &dt in dts {
            let (next, action) = classifier.classify(state, &frame(vec![pose.clone()]), dt);
            state = next;
            actions.push(action);
        }
        (state, actions)
    }

    #[test]
    fn spray_pose_reads_as_spray() {
        let c = GestureClassifier::default();
        assert_eq!(
            c.intent(&poses::spray(Vec3::ZERO)),
            Some(Some(GestureIntent::Spray))
        );
    }

    #[test]
    fn spray_takes_priority_over_pinch() {
        let c = GestureClassifier::default();
        let pose = HandPose {
            pinch_strength: 1.0,
            ..poses::spray(Vec3::ZERO)
        };
        assert_eq!(c.intent(&pose), Some(Some(GestureIntent::Spray)));
    }

    #[test]
    fn clenched_fist_is_not_spray() {
        let c = GestureClassifier::default();
        let pose = HandPose {
            grab_strength: 0.2,
            ..poses::spray(Vec3::ZERO)
        };
        assert_eq!(c.intent(&pose), Some(None));
    }

    #[test]
    fn pinch_must_exceed_threshold() {
        let c = GestureClassifier::default();
        let weak = HandPose {
            pinch_strength: 0.8,
            ..poses::pinch(Vec3::ZERO)
        };
        assert_eq!(c.intent(&weak), Some(None));
        assert_eq!(
            c.intent(&poses::pinch(Vec3::ZERO)),
            Some(Some(GestureIntent::Stroke))
        );
    }

    #[test]
    fn missing_index_is_noop_without_state_change() {
        let c = GestureClassifier::default();
        let pose = HandPose {
            handedness: Handedness::Right,
            fingers: vec![Finger::new(FingerType::Thumb, false)],
            pinch_strength: 1.0,
            grab_strength: 0.0,
        };
        assert_eq!(c.intent(&pose), None);

        let held = ClassifierState {
            held: Some(GestureIntent::Stroke),
            timer: 0.3,
        };
        let (next, action) = c.classify(held, &frame(vec![pose]), 0.25);
        assert_eq!(action, PaintAction::NoOp);
        assert_eq!(next, held);
    }

    #[test]
    fn debounce_fires_when_cumulative_hold_reaches_threshold() {
        let c = GestureClassifier::default();
        let (state, actions) = run(&c, &poses::spray(Vec3::ZERO), &[0.25, 0.25, 0.25, 0.25]);
        assert_eq!(
            actions,
            vec![
                PaintAction::NoOp,
                PaintAction::NoOp,
                PaintAction::SprayOn,
                PaintAction::SprayOn,
            ]
        );
        assert!(state.is_firing(c.hold_threshold()));
    }

    #[test]
    fn stroke_refires_every_tick_once_accepted() {
        let c = GestureClassifier::default();
        let (_, actions) = run(&c, &poses::pinch(Vec3::ZERO), &[0.7, 0.01, 0.01]);
        assert!(actions.iter().all(|a| *a == PaintAction::PlaceStrokePoint));
    }

    #[test]
    fn short_hold_then_release_never_fires() {
        let c = GestureClassifier::default();
        let (state, actions) = run(&c, &poses::spray(Vec3::ZERO), &[0.25, 0.25]);
        assert!(actions.iter().all(|a| *a == PaintAction::NoOp));
        assert_eq!(state.timer, 0.5);

        let (state, action) = c.classify(state, &frame(vec![poses::open(Vec3::ZERO)]), 0.1);
        assert_eq!(action, PaintAction::SprayOff);
        assert_eq!(state, ClassifierState::default());
    }

    #[test]
    fn switching_intent_restarts_the_hold() {
        let c = GestureClassifier::default();
        let (state, _) = run(&c, &poses::spray(Vec3::ZERO), &[0.7]);
        assert!(state.is_firing(c.hold_threshold()));

        let (state, action) = c.classify(state, &frame(vec![poses::pinch(Vec3::ZERO)]), 0.25);
        assert_eq!(action, PaintAction::NoOp);
        assert_eq!(state.held, Some(GestureIntent::Stroke));
        assert_eq!(state.timer, 0.25);
    }

    #[test]
    fn timer_stays_bounded_during_long_hold() {
        let c = GestureClassifier::default();
        let (state, _) = run(&c, &poses::pinch(Vec3::ZERO), &[0.5; 10]);
        assert_eq!(state.timer, 1.0);
    }

    #[test]
    fn left_hand_only_resets_stroke() {
        let c = GestureClassifier::default();
        let held = ClassifierState {
            held: Some(GestureIntent::Stroke),
            timer: 0.6,
        };
        let (next, action) = c.classify(held, &frame(vec![poses::left_pinch(Vec3::ZERO)]), 0.1);
        assert_eq!(action, PaintAction::ResetStroke);
        assert_eq!(next, ClassifierState::default());
    }

    #[test]
    fn hand_loss_can_pause_instead_of_reset() {
        let c = GestureClassifier::new(&BrushConfig {
            reset_on_hand_loss: false,
            ..BrushConfig::default()
        });
        let held = ClassifierState {
            held: Some(GestureIntent::Stroke),
            timer: 0.6,
        };
        let (next, action) = c.classify(held, &frame(Vec::new()), 0.1);
        assert_eq!(action, PaintAction::NoOp);
        assert_eq!(next, held);
    }

    #[test]
    fn right_hand_is_found_among_both() {
        let c = GestureClassifier::default();
        let (_, action) = c.classify(
            ClassifierState::default(),
            &frame(vec![
                poses::left_pinch(Vec3::ZERO),
                poses::pinch(Vec3::ZERO),
            ]),
            1.0,
        );
        assert_eq!(action, PaintAction::PlaceStrokePoint);
    }

    #[test]
    fn zero_threshold_fires_immediately() {
        let c = GestureClassifier::new(&BrushConfig {
            hold_threshold_secs: 0.0,
            ..BrushConfig::default()
        });
        let (_, actions) = run(&c, &poses::pinch(Vec3::ZERO), &[0.0]);
        assert_eq!(actions, vec![PaintAction::PlaceStrokePoint]);
    }

    fn held_stroke() -> ClassifierState {
        ClassifierState {
            held: Some(GestureIntent::Stroke),
            timer: 0.25,
        }
    }

    #[test]
    fn nan_strength_is_noop_without_state_change() {
        let c = GestureClassifier::default();
        let pose = HandPose {
            pinch_strength: f32::NAN,
            ..poses::pinch(Vec3::ZERO)
        };
        let (next, action) = c.classify(held_stroke(), &frame(vec![pose]), 0.25);
        assert_eq!(action, PaintAction::NoOp);
        assert_eq!(next, held_stroke());
    }

    #[test]
    fn out_of_range_strength_is_noop_without_state_change() {
        let c = GestureClassifier::default();
        let pose = HandPose {
            grab_strength: 1.5,
            ..poses::spray(Vec3::ZERO)
        };
        let (next, action) = c.classify(held_stroke(), &frame(vec![pose]), 0.25);
        assert_eq!(action, PaintAction::NoOp);
        assert_eq!(next, held_stroke());
    }

    #[test]
    fn invalid_dt_is_noop_without_state_change() {
        let c = GestureClassifier::default();
        for dt in [f32::NAN, f32::INFINITY, -0.1] {
            let (next, action) =
                c.classify(held_stroke(), &frame(vec![poses::pinch(Vec3::ZERO)]), dt);
            assert_eq!(action, PaintAction::NoOp, "dt {dt}");
            assert_eq!(next, held_stroke(), "dt {dt}");
        }

        let (next, action) = c.classify(held_stroke(), &frame(vec![poses::pinch(Vec3::ZERO)]), 0.5);
        assert_eq!(action, PaintAction::PlaceStrokePoint);
        assert_eq!(next.timer, 0.75);
    }
}
