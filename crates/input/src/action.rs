/// A discrete paint action produced by the gesture classifier.
///
/// Exactly one action is produced per classified frame. The brush consumes
/// actions, never raw hand poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintAction {
    /// Nothing to do this frame (device absent, landmark missing, or still
    /// waiting out the hold threshold).
    NoOp,
    /// Spray gesture held long enough; turn the spray effect on.
    SprayOn,
    /// No qualifying gesture; turn the spray off and end the stroke.
    SprayOff,
    /// Pinch held long enough; place a stroke point at the brush location.
    PlaceStrokePoint,
    /// Painting hand lost; end the stroke and cancel the spray.
    ResetStroke,
}

impl PaintAction {
    /// Whether the action ends the current stroke.
    pub fn ends_stroke(self) -> bool {
        matches!(self, Self::SprayOff | Self::ResetStroke)
    }

    /// Desired spray state, if the action implies one.
    pub fn spray(self) -> Option<bool> {
        match self {
            Self::SprayOn => Some(true),
            Self::SprayOff | Self::ResetStroke => Some(false),
            Self::NoOp | Self::PlaceStrokePoint => None,
        }
    }
}
