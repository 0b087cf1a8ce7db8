use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Identifier of a tracking frame, as reported by the device.
///
/// Increases monotonically while the device is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameId(pub i64);

/// Spatial transform: position, rotation, scale.
///
/// Used as the placement unit handed to the instancing sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Map a point from local space into world space (scale, rotate, translate).
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.rotation * (local * self.scale) + self.position
    }
}

/// Which hand a pose belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

/// Anatomical finger type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FingerType {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

/// Per-finger tracking data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Finger {
    pub kind: FingerType,
    pub extended: bool,
    /// Fingertip position in world space.
    pub tip: Vec3,
}

impl Finger {
    pub fn new(kind: FingerType, extended: bool) -> Self {
        Self {
            kind,
            extended,
            tip: Vec3::ZERO,
        }
    }
}

/// One hand as sampled by the tracking device. Valid only for its frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandPose {
    pub handedness: Handedness,
    pub fingers: Vec<Finger>,
    /// Thumb-to-finger pinch, 0.0 (open) to 1.0 (touching).
    pub pinch_strength: f32,
    /// Fist closure, 0.0 (open) to 1.0 (fist).
    pub grab_strength: f32,
}

impl HandPose {
    /// Find a finger by type. Returns the last match, as the device may
    /// report duplicates during tracking hand-off.
    pub fn finger(&self, kind: FingerType) -> Option<&Finger> {
        self.fingers.iter().rev().find(|f| f.kind == kind)
    }

    /// Whether the hand is a right hand.
    pub fn is_right(&self) -> bool {
        self.handedness == Handedness::Right
    }

    /// Both strengths are finite and within [0, 1].
    pub fn is_well_formed(&self) -> bool {
        (0.0..=1.0).contains(&self.pinch_strength) && (0.0..=1.0).contains(&self.grab_strength)
    }
}

/// Everything the device reports for a single tracking frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    pub id: FrameId,
    pub hands: Vec<HandPose>,
}

impl HandFrame {
    pub fn new(id: FrameId, hands: Vec<HandPose>) -> Self {
        Self { id, hands }
    }

    /// The first right hand in the frame, if any.
    pub fn right_hand(&self) -> Option<&HandPose> {
        self.hands.iter().find(|h| h.is_right())
    }
}
