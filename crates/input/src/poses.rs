//! Canned hand poses for scripted sessions and tests.

use glam::Vec3;
use paintspace_common::{Finger, FingerType, HandPose, Handedness};

fn hand(handedness: Handedness, thumb: bool, index: bool, tip: Vec3) -> HandPose {
    let mut fingers = vec![
        Finger::new(FingerType::Thumb, thumb),
        Finger::new(FingerType::Index, index),
        Finger::new(FingerType::Middle, false),
        Finger::new(FingerType::Ring, false),
        Finger::new(FingerType::Pinky, false),
    ];
    fingers[1].tip = tip;
    HandPose {
        handedness,
        fingers,
        pinch_strength: 0.0,
        grab_strength: 0.0,
    }
}

/// Right hand pointing: thumb tucked, index out, fist open.
pub fn spray(tip: Vec3) -> HandPose {
    hand(Handedness::Right, false, true, tip)
}

/// Right hand pinching thumb to index.
pub fn pinch(tip: Vec3) -> HandPose {
    HandPose {
        pinch_strength: 1.0,
        ..hand(Handedness::Right, true, true, tip)
    }
}

/// Right hand relaxed and open; matches no paint gesture.
pub fn open(tip: Vec3) -> HandPose {
    hand(Handedness::Right, true, true, tip)
}

/// A left hand in pinch; ignored for painting.
pub fn left_pinch(tip: Vec3) -> HandPose {
    HandPose {
        pinch_strength: 1.0,
        ..hand(Handedness::Left, true, true, tip)
    }
}

/// Position of the index fingertip, where the brush is attached.
pub fn index_tip(pose: &HandPose) -> Option<Vec3> {
    pose.finger(FingerType::Index).map(|f| f.tip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spray_pose_shape() {
        let p = spray(Vec3::X);
        assert!(p.is_right());
        assert!(!p.finger(FingerType::Thumb).unwrap().extended);
        assert!(p.finger(FingerType::Index).unwrap().extended);
        assert_eq!(index_tip(&p), Some(Vec3::X));
    }

    #[test]
    fn pinch_pose_is_full_strength() {
        assert_eq!(pinch(Vec3::ZERO).pinch_strength, 1.0);
        assert_eq!(left_pinch(Vec3::ZERO).handedness, Handedness::Left);
    }
}
