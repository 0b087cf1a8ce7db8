use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a brush configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("spatial unit must be positive, got {0}")]
    NonPositiveSpatialUnit(f32),
    #[error("hold threshold must be non-negative, got {0}")]
    NegativeHoldThreshold(f32),
    #[error("gesture threshold {name} must lie in [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f32 },
    #[error("max interpolation must lie in [1, 1048576], got {0}")]
    InterpolationLimitOutOfRange(usize),
}

/// Upper bound accepted for [`BrushConfig::max_interpolation`].
pub const MAX_INTERPOLATION_LIMIT: usize = 1 << 20;

/// Strength thresholds that separate spray and stroke intent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    /// Spray intent requires grab strength strictly below this.
    pub spray_grab_max: f32,
    /// Stroke intent requires pinch strength strictly above this.
    pub stroke_pinch_min: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            spray_grab_max: 0.2,
            stroke_pinch_min: 0.8,
        }
    }
}

/// Brush configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Seconds a gesture must be held before it fires.
    pub hold_threshold_secs: f32,
    /// Anisotropic scale of every placed instance, in engine units.
    pub placement_scale: Vec3,
    /// Multiplier on `placement_scale.z` used to derive the spatial unit.
    pub interpolation_factor: f32,
    /// Most intermediate points inserted for one stroke sample. A gap needing
    /// more is treated as a tracking glitch and left unbridged.
    pub max_interpolation: usize,
    pub gestures: GestureThresholds,
    /// Whether a tracked frame without a right hand ends the current stroke.
    pub reset_on_hand_loss: bool,
    /// How long export status messages stay on screen.
    pub message_ttl_secs: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            hold_threshold_secs: 0.6,
            placement_scale: Vec3::new(0.01, 0.01, 0.05),
            interpolation_factor: 10.0,
            max_interpolation: 1000,
            gestures: GestureThresholds::default(),
            reset_on_hand_loss: true,
            message_ttl_secs: 5.0,
        }
    }
}

impl BrushConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(std::fs::File::open(path)?)?;
        config.validate()?;
        Ok(config)
    }

    /// Maximum gap between two consecutive placements before intermediate
    /// points are inserted.
    pub fn spatial_unit(&self) -> f32 {
        self.interpolation_factor * self.placement_scale.z / 2.0
    }

    /// Reject configurations the brush cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = self.spatial_unit();
        if unit.is_nan() || unit <= 0.0 {
            return Err(ConfigError::NonPositiveSpatialUnit(unit));
        }
        if self.hold_threshold_secs.is_nan() || self.hold_threshold_secs < 0.0 {
            return Err(ConfigError::NegativeHoldThreshold(self.hold_threshold_secs));
        }
        if !(1..=MAX_INTERPOLATION_LIMIT).contains(&self.max_interpolation) {
            return Err(ConfigError::InterpolationLimitOutOfRange(
                self.max_interpolation,
            ));
        }
        for (name, value) in [
            ("spray_grab_max", self.gestures.spray_grab_max),
            ("stroke_pinch_min", self.gestures.stroke_pinch_min),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_brush_tuning() {
        let c = BrushConfig::default();
        assert_eq!(c.hold_threshold_secs, 0.6);
        assert_eq!(c.placement_scale, Vec3::new(0.01, 0.01, 0.05));
        assert_eq!(c.gestures.spray_grab_max, 0.2);
        assert_eq!(c.gestures.stroke_pinch_min, 0.8);
        assert!(c.reset_on_hand_loss);
        assert_eq!(c.max_interpolation, 1000);
        c.validate().unwrap();
    }

    #[test]
    fn spatial_unit_derives_from_scale() {
        let c = BrushConfig::default();
        assert!((c.spatial_unit() - 0.25).abs() < 1e-6);

        let c = BrushConfig {
            interpolation_factor: 1.0,
            ..BrushConfig::default()
        };
        assert!((c.spatial_unit() - 0.025).abs() < 1e-6);
    }

    #[test]
    fn zero_spatial_unit_rejected() {
        let c = BrushConfig {
            interpolation_factor: 0.0,
            ..BrushConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NonPositiveSpatialUnit(_))
        ));
    }

    #[test]
    fn negative_hold_threshold_rejected() {
        let c = BrushConfig {
            hold_threshold_secs: -1.0,
            ..BrushConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NegativeHoldThreshold(_))
        ));
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let c = BrushConfig {
            gestures: GestureThresholds {
                spray_grab_max: 1.5,
                ..GestureThresholds::default()
            },
            ..BrushConfig::default()
        };
        match c.validate() {
            Err(ConfigError::ThresholdOutOfRange { name, .. }) => {
                assert_eq!(name, "spray_grab_max")
            }
            other => panic!("expected ThresholdOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn interpolation_limit_must_be_bounded() {
        for max_interpolation in [0, MAX_INTERPOLATION_LIMIT + 1] {
            let c = BrushConfig {
                max_interpolation,
                ..BrushConfig::default()
            };
            assert!(matches!(
                c.validate(),
                Err(ConfigError::InterpolationLimitOutOfRange(n)) if n == max_interpolation
            ));
        }
    }

    #[test]
    fn partial_json_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("brush.json");
        std::fs::write(&path, r#"{ "hold_threshold_secs": 0.25 }"#).unwrap();

        let c = BrushConfig::from_json_file(&path).unwrap();
        assert_eq!(c.hold_threshold_secs, 0.25);
        assert_eq!(c.placement_scale, BrushConfig::default().placement_scale);
    }

    #[test]
    fn invalid_json_file_fails_closed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("brush.json");
        std::fs::write(&path, r#"{ "interpolation_factor": -2.0 }"#).unwrap();
        assert!(BrushConfig::from_json_file(&path).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = BrushConfig::from_json_file(tmp.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
