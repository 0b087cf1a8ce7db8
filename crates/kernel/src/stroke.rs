use glam::{Quat, Vec3};
use paintspace_common::{BrushConfig, Transform};
use tracing::warn;

/// Whether a stroke is in progress, plus the anchor it continues from.
///
/// The anchor survives the end of a stroke: a fresh stroke takes its
/// orientation from the direction between the old anchor and its first point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// The next point starts a new stroke.
    Inactive { anchor: Vec3 },
    /// The next point continues the stroke from `anchor`.
    Active { anchor: Vec3 },
}

impl Default for StrokeState {
    fn default() -> Self {
        Self::Inactive { anchor: Vec3::ZERO }
    }
}

impl StrokeState {
    /// Position of the last placed point (zero before any point).
    pub fn anchor(&self) -> Vec3 {
        match *self {
            Self::Inactive { anchor } | Self::Active { anchor } => anchor,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// End the stroke, keeping the anchor.
    pub fn ended(self) -> Self {
        Self::Inactive {
            anchor: self.anchor(),
        }
    }
}

/// Rotation about the up (Z) axis facing along `direction`.
///
/// Directions with no horizontal component, including the zero vector, map
/// to the identity rotation.
pub fn yaw_rotation(direction: Vec3) -> Quat {
    if direction.truncate().length_squared() <= f32::EPSILON * f32::EPSILON {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_z(direction.y.atan2(direction.x))
}

/// Turns sparse stroke points into evenly spaced placement transforms.
#[derive(Debug, Clone, Copy)]
pub struct StrokeInterpolator {
    spatial_unit: f32,
    scale: Vec3,
    max_interpolation: usize,
}

impl Default for StrokeInterpolator {
    fn default() -> Self {
        Self::new(&BrushConfig::default())
    }
}

impl StrokeInterpolator {
    pub fn new(config: &BrushConfig) -> Self {
        Self::with_spatial_unit(config.spatial_unit(), config.placement_scale)
            .with_max_interpolation(config.max_interpolation)
    }

    /// Build with an explicit spatial unit. `spatial_unit` must be positive.
    pub fn with_spatial_unit(spatial_unit: f32, scale: Vec3) -> Self {
        debug_assert!(spatial_unit > 0.0, "spatial unit must be positive");
        Self {
            spatial_unit,
            scale,
            max_interpolation: BrushConfig::default().max_interpolation,
        }
    }

    /// Cap the intermediates inserted for a single point.
    pub fn with_max_interpolation(mut self, max_interpolation: usize) -> Self {
        self.max_interpolation = max_interpolation;
        self
    }

    pub fn spatial_unit(&self) -> f32 {
        self.spatial_unit
    }

    pub fn max_interpolation(&self) -> usize {
        self.max_interpolation
    }

    /// Number of intermediate points needed to bridge a gap of `dist`.
    ///
    /// Non-finite distances (a corrupt sample) and gaps needing more than
    /// `max_interpolation` points insert nothing.
    pub fn interpolate_count(&self, dist: f32) -> usize {
        let ratio = (f64::from(dist) / f64::from(self.spatial_unit)).ceil();
        if !ratio.is_finite() || ratio <= 0.0 {
            return 0;
        }
        if ratio > self.max_interpolation as f64 {
            warn!(
                dist,
                needed = ratio,
                max = self.max_interpolation,
                "stroke gap too large to bridge, placing endpoint only"
            );
            return 0;
        }
        ratio as usize
    }

    /// Place a stroke point at `current`.
    ///
    /// A fresh stroke yields one transform. A continuing stroke yields the
    /// intermediates strictly between the anchor and `current`, followed by
    /// `current` itself. Returns the next state and the transforms in order.
    pub fn place(&self, state: StrokeState, current: Vec3) -> (StrokeState, Vec<Transform>) {
        let anchor = state.anchor();
        let direction = current - anchor;
        let rotation = yaw_rotation(direction);
        let at = |position: Vec3| Transform {
            position,
            rotation,
            scale: self.scale,
        };

        let mut placed = Vec::new();
        if state.is_active() {
            let count = self.interpolate_count(direction.length());
            let segments = count.saturating_add(1);
            placed.reserve(segments);
            let step = direction / segments as f32;
            for i in 1..=count {
                placed.push(at(anchor + step * i as f32));
            }
        }
        placed.push(at(current));

        (StrokeState::Active { anchor: current }, placed)
    }
}
