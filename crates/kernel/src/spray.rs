use paintspace_render::ParticleEffect;

/// Idempotent on/off switch in front of a particle effect.
///
/// Signals the effect only on a state transition; repeating the current
/// state does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SprayToggle {
    on: bool,
}

impl SprayToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Move to `on`, signalling `effect` if that changes the state.
    /// Returns whether a signal was sent.
    pub fn set(&mut self, on: bool, effect: &mut dyn ParticleEffect) -> bool {
        if self.on == on {
            return false;
        }
        self.on = on;
        if on {
            effect.activate();
        } else {
            effect.deactivate();
        }
        tracing::debug!(on, "spray toggled");
        true
    }
}
