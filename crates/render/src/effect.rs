/// Particle effect the brush switches on and off.
pub trait ParticleEffect {
    fn activate(&mut self);
    fn deactivate(&mut self);
    /// Remove all live particles immediately without changing activation.
    fn kill_particles(&mut self);
}

/// Records the signals sent to a spray particle emitter.
#[derive(Debug, Clone, Default)]
pub struct SprayEmitter {
    active: bool,
    activations: usize,
    deactivations: usize,
    kills: usize,
}

impl SprayEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of activate signals received.
    pub fn activations(&self) -> usize {
        self.activations
    }

    /// Number of deactivate signals received.
    pub fn deactivations(&self) -> usize {
        self.deactivations
    }

    /// Number of forced particle kills received.
    pub fn kills(&self) -> usize {
        self.kills
    }
}

impl ParticleEffect for SprayEmitter {
    fn activate(&mut self) {
        self.active = true;
        self.activations += 1;
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.deactivations += 1;
    }

    fn kill_particles(&mut self) {
        self.kills += 1;
    }
}
