use paintspace_common::Transform;

/// Receives placement transforms and draws them as instances of one mesh.
pub trait InstanceSink {
    /// Add one instance at `transform`.
    fn add_instance(&mut self, transform: Transform);

    /// Remove every instance.
    fn clear_instances(&mut self);

    /// All instances currently drawn, in placement order.
    fn instances(&self) -> &[Transform];
}

/// In-memory instanced mesh: the instance list a renderer would upload.
#[derive(Debug, Clone, Default)]
pub struct InstancedMesh {
    instances: Vec<Transform>,
}

impl InstancedMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl InstanceSink for InstancedMesh {
    fn add_instance(&mut self, transform: Transform) {
        self.instances.push(transform);
    }

    fn clear_instances(&mut self) {
        tracing::debug!(cleared = self.instances.len(), "clearing instances");
        self.instances.clear();
    }

    fn instances(&self) -> &[Transform] {
        &self.instances
    }
}
