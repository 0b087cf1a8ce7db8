use glam::EulerRot;

use crate::sink::InstanceSink;

/// Renderer-agnostic interface over an instance list.
///
/// The renderer reads instances and produces output. It never mutates the
/// instance list.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given instances.
    fn render(&self, instances: &dyn InstanceSink) -> Self::Output;
}

/// Debug text renderer. Lists every instance with its yaw in degrees.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Print at most this many instances; `None` prints all.
    pub limit: Option<usize>,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, sink: &dyn InstanceSink) -> String {
        let instances = sink.instances();
        let mut out = String::new();
        out.push_str(&format!("=== Stroke Instances ({}) ===\n", instances.len()));

        let shown = self.limit.unwrap_or(instances.len()).min(instances.len());
        for (i, t) in instances.iter().take(shown).enumerate() {
            let (yaw, _, _) = t.rotation.to_euler(EulerRot::ZYX);
            let p = t.position;
            out.push_str(&format!(
                "  [{i:>4}] pos=({:.3}, {:.3}, {:.3}) yaw={:.1}\n",
                p.x,
                p.y,
                p.z,
                yaw.to_degrees()
            ));
        }
        if shown < instances.len() {
            out.push_str(&format!("  ... {} more\n", instances.len() - shown));
        }

        out
    }
}
