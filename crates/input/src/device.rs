use paintspace_common::{FrameId, HandFrame, HandPose};

/// A hand-tracking device polled once per render tick.
///
/// Polling never blocks. A missing or repeated frame is the normal outcome
/// when the device samples slower than the render loop.
pub trait HandTrackingDevice {
    /// Whether the device is currently connected.
    fn is_connected(&self) -> bool;

    /// The most recent frame the device has produced, if any.
    fn latest_frame(&mut self) -> Option<HandFrame>;
}

/// Deduplicates device frames so each is processed at most once.
#[derive(Debug, Clone, Default)]
pub struct FrameGuard {
    last: Option<FrameId>,
}

impl FrameGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of the last accepted frame.
    pub fn last(&self) -> Option<FrameId> {
        self.last
    }

    /// Accept `id` if it differs from the last accepted frame.
    ///
    /// Any change is accepted, not only increases, so a device that restarts
    /// its counter after reconnecting is still processed.
    pub fn accept(&mut self, id: FrameId) -> bool {
        if self.last == Some(id) {
            return false;
        }
        self.last = Some(id);
        true
    }

    /// Poll the device and return its frame only if connected and unseen.
    pub fn poll(&mut self, device: &mut dyn HandTrackingDevice) -> Option<HandFrame> {
        if !device.is_connected() {
            return None;
        }
        let frame = device.latest_frame()?;
        if !self.accept(frame.id) {
            tracing::trace!(id = frame.id.0, "frame already processed");
            return None;
        }
        Some(frame)
    }
}

/// In-process device that reports whatever frame was pushed last.
///
/// Stands in for tracking hardware in tests and scripted sessions. Pushing
/// is decoupled from polling, so a frame that is not replaced is reported
/// again on the next poll with the same id.
#[derive(Debug, Clone)]
pub struct ScriptedDevice {
    connected: bool,
    current: Option<HandFrame>,
    next_id: i64,
}

impl Default for ScriptedDevice {
    fn default() -> Self {
        Self {
            connected: true,
            current: None,
            next_id: 1,
        }
    }
}

impl ScriptedDevice {
    /// A connected device with no frame yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Replace the current frame.
    pub fn push_frame(&mut self, frame: HandFrame) {
        self.next_id = self.next_id.max(frame.id.0 + 1);
        self.current = Some(frame);
    }

    /// Publish `hands` as a new frame with the next id. Returns that id.
    pub fn push_hands(&mut self, hands: Vec<HandPose>) -> FrameId {
        let id = FrameId(self.next_id);
        self.push_frame(HandFrame::new(id, hands));
        id
    }
}

impl HandTrackingDevice for ScriptedDevice {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn latest_frame(&mut self) -> Option<HandFrame> {
        self.current.clone()
    }
}
