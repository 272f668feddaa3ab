//! Display-refresh scheduling.

/// Identifies a single requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Schedules work for the next display refresh.
pub trait FrameScheduler {
    /// Request a callback on the next refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a pending request. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Single-threaded frame scheduler driven by the host's refresh loop.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameQueue {
    /// Construct an empty [`FrameQueue`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal a display refresh, draining the handles due now.
    ///
    /// Requests made while dispatching these handles land on the next tick.
    pub fn tick(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }

    /// True when no frame is pending.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|&h| h != handle);
    }
}
