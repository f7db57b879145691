/// Phase of a cooperative frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
    Idle,
    Running,
    Stopped,
}

/// Bookkeeping for a frame loop driven by a request-next-frame primitive.
///
/// The host issues one request per frame and reports its handle through
/// [`LoopState::scheduled`]; [`LoopState::stop`] hands back whatever request
/// is still pending so it can be cancelled. A stopped loop stays stopped;
/// re-activation builds a new one.
#[derive(Debug)]
pub struct LoopState {
    phase: LoopPhase,
    pending: Option<i32>,
    ticks: u64,
}

impl Default for LoopState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopState {
    pub fn new() -> Self {
        Self {
            phase: LoopPhase::Idle,
            pending: None,
            ticks: 0,
        }
    }

    pub fn start(&mut self) -> bool {
        if self.phase != LoopPhase::Idle {
            return false;
        }
        self.phase = LoopPhase::Running;
        true
    }

    /// Record a frame request. `false` means the loop is no longer running
    /// and the caller must cancel `handle` itself.
    pub fn scheduled(&mut self, handle: i32) -> bool {
        if self.phase != LoopPhase::Running {
            return false;
        }
        self.pending = Some(handle);
        true
    }

    /// Called at the top of every frame callback.
    pub fn begin_tick(&mut self) -> bool {
        self.pending = None;
        if self.phase != LoopPhase::Running {
            return false;
        }
        self.ticks += 1;
        true
    }

    /// Stop the loop, returning the request that still needs cancelling.
    pub fn stop(&mut self) -> Option<i32> {
        self.phase = LoopPhase::Stopped;
        self.pending.take()
    }

    #[inline]
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    #[inline]
    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
