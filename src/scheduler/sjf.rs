use super::{Dispatch, SchedCtx, Scheduler, ranked};
use crate::core::ReadyQueue;

/// Non-preemptive shortest job first.
pub struct SjfScheduler {
    ready: ReadyQueue,
}

impl SjfScheduler {
    pub fn new() -> Self {
        Self {
            ready: ReadyQueue::new_ranked(),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "SJF";

    fn init(&mut self, _ctx: &mut SchedCtx) {}

    fn dispatch(&mut self, ctx: &mut SchedCtx) -> Option<Dispatch> {
        // Bursts are bounded by the validated horizon
        ranked::next_ranked(&mut self.ready, ctx, |entry| entry.burst as i64)
    }
}
