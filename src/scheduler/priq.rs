use super::{Dispatch, SchedCtx, Scheduler, ranked};
use crate::core::ReadyQueue;

/// Non-preemptive priority scheduling; lower value means higher priority.
pub struct PriorityScheduler {
    ready: ReadyQueue,
}

impl PriorityScheduler {
    pub fn new() -> Self {
        Self {
            ready: ReadyQueue::new_ranked(),
        }
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PriorityScheduler {
    const NAME: &'static str = "Priority";

    fn init(&mut self, _ctx: &mut SchedCtx) {}

    fn dispatch(&mut self, ctx: &mut SchedCtx) -> Option<Dispatch> {
        ranked::next_ranked(&mut self.ready, ctx, |entry| entry.priority)
    }
}
