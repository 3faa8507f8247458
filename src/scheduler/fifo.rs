use super::{Dispatch, SchedCtx, Scheduler};
use crate::core::ReadyQueue;

/// First-come-first-served: arrival order, each process runs its whole burst.
pub struct FcfsScheduler {
    ready: ReadyQueue,
}

impl FcfsScheduler {
    pub fn new() -> Self {
        Self {
            ready: ReadyQueue::new_fifo(),
        }
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for FcfsScheduler {
    const NAME: &'static str = "FCFS";

    fn init(&mut self, ctx: &mut SchedCtx) {
        ctx.sort_by_arrival();
        for slot in 0..ctx.len() {
            self.ready.push_back(slot);
        }
    }

    fn dispatch(&mut self, ctx: &mut SchedCtx) -> Option<Dispatch> {
        let slot = self.ready.pop()?;
        let entry = ctx.entry(slot);
        Some(Dispatch {
            slot,
            slice: entry.remaining,
            start_at: entry.arrival,
        })
    }
}
