use log::trace;

use super::state::{EntryState, SchedCtx};

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &SchedCtx) {
        self.step += 1;
        trace!(
            "step={} now={} busy={} idle={}",
            self.step, ctx.now, ctx.busy, ctx.idle
        );

        debug_assert_eq!(
            ctx.busy + ctx.idle,
            ctx.now,
            "Busy and idle time must account for the whole timeline"
        );

        for entry in &ctx.entries {
            debug_assert_ne!(
                entry.state,
                EntryState::Running,
                "Process {} left Running between dispatches",
                entry.id
            );
            debug_assert!(
                entry.remaining <= entry.burst,
                "Process {} has more remaining time than its burst",
                entry.id
            );

            if entry.state == EntryState::Completed {
                debug_assert_eq!(
                    entry.remaining, 0,
                    "Completed process {} still has remaining time",
                    entry.id
                );
                debug_assert!(
                    entry.completion_time.is_some_and(|t| t <= ctx.now),
                    "Completed process {} has no valid completion time",
                    entry.id
                );
            } else {
                debug_assert!(
                    entry.completion_time.is_none(),
                    "Unfinished process {} carries a completion time",
                    entry.id
                );
            }
        }
    }
}
