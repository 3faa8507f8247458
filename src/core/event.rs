use crate::core::{ProcessId, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    // CPU had nothing eligible to run
    Idle {
        from: Ticks,
        to: Ticks,
    },
    Slice {
        process: ProcessId,
        start: Ticks,
        end: Ticks,
    },
    Preempted {
        process: ProcessId,
        at: Ticks,
        remaining: Ticks,
    },
    Completed {
        process: ProcessId,
        at: Ticks,
    },
}
