use crate::core::{Entry, ProcessId, Ticks};

/// Immutable description of one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    // Lower value = higher priority
    pub priority: i64,
}

impl Process {
    pub const fn new(
        id: ProcessId,
        arrival_time: Ticks,
        burst_time: Ticks,
        priority: i64,
    ) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// Computed result for one process after a policy run.
///
/// Turnaround and waiting are signed. Round Robin queues every process up
/// front, so a late arrival can finish before the time it nominally arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub turnaround_time: i64,
    pub waiting_time: i64,
    pub response_time: i64,
}

impl ProcessOutcome {
    pub fn derive(process: &Process, start_time: Ticks, completion_time: Ticks) -> Self {
        let turnaround_time = signed_diff(completion_time, process.arrival_time);
        let waiting_time = turnaround_time - signed(process.burst_time);
        Self {
            start_time,
            completion_time,
            turnaround_time,
            waiting_time,
            response_time: signed_diff(start_time, process.arrival_time),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledProcess {
    pub process: Process,
    pub outcome: ProcessOutcome,
}

impl ScheduledProcess {
    // None while the entry is unfinished
    pub(crate) fn from_entry(entry: &Entry) -> Option<Self> {
        let process = Process::new(entry.id, entry.arrival, entry.burst, entry.priority);
        let completion_time = entry.completion_time?;
        let start_time = entry.start_time?;
        Some(Self {
            process,
            outcome: ProcessOutcome::derive(&process, start_time, completion_time),
        })
    }
}

// Sim::new keeps every tick on the timeline within i64
fn signed(ticks: Ticks) -> i64 {
    ticks as i64
}

fn signed_diff(a: Ticks, b: Ticks) -> i64 {
    signed(a) - signed(b)
}
