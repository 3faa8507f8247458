use thiserror::Error;

use crate::core::{ProcessId, Ticks};

/// Errors surfaced before or at the start of a simulation run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// A process asks for no CPU time at all
    #[error("Invalid burst time for process {id}: {burst} (must be positive)")]
    InvalidBurstTime { id: ProcessId, burst: Ticks },

    /// Round Robin quantum that is zero or negative
    #[error("Invalid time quantum: {0} (must be positive)")]
    InvalidQuantum(i64),

    #[error("No processes supplied")]
    EmptyProcessSet,

    #[error("Unknown scheduling policy '{0}'. Valid: fcfs, sjf, round_robin, priority")]
    UnknownPolicy(String),

    #[error("Duplicate process id {0}")]
    DuplicateProcessId(ProcessId),

    /// Latest arrival plus total burst does not fit in a signed tick count
    #[error("Process set overflows the timeline: latest arrival plus total burst exceeds i64::MAX ticks")]
    TimelineOverflow,

    /// A policy stopped dispatching before this process finished
    #[error("Process {0} never completed")]
    Incomplete(ProcessId),
}

pub type Result<T, E = SimError> = std::result::Result<T, E>;
