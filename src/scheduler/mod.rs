pub mod fifo;
pub mod priq;
mod ranked;
pub mod round_robin;
pub mod sjf;

use std::{fmt, str::FromStr};

use crate::{
    core::{
        driver::Dispatch,
        state::{SchedCtx, Slot},
    },
    error::SimError,
};
pub use fifo::FcfsScheduler;
pub use priq::PriorityScheduler;
pub use round_robin::{DEFAULT_QUANTUM, Quantum, RoundRobinScheduler};
pub use sjf::SjfScheduler;

/// A scheduling policy, driven by [`crate::core::SchedCore`].
///
/// The policy only decides; the driver executes each [`Dispatch`] against the
/// context, records idle gaps and completions, and reports back via `stopping`.
pub trait Scheduler {
    const NAME: &'static str;

    /// Fix the working order and seed any ready queue. Called once before the first dispatch.
    fn init(&mut self, ctx: &mut SchedCtx);

    fn dispatch(&mut self, ctx: &mut SchedCtx) -> Option<Dispatch>;

    fn stopping(&mut self, _ctx: &mut SchedCtx, _slot: Slot, _completed: bool) {}

    fn label(&self) -> String {
        Self::NAME.to_owned()
    }
}

/// Policy selector without parameters, as picked from a menu or command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fcfs,
    Sjf,
    RoundRobin,
    Priority,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [Self::Fcfs, Self::Sjf, Self::RoundRobin, Self::Priority];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin => "round_robin",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "fcfs" | "fifo" => Ok(Self::Fcfs),
            "2" | "sjf" => Ok(Self::Sjf),
            "3" | "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "4" | "priority" | "prio" => Ok(Self::Priority),
            _ => Err(SimError::UnknownPolicy(s.trim().to_owned())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully parameterised policy, ready to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    RoundRobin { quantum: Quantum },
    Priority,
}

impl Policy {
    /// Build a policy from its selector. `quantum` is validated only for Round Robin.
    pub fn from_kind(kind: PolicyKind, quantum: i64) -> Result<Self, SimError> {
        let quantum = match kind {
            PolicyKind::RoundRobin => Quantum::new(quantum)?,
            _ => Quantum::default(),
        };
        Ok(Self::with_quantum(kind, quantum))
    }

    pub const fn with_quantum(kind: PolicyKind, quantum: Quantum) -> Self {
        match kind {
            PolicyKind::Fcfs => Self::Fcfs,
            PolicyKind::Sjf => Self::Sjf,
            PolicyKind::RoundRobin => Self::RoundRobin { quantum },
            PolicyKind::Priority => Self::Priority,
        }
    }

    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::Fcfs => PolicyKind::Fcfs,
            Self::Sjf => PolicyKind::Sjf,
            Self::RoundRobin { .. } => PolicyKind::RoundRobin,
            Self::Priority => PolicyKind::Priority,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Scheduler;
    use crate::core::{ProcessId, SchedCore, SchedCtx, Ticks};

    /// Runs `scheduler` over `(id, arrival, burst, priority)` tuples and returns
    /// `(id, completion)` in the policy's working order.
    pub fn completions<S: Scheduler>(
        scheduler: S,
        processes: &[(ProcessId, Ticks, Ticks, i64)],
    ) -> Vec<(ProcessId, Ticks)> {
        let mut ctx = SchedCtx::new();
        for &(id, arrival, burst, priority) in processes {
            ctx.create_entry(id, arrival, burst, priority);
        }
        let mut core = SchedCore::new(ctx, scheduler);
        core.run_to_completion();
        core.ctx
            .entries
            .iter()
            .map(|e| (e.id, e.completion_time.unwrap()))
            .collect()
    }
}
