use std::fmt;

use super::{Dispatch, SchedCtx, Scheduler, Slot};
use crate::{
    core::{ReadyQueue, Ticks},
    error::SimError,
};

pub const DEFAULT_QUANTUM: Ticks = 2;

/// Round Robin time slice, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantum(Ticks);

impl Quantum {
    pub fn new(ticks: i64) -> Result<Self, SimError> {
        match Ticks::try_from(ticks) {
            Ok(ticks) if ticks > 0 => Ok(Self(ticks)),
            _ => Err(SimError::InvalidQuantum(ticks)),
        }
    }

    #[inline]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl fmt::Display for Quantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Preemptive Round Robin with a fixed quantum.
///
/// Every process is queued once, up front, in arrival order. Arrival times are
/// not checked again and the CPU never idles: a process that arrives after the
/// queue has reached it still runs at its turn.
pub struct RoundRobinScheduler {
    quantum: Quantum,
    ready: ReadyQueue,
}

impl RoundRobinScheduler {
    pub fn new(quantum: Quantum) -> Self {
        Self {
            quantum,
            ready: ReadyQueue::new_fifo(),
        }
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin";

    fn init(&mut self, ctx: &mut SchedCtx) {
        ctx.sort_by_arrival();
        for slot in 0..ctx.len() {
            ctx.mark_ready(slot);
            self.ready.push_back(slot);
        }
    }

    fn dispatch(&mut self, ctx: &mut SchedCtx) -> Option<Dispatch> {
        let slot = self.ready.pop()?;
        Some(Dispatch {
            slot,
            slice: ctx.entry(slot).remaining.min(self.quantum.ticks()),
            start_at: ctx.now,
        })
    }

    fn stopping(&mut self, _ctx: &mut SchedCtx, slot: Slot, completed: bool) {
        if !completed {
            debug_assert!(!self.ready.contains(slot), "Slot {slot} queued twice");
            self.ready.push_back(slot);
        }
    }

    fn label(&self) -> String {
        format!("{} (Quantum = {})", Self::NAME, self.quantum)
    }
}
