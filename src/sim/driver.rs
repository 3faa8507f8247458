use log::info;
use rustc_hash::FxHashSet;

use super::{
    job::{Process, ScheduledProcess},
    report::Schedule,
};
use crate::{
    core::{SchedCore, SchedCtx, Ticks},
    error::{Result, SimError},
    scheduler::{
        FcfsScheduler, Policy, PolicyKind, PriorityScheduler, Quantum, RoundRobinScheduler,
        Scheduler, SjfScheduler,
    },
};

// No run can end later than the latest arrival plus every burst back to back
const MAX_HORIZON: Ticks = i64::MAX as Ticks;

/// A validated base dataset. Every run works on its own copy.
#[derive(Debug, Clone)]
pub struct Sim {
    processes: Vec<Process>,
}

impl Sim {
    pub fn new(processes: Vec<Process>) -> Result<Self> {
        if processes.is_empty() {
            return Err(SimError::EmptyProcessSet);
        }

        let mut seen = FxHashSet::default();
        for process in &processes {
            if process.burst_time == 0 {
                return Err(SimError::InvalidBurstTime {
                    id: process.id,
                    burst: process.burst_time,
                });
            }
            if !seen.insert(process.id) {
                return Err(SimError::DuplicateProcessId(process.id));
            }
        }

        let latest_arrival = processes
            .iter()
            .map(|p| p.arrival_time)
            .max()
            .unwrap_or_default();
        let horizon = processes
            .iter()
            .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time));
        match horizon {
            Some(horizon) if horizon <= MAX_HORIZON => {}
            _ => return Err(SimError::TimelineOverflow),
        }

        Ok(Self { processes })
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn run<S: Scheduler>(&self, scheduler: S) -> Result<Schedule> {
        let label = scheduler.label();
        info!("Running {} over {} processes", label, self.processes.len());

        let mut ctx = SchedCtx::new();
        for p in &self.processes {
            ctx.create_entry(p.id, p.arrival_time, p.burst_time, p.priority);
        }

        let mut core = SchedCore::new(ctx, scheduler);
        core.run_to_completion();
        let steps = core.observer().steps();
        let ctx = core.into_ctx();

        let processes = ctx
            .entries
            .iter()
            .map(|entry| {
                ScheduledProcess::from_entry(entry).ok_or(SimError::Incomplete(entry.id))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            "{} finished at t={} after {} dispatches (busy={}, idle={})",
            label, ctx.now, steps, ctx.busy, ctx.idle
        );

        Ok(Schedule::new(
            S::NAME,
            label,
            processes,
            ctx.events,
            ctx.busy,
            ctx.idle,
            ctx.now,
        ))
    }

    pub fn run_policy(&self, policy: Policy) -> Result<Schedule> {
        match policy {
            Policy::Fcfs => self.run(FcfsScheduler::new()),
            Policy::Sjf => self.run(SjfScheduler::new()),
            Policy::RoundRobin { quantum } => self.run(RoundRobinScheduler::new(quantum)),
            Policy::Priority => self.run(PriorityScheduler::new()),
        }
    }

    /// Runs every policy over its own copy of the dataset, in menu order.
    pub fn compare(&self, quantum: Quantum) -> Result<Vec<Schedule>> {
        PolicyKind::ALL
            .iter()
            .map(|&kind| self.run_policy(Policy::with_quantum(kind, quantum)))
            .collect()
    }
}

pub fn fcfs(processes: &[Process]) -> Result<Schedule> {
    Sim::new(processes.to_vec())?.run(FcfsScheduler::new())
}

pub fn sjf(processes: &[Process]) -> Result<Schedule> {
    Sim::new(processes.to_vec())?.run(SjfScheduler::new())
}

/// Quantum is checked before the process set.
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<Schedule> {
    let quantum = Quantum::new(quantum)?;
    Sim::new(processes.to_vec())?.run(RoundRobinScheduler::new(quantum))
}

pub fn priority(processes: &[Process]) -> Result<Schedule> {
    Sim::new(processes.to_vec())?.run(PriorityScheduler::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_set() {
        assert_eq!(Sim::new(Vec::new()).unwrap_err(), SimError::EmptyProcessSet);
    }

    #[test]
    fn test_rejects_zero_burst() {
        let err = Sim::new(vec![Process::new(1, 0, 2, 0), Process::new(2, 1, 0, 0)]).unwrap_err();
        assert_eq!(err, SimError::InvalidBurstTime { id: 2, burst: 0 });
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Sim::new(vec![Process::new(1, 0, 2, 0), Process::new(1, 1, 3, 0)]).unwrap_err();
        assert_eq!(err, SimError::DuplicateProcessId(1));
    }

    #[test]
    fn test_rejects_process_set_past_the_horizon() {
        let half = u64::MAX / 2 + 1;
        let err = Sim::new(vec![Process::new(1, 0, half, 0), Process::new(2, 0, half, 0)])
            .unwrap_err();
        assert_eq!(err, SimError::TimelineOverflow);

        let err = fcfs(&[Process::new(1, MAX_HORIZON, 1, 0)]).unwrap_err();
        assert_eq!(err, SimError::TimelineOverflow);
    }

    #[test]
    fn test_accepts_process_set_ending_on_the_horizon() {
        let schedule = fcfs(&[
            Process::new(1, 0, MAX_HORIZON - 10, 0),
            Process::new(2, 0, 10, 0),
        ])
        .unwrap();

        assert_eq!(schedule.busy, MAX_HORIZON);
        assert_eq!(schedule.idle, 0);
        assert_eq!(schedule.makespan, MAX_HORIZON);
        let p2 = schedule.get(2).unwrap().outcome;
        assert_eq!(p2.turnaround_time, i64::MAX);
        assert_eq!(p2.waiting_time, i64::MAX - 10);
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let sim = Sim::new(vec![Process::new(1, 0, 5, 1), Process::new(2, 1, 3, 2)]).unwrap();

        let rr = sim
            .run_policy(Policy::from_kind(PolicyKind::RoundRobin, 2).unwrap())
            .unwrap();
        let fcfs = sim.run_policy(Policy::Fcfs).unwrap();

        assert_eq!(rr.get(2).unwrap().outcome.completion_time, 7);
        assert_eq!(fcfs.get(2).unwrap().outcome.completion_time, 8);
        assert_eq!(sim.processes()[0], Process::new(1, 0, 5, 1));
    }

    #[test]
    fn test_compare_runs_all_policies_in_menu_order() {
        let sim = Sim::new(vec![Process::new(1, 0, 5, 1), Process::new(2, 1, 3, 2)]).unwrap();
        let policies: Vec<_> = sim
            .compare(Quantum::default())
            .unwrap()
            .iter()
            .map(|s| s.policy)
            .collect();

        assert_eq!(policies, vec!["FCFS", "SJF", "Round Robin", "Priority"]);
    }
}
