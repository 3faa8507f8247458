use average::{Estimate, Mean};
use rustc_hash::FxHashMap;

use super::job::ScheduledProcess;
use crate::{
    core::{ProcessId, SchedEvent, Ticks},
    error::{Result, SimError},
};

/// Aggregate metrics over one policy run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    pub average_response: f64,
    pub max_waiting: i64,
}

impl Summary {
    pub fn from_processes(processes: &[ScheduledProcess]) -> Result<Self> {
        let max_waiting = processes
            .iter()
            .map(|p| p.outcome.waiting_time)
            .max()
            .ok_or(SimError::EmptyProcessSet)?;

        Ok(Self {
            count: processes.len(),
            average_turnaround: mean(processes.iter().map(|p| p.outcome.turnaround_time)),
            average_waiting: mean(processes.iter().map(|p| p.outcome.waiting_time)),
            average_response: mean(processes.iter().map(|p| p.outcome.response_time)),
            max_waiting,
        })
    }
}

fn mean(iter: impl Iterator<Item = i64>) -> f64 {
    iter.map(|v| v as f64).collect::<Mean>().estimate()
}

/// Result of running one policy over a process set.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub policy: &'static str,
    pub label: String,
    /// One record per process, in the policy's working order.
    pub processes: Vec<ScheduledProcess>,
    pub events: Vec<SchedEvent>,
    pub busy: Ticks,
    pub idle: Ticks,
    pub makespan: Ticks,
    by_id: FxHashMap<ProcessId, usize>,
}

impl Schedule {
    pub(crate) fn new(
        policy: &'static str,
        label: String,
        processes: Vec<ScheduledProcess>,
        events: Vec<SchedEvent>,
        busy: Ticks,
        idle: Ticks,
        makespan: Ticks,
    ) -> Self {
        let by_id = processes
            .iter()
            .enumerate()
            .map(|(index, p)| (p.process.id, index))
            .collect();

        Self {
            policy,
            label,
            processes,
            events,
            busy,
            idle,
            makespan,
            by_id,
        }
    }

    pub fn get(&self, id: ProcessId) -> Option<&ScheduledProcess> {
        self.by_id.get(&id).map(|&index| &self.processes[index])
    }

    pub fn summary(&self) -> Result<Summary> {
        Summary::from_processes(&self.processes)
    }

    /// Fraction of the makespan the CPU spent running processes.
    pub fn utilization(&self) -> f64 {
        if self.makespan == 0 {
            return 0.0;
        }
        self.busy as f64 / self.makespan as f64
    }

    /// Completion order, which differs from working order for SJF, Priority and Round Robin.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SchedEvent::Completed { process, .. } => Some(*process),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::job::{Process, ProcessOutcome};

    fn scheduled(
        id: ProcessId,
        arrival: Ticks,
        burst: Ticks,
        completion: Ticks,
    ) -> ScheduledProcess {
        let process = Process::new(id, arrival, burst, 0);
        ScheduledProcess {
            process,
            outcome: ProcessOutcome::derive(&process, completion - burst, completion),
        }
    }

    #[test]
    fn test_summary_of_empty_set_is_an_error() {
        assert_eq!(Summary::from_processes(&[]), Err(SimError::EmptyProcessSet));
    }

    #[test]
    fn test_summary_averages() {
        let summary =
            Summary::from_processes(&[scheduled(1, 0, 5, 5), scheduled(2, 1, 3, 8)]).unwrap();

        assert_eq!(summary.count, 2);
        assert!((summary.average_turnaround - 6.0).abs() < 1e-9);
        assert!((summary.average_waiting - 2.0).abs() < 1e-9);
        assert_eq!(summary.max_waiting, 4);
    }
}
