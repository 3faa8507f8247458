/*!
 * Scheduling Property Tests
 * Invariants that hold for every policy over generated process sets
 */

use proptest::prelude::*;
use sched_model::{
    Process, Schedule, fcfs, priority, round_robin,
    sim::{bernoulli_processes, sample_processes},
    sjf,
};

fn processes_strategy(max_arrival: u64) -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0..=max_arrival, 1u64..=12, -3i64..=3), 1..16).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, prio))| Process::new(i as u32 + 1, arrival, burst, prio))
            .collect()
    })
}

fn all_policies(processes: &[Process], quantum: i64) -> Vec<Schedule> {
    vec![
        fcfs(processes).unwrap(),
        sjf(processes).unwrap(),
        round_robin(processes, quantum).unwrap(),
        priority(processes).unwrap(),
    ]
}

fn completions(schedule: &Schedule) -> Vec<(u32, u64)> {
    schedule
        .processes
        .iter()
        .map(|p| (p.process.id, p.outcome.completion_time))
        .collect()
}

proptest! {
    #[test]
    fn prop_metrics_are_derived(processes in processes_strategy(30), quantum in 1i64..6) {
        for schedule in all_policies(&processes, quantum) {
            prop_assert_eq!(schedule.processes.len(), processes.len());
            for p in &schedule.processes {
                let o = p.outcome;
                prop_assert_eq!(o.turnaround_time, o.completion_time as i64 - p.process.arrival_time as i64);
                prop_assert_eq!(o.waiting_time, o.turnaround_time - p.process.burst_time as i64);
            }
        }
    }

    #[test]
    fn prop_busy_time_equals_total_burst(processes in processes_strategy(30), quantum in 1i64..6) {
        let total: u64 = processes.iter().map(|p| p.burst_time).sum();
        for schedule in all_policies(&processes, quantum) {
            prop_assert_eq!(schedule.busy, total);
            prop_assert_eq!(schedule.busy + schedule.idle, schedule.makespan);
        }
    }

    #[test]
    fn prop_non_preemptive_never_finish_early(processes in processes_strategy(30)) {
        for schedule in [fcfs(&processes).unwrap(), sjf(&processes).unwrap(), priority(&processes).unwrap()] {
            for p in &schedule.processes {
                prop_assert!(p.outcome.completion_time >= p.process.arrival_time + p.process.burst_time);
                prop_assert!(p.outcome.waiting_time >= 0);
            }
        }
    }

    #[test]
    fn prop_round_robin_never_finishes_early_when_all_arrive_at_zero(
        processes in processes_strategy(0),
        quantum in 1i64..6,
    ) {
        let schedule = round_robin(&processes, quantum).unwrap();
        for p in &schedule.processes {
            prop_assert!(p.outcome.completion_time >= p.process.burst_time);
        }
    }

    #[test]
    fn prop_fcfs_is_idempotent(processes in processes_strategy(30)) {
        let first = fcfs(&processes).unwrap();
        let second = fcfs(&processes).unwrap();
        prop_assert_eq!(first.processes, second.processes);
        prop_assert_eq!(first.events, second.events);
    }

    #[test]
    fn prop_round_robin_with_large_quantum_matches_fcfs_without_idle(processes in processes_strategy(0)) {
        let max_burst = processes.iter().map(|p| p.burst_time).max().unwrap() as i64;
        let rr = round_robin(&processes, max_burst).unwrap();
        let fcfs = fcfs(&processes).unwrap();
        prop_assert_eq!(rr.processes, fcfs.processes);
    }

    #[test]
    fn prop_each_process_completes_exactly_once(processes in processes_strategy(30), quantum in 1i64..6) {
        for schedule in all_policies(&processes, quantum) {
            let mut order = schedule.completion_order();
            order.sort_unstable();
            let mut ids: Vec<_> = processes.iter().map(|p| p.id).collect();
            ids.sort_unstable();
            prop_assert_eq!(order, ids);
        }
    }
}

#[test]
fn test_round_robin_with_large_quantum_matches_fcfs_on_sample() {
    let processes = sample_processes();
    let rr = round_robin(&processes, 8).unwrap();
    let fcfs = fcfs(&processes).unwrap();
    assert_eq!(completions(&rr), completions(&fcfs));
}

#[test]
fn test_random_workload_runs_under_every_policy() {
    let processes = bernoulli_processes(500, 0.3, 0.3, 2, 6, 0);
    let total: u64 = processes.iter().map(|p| p.burst_time).sum();

    for schedule in all_policies(&processes, 3) {
        assert_eq!(schedule.busy, total);
        assert_eq!(schedule.summary().unwrap().count, processes.len());
    }
}
