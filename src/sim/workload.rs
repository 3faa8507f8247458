use rand::prelude::*;

use super::job::Process;
use crate::core::{ProcessId, Ticks};

/// Built-in ten-process dataset: (id, arrival, burst, priority).
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new(1, 0, 8, 1),
        Process::new(2, 1, 4, 2),
        Process::new(3, 2, 2, 1),
        Process::new(4, 3, 1, 3),
        Process::new(5, 4, 3, 2),
        Process::new(6, 5, 6, 2),
        Process::new(7, 6, 3, 1),
        Process::new(8, 7, 5, 3),
        Process::new(9, 8, 2, 2),
        Process::new(10, 9, 4, 1),
    ]
}

/// Seeded random workload: at each tick a process arrives with probability
/// `p_arrival`, and is short with probability `p_short`.
pub fn bernoulli_processes(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut processes = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst_time = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            processes.push(Process {
                id: processes.len() as ProcessId + 1,
                arrival_time: t,
                burst_time,
                priority: rng.random_range(1..=3),
            });
        }
    }

    processes
}
