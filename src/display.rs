use std::fmt;

use crate::{
    core::SchedEvent,
    sim::{Schedule, Summary},
};

const WIDTH: usize = 80;

/// Per-process results table with averages.
pub struct ScheduleTable<'a>(pub &'a Schedule);

impl fmt::Display for ScheduleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.0;
        writeln!(f, "{}", "=".repeat(WIDTH))?;
        writeln!(f, "Algorithm: {}", schedule.label)?;
        writeln!(f, "{}", "=".repeat(WIDTH))?;
        writeln!(
            f,
            "{:<6}{:<10}{:<8}{:<10}{:<13}{:<13}{:<10}",
            "PID", "Arrival", "Burst", "Priority", "Completion", "Turnaround", "Waiting"
        )?;
        writeln!(f, "{}", "-".repeat(WIDTH))?;

        for p in &schedule.processes {
            writeln!(
                f,
                "{:<6}{:<10}{:<8}{:<10}{:<13}{:<13}{:<10}",
                p.process.id,
                p.process.arrival_time,
                p.process.burst_time,
                p.process.priority,
                p.outcome.completion_time,
                p.outcome.turnaround_time,
                p.outcome.waiting_time
            )?;
        }

        writeln!(f, "{}", "-".repeat(WIDTH))?;
        match schedule.summary() {
            Ok(summary) => {
                writeln!(f, "Average Turnaround Time: {:.2}", summary.average_turnaround)?;
                writeln!(f, "Average Waiting Time: {:.2}", summary.average_waiting)?;
                writeln!(f, "Average Response Time: {:.2}", summary.average_response)?;
            }
            Err(err) => writeln!(f, "Averages unavailable: {err}")?,
        }
        write!(
            f,
            "CPU Utilization: {:.2}% (busy {}, idle {})",
            schedule.utilization() * 100.0,
            schedule.busy,
            schedule.idle
        )
    }
}

/// Single-line Gantt chart, e.g. `| P1 | idle | P2 |` with boundary ticks below.
pub struct Gantt<'a>(pub &'a Schedule);

impl fmt::Display for Gantt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bars = String::from("|");
        let mut ticks = String::new();

        for event in &self.0.events {
            let (name, start) = match *event {
                SchedEvent::Slice { process, start, .. } => (format!("P{process}"), start),
                SchedEvent::Idle { from, .. } => ("idle".to_owned(), from),
                _ => continue,
            };

            let cell = format!(" {name} |");
            let start = start.to_string();
            ticks.push_str(&format!("{start:<width$}", width = cell.len()));
            bars.push_str(&cell);
        }

        writeln!(f, "{bars}")?;
        write!(f, "{ticks}{}", self.0.makespan)
    }
}

/// Side-by-side averages for several policy runs.
pub struct Comparison<'a>(pub &'a [Schedule]);

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(WIDTH))?;
        writeln!(
            f,
            "{:<30}{:>12}{:>12}{:>12}{:>12}",
            "Algorithm", "Avg TAT", "Avg Wait", "Makespan", "Util %"
        )?;
        writeln!(f, "{}", "-".repeat(WIDTH))?;

        for schedule in self.0 {
            let Summary {
                average_turnaround,
                average_waiting,
                ..
            } = match schedule.summary() {
                Ok(summary) => summary,
                Err(err) => {
                    writeln!(f, "{:<30}{err}", schedule.label)?;
                    continue;
                }
            };
            writeln!(
                f,
                "{:<30}{:>12.2}{:>12.2}{:>12}{:>12.1}",
                schedule.label,
                average_turnaround,
                average_waiting,
                schedule.makespan,
                schedule.utilization() * 100.0
            )?;
        }

        write!(f, "{}", "=".repeat(WIDTH))
    }
}
