use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::info;
use sched_model::{
    Policy, PolicyKind, Quantum, SimError, Sim,
    display::{Comparison, Gantt, ScheduleTable},
    scheduler::DEFAULT_QUANTUM,
    sim::{bernoulli_processes, sample_processes},
};

enum MenuChoice {
    Run(PolicyKind),
    CompareAll,
    Exit,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let sim = Sim::new(load_processes()?).context("invalid process set")?;
    info!("Loaded {} processes", sim.processes().len());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(err) => {
                println!("Invalid choice! {err}");
                continue;
            }
        };

        if let MenuChoice::Exit = choice {
            break;
        }
        if let Err(err) = run_choice(&sim, choice, &mut lines) {
            println!("Error: {err:#}");
        }
    }

    println!("\nThank you for using CPU Scheduler!");
    Ok(())
}

// `--random <seed>` swaps the built-in dataset for a seeded Bernoulli workload
fn load_processes() -> anyhow::Result<Vec<sched_model::Process>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(sample_processes()),
        [flag, seed] if flag == "--random" => {
            let seed = seed.parse::<u64>().context("seed must be an unsigned integer")?;
            Ok(bernoulli_processes(40, 0.3, 0.3, 2, 6, seed))
        }
        _ => anyhow::bail!("usage: sched_model [--random <seed>]"),
    }
}

fn run_choice(
    sim: &Sim,
    choice: MenuChoice,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    match choice {
        MenuChoice::Run(kind) => {
            let quantum = match kind {
                PolicyKind::RoundRobin => read_quantum(lines)?,
                _ => Quantum::default(),
            };
            let schedule = sim.run_policy(Policy::with_quantum(kind, quantum))?;
            println!("\n{}\n\n{}", ScheduleTable(&schedule), Gantt(&schedule));
        }
        MenuChoice::CompareAll => {
            let schedules = sim.compare(read_quantum(lines)?)?;
            println!("\n{}", Comparison(&schedules));
        }
        MenuChoice::Exit => {}
    }
    Ok(())
}

fn print_menu() -> io::Result<()> {
    let rule = "=".repeat(80);
    println!("\n{rule}");
    println!("CPU SCHEDULING ALGORITHMS");
    println!("{rule}");
    println!("1. FCFS (First Come First Served)");
    println!("2. SJF (Shortest Job First)");
    println!("3. Round Robin");
    println!("4. Priority Scheduling");
    println!("5. Compare All");
    println!("6. Exit");
    println!("{}", "-".repeat(80));
    print!("Enter your choice (1-6): ");
    io::stdout().flush()
}

fn parse_choice(line: &str) -> Result<MenuChoice, SimError> {
    match line.trim() {
        "5" | "compare" => Ok(MenuChoice::CompareAll),
        "6" | "exit" | "q" => Ok(MenuChoice::Exit),
        other => other.parse().map(MenuChoice::Run),
    }
}

fn read_quantum(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<Quantum> {
    print!("Enter time quantum for Round Robin [{DEFAULT_QUANTUM}]: ");
    io::stdout().flush()?;

    let line = lines.next().transpose()?.unwrap_or_default();
    let line = line.trim();
    if line.is_empty() {
        return Ok(Quantum::default());
    }

    let ticks = line
        .parse::<i64>()
        .with_context(|| format!("'{line}' is not an integer"))?;
    Ok(Quantum::new(ticks)?)
}
