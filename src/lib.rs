pub mod core;
pub mod display;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use error::{Result, SimError};
pub use scheduler::{Policy, PolicyKind, Quantum, Scheduler};
pub use sim::{
    Process, ProcessOutcome, Schedule, ScheduledProcess, Sim, Summary, fcfs, priority,
    round_robin, sjf,
};
