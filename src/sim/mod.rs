pub mod driver;
pub mod job;
pub mod report;
pub mod workload;

pub use driver::{Sim, fcfs, priority, round_robin, sjf};
pub use job::{Process, ProcessOutcome, ScheduledProcess};
pub use report::{Schedule, Summary};
pub use workload::{bernoulli_processes, sample_processes};
