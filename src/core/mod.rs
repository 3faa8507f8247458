pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::{Dispatch, SchedCore};
pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{Entry, EntryState, ProcessId, Rank, ReadyQueue, SchedCtx, Slot, Ticks};
