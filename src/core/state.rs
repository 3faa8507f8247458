use keyed_priority_queue::KeyedPriorityQueue;
use std::collections::VecDeque;

use super::event::SchedEvent;

// Index into the context's entry Vec
pub type Slot = usize;
pub type ProcessId = u32;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Pending,
    Ready,
    Running,
    Completed,
}

/// Per-run bookkeeping for one process.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: ProcessId,
    pub state: EntryState,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: i64,
    pub remaining: Ticks,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Rank {
    pub key: i64,
    pub slot: Slot,
}

// KeyedPriorityQueue is a max-heap, so the smallest (key, slot) must compare greatest
impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.key, other.slot).cmp(&(self.key, self.slot))
    }
}

#[derive(Debug)]
pub enum ReadyQueue {
    Fifo {
        slots: VecDeque<Slot>,
    },
    Ranked {
        slots: KeyedPriorityQueue<Slot, Rank>,
    },
}

impl ReadyQueue {
    pub fn new_fifo() -> Self {
        Self::Fifo {
            slots: VecDeque::new(),
        }
    }

    pub fn new_ranked() -> Self {
        Self::Ranked {
            slots: KeyedPriorityQueue::new(),
        }
    }

    pub fn push_back(&mut self, slot: Slot) {
        match self {
            Self::Fifo { slots } => slots.push_back(slot),
            Self::Ranked { .. } => panic!("Attempted FIFO push onto a ranked queue"),
        }
    }

    pub fn push_ranked(&mut self, slot: Slot, key: i64) {
        match self {
            Self::Ranked { slots } => {
                let previous = slots.push(slot, Rank { key, slot });
                debug_assert!(previous.is_none(), "Slot {slot} ranked twice");
            }
            Self::Fifo { .. } => panic!("Attempted ranked push onto a FIFO queue"),
        }
    }

    pub fn pop(&mut self) -> Option<Slot> {
        match self {
            Self::Fifo { slots } => slots.pop_front(),
            Self::Ranked { slots } => slots.pop().map(|(slot, _)| slot),
        }
    }

    pub fn contains(&self, slot: Slot) -> bool {
        match self {
            Self::Fifo { slots } => slots.contains(&slot),
            Self::Ranked { slots } => slots.iter().any(|s| *s.0 == slot),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo { slots } => slots.len(),
            Self::Ranked { slots } => slots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Simulated single-CPU timeline plus the working copy of every process.
#[derive(Debug, Default)]
pub struct SchedCtx {
    pub now: Ticks,
    pub busy: Ticks,
    pub idle: Ticks,
    pub entries: Vec<Entry>,
    pub events: Vec<SchedEvent>,
}

impl SchedCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_entry(
        &mut self,
        id: ProcessId,
        arrival: Ticks,
        burst: Ticks,
        priority: i64,
    ) -> Slot {
        let slot = self.entries.len();
        self.entries.push(Entry {
            id,
            state: EntryState::Pending,
            arrival,
            burst,
            priority,
            remaining: burst,
            start_time: None,
            completion_time: None,
        });
        slot
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, slot: Slot) -> &Entry {
        &self.entries[slot]
    }

    pub fn entry_mut(&mut self, slot: Slot) -> &mut Entry {
        &mut self.entries[slot]
    }

    /// Stable sort of the working order by arrival time. Only valid before the first dispatch.
    pub fn sort_by_arrival(&mut self) {
        debug_assert!(
            self.entries.iter().all(|e| e.state == EntryState::Pending),
            "Working order must be fixed before scheduling starts"
        );
        self.entries.sort_by_key(|e| e.arrival);
    }

    pub fn first_pending(&self) -> Option<Slot> {
        self.entries
            .iter()
            .position(|e| e.state == EntryState::Pending)
    }

    pub fn all_completed(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.state == EntryState::Completed)
    }

    pub fn idle_until(&mut self, until: Ticks) {
        if self.now >= until {
            return;
        }
        self.events.push(SchedEvent::Idle {
            from: self.now,
            to: until,
        });
        self.idle += until - self.now;
        self.now = until;
    }

    pub fn mark_ready(&mut self, slot: Slot) {
        let entry = self.entry_mut(slot);
        debug_assert!(
            entry.state != EntryState::Completed,
            "Completed process {} cannot be ready",
            entry.id
        );
        entry.state = EntryState::Ready;
    }

    // Returns true if the slice finished the process
    pub fn run_slot(&mut self, slot: Slot, slice: Ticks) -> bool {
        let start = self.now;
        let entry = &mut self.entries[slot];
        debug_assert!(
            entry.state != EntryState::Completed,
            "Process {} dispatched after completion",
            entry.id
        );
        debug_assert!(
            slice > 0 && slice <= entry.remaining,
            "Slice {slice} out of range for process {} with {} remaining",
            entry.id,
            entry.remaining
        );

        entry.state = EntryState::Running;
        entry.start_time.get_or_insert(start);
        entry.remaining -= slice;
        let id = entry.id;
        let remaining = entry.remaining;

        self.now += slice;
        self.busy += slice;
        self.events.push(SchedEvent::Slice {
            process: id,
            start,
            end: self.now,
        });

        if remaining == 0 {
            self.mark_completed(slot);
            true
        } else {
            self.mark_ready(slot);
            self.events.push(SchedEvent::Preempted {
                process: id,
                at: self.now,
                remaining,
            });
            false
        }
    }

    fn mark_completed(&mut self, slot: Slot) {
        let now = self.now;
        let entry = self.entry_mut(slot);
        debug_assert!(
            entry.state == EntryState::Running,
            "Process {} must have been running before marked complete",
            entry.id
        );
        entry.state = EntryState::Completed;
        entry.completion_time = Some(now);
        let id = entry.id;
        self.events.push(SchedEvent::Completed {
            process: id,
            at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_queue_pops_smallest_key_then_lowest_slot() {
        let mut ready = ReadyQueue::new_ranked();
        ready.push_ranked(0, 5);
        ready.push_ranked(3, 2);
        ready.push_ranked(1, 2);
        ready.push_ranked(2, 9);

        assert_eq!(ready.pop(), Some(1));
        assert_eq!(ready.pop(), Some(3));
        assert_eq!(ready.pop(), Some(0));
        assert_eq!(ready.pop(), Some(2));
        assert!(ready.is_empty());
    }

    #[test]
    fn test_idle_until_only_moves_forward() {
        let mut ctx = SchedCtx::new();
        ctx.idle_until(4);
        ctx.idle_until(2);

        assert_eq!(ctx.now, 4);
        assert_eq!(ctx.idle, 4);
        assert_eq!(ctx.events, vec![SchedEvent::Idle { from: 0, to: 4 }]);
    }

    #[test]
    fn test_run_slot_preempts_then_completes() {
        let mut ctx = SchedCtx::new();
        let slot = ctx.create_entry(7, 0, 3, 1);

        assert!(!ctx.run_slot(slot, 2));
        assert_eq!(ctx.entry(slot).state, EntryState::Ready);
        assert_eq!(ctx.entry(slot).remaining, 1);

        assert!(ctx.run_slot(slot, 1));
        assert_eq!(ctx.entry(slot).completion_time, Some(3));
        assert_eq!(ctx.busy, 3);
        assert!(ctx.all_completed());
    }

    #[test]
    fn test_sort_by_arrival_is_stable() {
        let mut ctx = SchedCtx::new();
        ctx.create_entry(5, 2, 1, 0);
        ctx.create_entry(3, 0, 1, 0);
        ctx.create_entry(4, 0, 1, 0);
        ctx.sort_by_arrival();

        let ids: Vec<_> = ctx.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }
}
