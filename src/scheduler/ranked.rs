use super::Dispatch;
use crate::core::{Entry, EntryState, ReadyQueue, SchedCtx};

// Shared non-preemptive selection for SJF and Priority.
//
// Every pending process that has arrived is ranked by (key, slot), so equal keys
// go to the lowest original index. When nothing has arrived, the first pending
// slot in index order runs next, not the one with the earliest arrival.
pub(super) fn next_ranked(
    ready: &mut ReadyQueue,
    ctx: &mut SchedCtx,
    key: impl Fn(&Entry) -> i64,
) -> Option<Dispatch> {
    for slot in 0..ctx.len() {
        let entry = ctx.entry(slot);
        if entry.state == EntryState::Pending && entry.arrival <= ctx.now {
            let rank = key(entry);
            ctx.mark_ready(slot);
            ready.push_ranked(slot, rank);
        }
    }

    let slot = ready.pop().or_else(|| ctx.first_pending())?;
    let entry = ctx.entry(slot);
    Some(Dispatch {
        slot,
        slice: entry.remaining,
        start_at: entry.arrival,
    })
}
