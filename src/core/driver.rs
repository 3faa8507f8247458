use log::debug;

use super::{
    observer::Observer,
    state::{SchedCtx, Slot, Ticks},
};
use crate::scheduler::Scheduler;

/// One scheduling decision: run `slot` for `slice` ticks, no earlier than `start_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub slot: Slot,
    pub slice: Ticks,
    pub start_at: Ticks,
}

pub struct SchedCore<S: Scheduler> {
    pub ctx: SchedCtx,
    pub scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(mut ctx: SchedCtx, mut scheduler: S) -> Self {
        scheduler.init(&mut ctx);
        Self {
            ctx,
            scheduler,
            observer: Observer::new(),
        }
    }

    // Returns false once the policy has nothing left to dispatch
    pub fn step(&mut self) -> bool {
        let Some(dispatch) = self.scheduler.dispatch(&mut self.ctx) else {
            return false;
        };

        // Idle gap when nothing eligible has arrived yet
        self.ctx.idle_until(dispatch.start_at);

        let entry = self.ctx.entry(dispatch.slot);
        debug!(
            "{}: t={} run P{} for {} (remaining {})",
            S::NAME,
            self.ctx.now,
            entry.id,
            dispatch.slice,
            entry.remaining
        );

        let completed = self.ctx.run_slot(dispatch.slot, dispatch.slice);
        self.scheduler
            .stopping(&mut self.ctx, dispatch.slot, completed);
        self.observer.observe(&self.ctx);
        true
    }

    pub fn run_to_completion(&mut self) {
        while self.step() {}
        debug_assert!(
            self.ctx.all_completed(),
            "{} stopped dispatching with unfinished processes",
            S::NAME
        );
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn into_ctx(self) -> SchedCtx {
        self.ctx
    }
}
