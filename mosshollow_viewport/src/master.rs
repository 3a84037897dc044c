// Game-master state: the canonical level and the viewport registry.
//
// `Master` is the single owner of the mutable `Level`. All mutation
// happens through `handle_input`, called from the master thread's loop in
// `engine.rs` — no internal locking, mirroring the rule that exactly one
// thread ever sees the level as mutable.
//
// Snapshot fan-out: each registered viewport holds the receiving end of a
// small bounded channel. After every state-changing event the master
// clones the level once into an `Arc` and `try_send`s it to every
// registered sender. A viewport that is busy (channel full) or gone
// (channel disconnected) never blocks or fails the master — the send is
// simply dropped, and viewports catch up to the newest snapshot on their
// next check.

use crate::event::{InputEvent, ViewportId};
use mosshollow_core::Level;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

/// Snapshot-channel depth per viewport. Viewports drain to the newest
/// snapshot every cycle, so the buffer only fills when a viewport has
/// skipped several consecutive checks.
const SNAPSHOT_CHANNEL_DEPTH: usize = 4;

/// The state owner: canonical level plus the registry of live viewports.
pub struct Master {
    level: Level,
    viewports: BTreeMap<ViewportId, SyncSender<Arc<Level>>>,
    next_viewport_id: u32,
}

impl Master {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            viewports: BTreeMap::new(),
            next_viewport_id: 0,
        }
    }

    /// Register a new viewport: allocate an ID and a snapshot channel, and
    /// push the current state so the viewport has a frame to draw before
    /// the first input arrives.
    pub fn register_viewport(&mut self) -> (ViewportId, Receiver<Arc<Level>>) {
        let id = ViewportId(self.next_viewport_id);
        self.next_viewport_id += 1;
        let (tx, rx) = sync_channel(SNAPSHOT_CHANNEL_DEPTH);
        let _ = tx.try_send(Arc::new(self.level.clone()));
        self.viewports.insert(id, tx);
        (id, rx)
    }

    /// Retire one viewport's channel. Dropping the sender closes the
    /// channel, which is that viewport's stop signal. Unknown IDs (a
    /// viewport already retired by a racing close) are a no-op.
    pub fn retire_viewport(&mut self, id: ViewportId) {
        self.viewports.remove(&id);
    }

    pub fn viewport_count(&self) -> usize {
        self.viewports.len()
    }

    /// Apply one input event, in arrival order. Returns `false` when the
    /// master loop should stop: an explicit quit, or the last viewport
    /// closing.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Move(dir) => {
                // A move into a wall is a normal game event, not an error:
                // no state change, no broadcast.
                if self.level.move_player(dir) {
                    self.broadcast();
                }
            }
            InputEvent::Search => {
                self.level.search();
                self.broadcast();
            }
            InputEvent::QuitGame => {
                self.viewports.clear();
                return false;
            }
            InputEvent::CloseViewport(id) => {
                self.retire_viewport(id);
                if self.viewports.is_empty() {
                    return false;
                }
            }
        }
        true
    }

    /// Fire-and-forget snapshot fan-out to every registered viewport.
    fn broadcast(&self) {
        let snapshot = Arc::new(self.level.clone());
        for tx in self.viewports.values() {
            // Full or disconnected channels are benign: drop the send.
            let _ = tx.try_send(Arc::clone(&snapshot));
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Surrender the final state when the loop ends.
    pub fn into_level(self) -> Level {
        self.level
    }
}
