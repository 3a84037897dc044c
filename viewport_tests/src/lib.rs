// Test-only snapshot probe for engine integration tests.
//
// A `SnapshotProbe` holds a viewport seat directly — the test plays the
// role of a render client, consuming snapshots and producing input over
// the same channels a real viewport thread uses. The only test-specific
// code is the blocking poll wrappers; everything under test is the real
// engine running on real threads.
//
// See also: `tests/full_pipeline.rs` for the scenarios.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use mosshollow_core::Level;
use mosshollow_viewport::{InputEvent, ViewportId, ViewportSeat};

/// Default timeout for blocking poll operations.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(5);

/// Sleep duration between poll attempts.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A seat held by the test instead of a viewport thread.
pub struct SnapshotProbe {
    pub id: ViewportId,
    snapshots: Receiver<Arc<Level>>,
    input: Sender<InputEvent>,
}

impl SnapshotProbe {
    pub fn new(seat: ViewportSeat) -> Self {
        Self {
            id: seat.id,
            snapshots: seat.snapshots,
            input: seat.input,
        }
    }

    /// Send an input event to the master. Panics if the master is gone —
    /// probes only speak to live masters.
    pub fn send(&self, event: InputEvent) {
        self.input
            .send(event)
            .expect("master should be alive to receive input");
    }

    /// Drain the snapshot channel without blocking, returning the newest.
    pub fn latest(&self) -> Option<Arc<Level>> {
        let mut latest = None;
        while let Ok(level) = self.snapshots.try_recv() {
            latest = Some(level);
        }
        latest
    }

    /// Block until a snapshot satisfying `pred` arrives.
    pub fn wait_for(&self, what: &str, pred: impl Fn(&Level) -> bool) -> Arc<Level> {
        let start = Instant::now();
        loop {
            assert!(
                start.elapsed() < POLL_TIMEOUT,
                "timed out waiting for {what}"
            );
            match self.snapshots.try_recv() {
                Ok(level) if pred(&level) => return level,
                Ok(_) => continue,
                Err(TryRecvError::Empty) => thread::sleep(POLL_INTERVAL),
                Err(TryRecvError::Disconnected) => {
                    panic!("snapshot channel closed while waiting for {what}")
                }
            }
        }
    }

    /// Block until the master closes this probe's channel.
    pub fn wait_until_closed(&self, what: &str) {
        let start = Instant::now();
        loop {
            assert!(
                start.elapsed() < POLL_TIMEOUT,
                "timed out waiting for {what} to close"
            );
            match self.snapshots.try_recv() {
                Ok(_) => continue,
                Err(TryRecvError::Disconnected) => return,
                Err(TryRecvError::Empty) => thread::sleep(POLL_INTERVAL),
            }
        }
    }
}
