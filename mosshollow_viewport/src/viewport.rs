// The per-window render client.
//
// One `Viewport` runs on one thread and owns one surface plus all the
// state the master must never see: camera, variant RNG, the previous
// keyboard sample, and the cached snapshot. Its lifecycle is
// Starting → Running → Closing; `Starting` is construction (the host has
// already acquired the surface — acquisition failures are the host's
// fatal startup errors), and `Closing` is entered on a close/quit signal
// and never re-enters `Running`.
//
// Each Running cycle, in order:
//   1. Drain surface events. A window close sends `CloseViewport(self.id)`
//      and stops this viewport only; a quit sends `QuitGame`.
//   2. Drain the snapshot channel without blocking, keeping only the
//      newest (last-write-wins; missed intermediates are fine). A closed
//      channel is the master's stop signal.
//   3. Redraw from the cached snapshot — every cycle, so render cadence
//      never waits on state cadence.
//   4. If focused, diff the keyboard sample against the previous cycle's
//      and emit at most one event for a release→press transition.
//   5. Sleep a fixed interval to bound the poll rate.

use crate::camera::Camera;
use crate::compose::{FRAME_SEED, draw_frame};
use crate::engine::ViewportSeat;
use crate::event::{InputEvent, ViewportId};
use crate::surface::{Key, KeySnapshot, Surface, SurfaceEvent};
use mosshollow_core::{Direction, Level};
use mosshollow_prng::FrameRng;
use mosshollow_sprites::AtlasIndex;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Fixed delay between cycles, bounding the poll rate.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Running,
    Closing,
}

/// One render client: a seat in the engine plus a host surface.
pub struct Viewport<S: Surface> {
    id: ViewportId,
    surface: S,
    atlas: Arc<AtlasIndex>,
    snapshots: Receiver<Arc<Level>>,
    input: Sender<InputEvent>,
    camera: Camera,
    rng: FrameRng,
    prev_keys: KeySnapshot,
    cached: Option<Arc<Level>>,
    phase: Phase,
}

impl<S: Surface> Viewport<S> {
    pub fn new(seat: ViewportSeat, surface: S, atlas: Arc<AtlasIndex>) -> Self {
        Self {
            id: seat.id,
            surface,
            atlas,
            snapshots: seat.snapshots,
            input: seat.input,
            camera: Camera::new(),
            rng: FrameRng::new(FRAME_SEED),
            prev_keys: KeySnapshot::default(),
            cached: None,
            phase: Phase::Running,
        }
    }

    /// Run until this viewport closes, then hand the surface back so the
    /// host can release it.
    pub fn run(mut self) -> S {
        while self.phase == Phase::Running {
            self.cycle();
            if self.phase == Phase::Running {
                thread::sleep(POLL_INTERVAL);
            }
        }
        eprintln!("{}: closing", self.id);
        self.surface
    }

    fn cycle(&mut self) {
        // 1. Window events.
        while let Some(event) = self.surface.poll_event() {
            match event {
                SurfaceEvent::CloseRequested => {
                    // Send failure means the master is already gone —
                    // closing is the right response either way.
                    let _ = self.input.send(InputEvent::CloseViewport(self.id));
                    self.phase = Phase::Closing;
                    return;
                }
                SurfaceEvent::QuitRequested => {
                    let _ = self.input.send(InputEvent::QuitGame);
                }
            }
        }

        // 2. Catch up to the newest snapshot.
        loop {
            match self.snapshots.try_recv() {
                Ok(level) => self.cached = Some(level),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.phase = Phase::Closing;
                    return;
                }
            }
        }

        // 3. Redraw from the cache.
        if let Some(level) = self.cached.clone() {
            let center = self.camera.follow(level.player);
            draw_frame(&mut self.surface, &level, &self.atlas, center, &mut self.rng);
        }

        // 4. Edge-triggered input, only while focused.
        if self.surface.has_focus() {
            let keys = self.surface.keys_down();
            if let Some(event) = edge_event(self.prev_keys, keys) {
                let _ = self.input.send(event);
            }
            self.prev_keys = keys;
        }
    }
}

/// Spawn a viewport on its own thread. Joining yields the surface after
/// the viewport closes.
pub fn spawn<S>(seat: ViewportSeat, surface: S, atlas: Arc<AtlasIndex>) -> JoinHandle<S>
where
    S: Surface + Send + 'static,
{
    thread::spawn(move || Viewport::new(seat, surface, atlas).run())
}

/// Derive at most one input event from two consecutive keyboard samples.
/// Only release→press transitions count; a held key stays silent. When
/// several keys transition in the same cycle, the last in tracked order
/// wins.
fn edge_event(prev: KeySnapshot, cur: KeySnapshot) -> Option<InputEvent> {
    let mut event = None;
    for key in Key::ALL {
        if cur.is_down(key) && !prev.is_down(key) {
            event = Some(match key {
                Key::Up => InputEvent::Move(Direction::Up),
                Key::Down => InputEvent::Move(Direction::Down),
                Key::Left => InputEvent::Move(Direction::Left),
                Key::Right => InputEvent::Move(Direction::Right),
                Key::Search => InputEvent::Search,
            });
        }
    }
    event
}
