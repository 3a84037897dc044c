// Thread wiring for the engine.
//
// `Engine` is the setup phase: it owns the `Master` and the shared input
// channel while viewports are being seated, then `start()` moves the
// master onto its own thread. The master loop's only blocking point is
// `recv()` on the input channel; everything else it does is non-blocking.
//
// The loop ends on an explicit quit, when the last viewport closes, or
// when every input sender is gone (`recv` fails) — whichever comes first.
// `MasterHandle::join()` returns the final level, which is what replay
// tooling and tests want to inspect.

use crate::event::{InputEvent, ViewportId};
use crate::master::Master;
use mosshollow_core::Level;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

/// Everything one viewport needs to participate: its registry ID, the
/// receiving end of its snapshot channel, and a clone of the shared input
/// sender.
pub struct ViewportSeat {
    pub id: ViewportId,
    pub snapshots: Receiver<Arc<Level>>,
    pub input: Sender<InputEvent>,
}

/// Builder for a running game: seat viewports, then `start()`.
pub struct Engine {
    master: Master,
    input_tx: Sender<InputEvent>,
    input_rx: Receiver<InputEvent>,
}

impl Engine {
    pub fn new(level: Level) -> Self {
        let (input_tx, input_rx) = channel();
        Self {
            master: Master::new(level),
            input_tx,
            input_rx,
        }
    }

    /// A clone of the shared input sender, for hosts that inject input
    /// from outside any viewport (tests, scripted demos).
    pub fn input_sender(&self) -> Sender<InputEvent> {
        self.input_tx.clone()
    }

    /// Register one viewport and hand back its seat.
    pub fn add_viewport(&mut self) -> ViewportSeat {
        let (id, snapshots) = self.master.register_viewport();
        ViewportSeat {
            id,
            snapshots,
            input: self.input_tx.clone(),
        }
    }

    /// Move the master onto its own thread and run it until shutdown.
    pub fn start(self) -> MasterHandle {
        let Engine {
            mut master,
            input_tx,
            input_rx,
        } = self;
        // The engine's own sender is dropped here: once every seated
        // viewport is gone too, `recv` fails and the loop ends.
        drop(input_tx);
        let thread = thread::spawn(move || {
            while let Ok(event) = input_rx.recv() {
                if !master.handle_input(event) {
                    break;
                }
            }
            master.into_level()
        });
        MasterHandle { thread }
    }
}

/// Handle to the running master thread.
pub struct MasterHandle {
    thread: JoinHandle<Level>,
}

impl MasterHandle {
    /// Wait for the master loop to end and return the final level.
    pub fn join(self) -> Level {
        self.thread.join().expect("master thread panicked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosshollow_core::{Direction, Position};

    const ROOM: &str = "#####\n#...#\n#...|\n#####";

    #[test]
    fn master_applies_inputs_in_arrival_order() {
        let engine = Engine::new(Level::parse(ROOM).unwrap());
        let input = engine.input_sender();
        let handle = engine.start();

        input.send(InputEvent::Move(Direction::Right)).unwrap();
        input.send(InputEvent::Move(Direction::Down)).unwrap();
        input.send(InputEvent::QuitGame).unwrap();

        let level = handle.join();
        assert_eq!(level.player, Position::new(2, 2));
    }

    #[test]
    fn master_stops_when_all_senders_are_gone() {
        let mut engine = Engine::new(Level::parse(ROOM).unwrap());
        let seat = engine.add_viewport();
        let handle = engine.start();

        seat.input.send(InputEvent::Move(Direction::Right)).unwrap();
        drop(seat);

        let level = handle.join();
        assert_eq!(level.player, Position::new(2, 1));
    }

    #[test]
    fn quit_reaches_seated_viewports() {
        let mut engine = Engine::new(Level::parse(ROOM).unwrap());
        let seat = engine.add_viewport();
        let handle = engine.start();

        seat.input.send(InputEvent::QuitGame).unwrap();
        handle.join();
        // The snapshot channel is closed once the drained backlog ends.
        let mut disconnected = false;
        loop {
            match seat.snapshots.try_recv() {
                Ok(_) => continue,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
                Err(std::sync::mpsc::TryRecvError::Empty) => break,
            }
        }
        assert!(disconnected, "quit should close the snapshot channel");
    }
}
