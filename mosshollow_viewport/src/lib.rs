// mosshollow_viewport — the concurrent multi-viewport engine.
//
// One game-master thread owns the canonical `Level` and is the sole
// consumer of a shared input channel; N viewport threads each own one
// display surface, receive immutable level snapshots over a dedicated
// bounded channel, and feed edge-triggered input back. There is no shared
// mutable memory anywhere: correctness comes from message-passing
// isolation, not locks.
//
// Module overview:
// - `event.rs`:    `ViewportId` + `InputEvent` — the channel vocabulary.
// - `master.rs`:   Game-master state: the level, the ID-keyed registry of
//                  snapshot senders, input application, lossy broadcast.
// - `engine.rs`:   Thread wiring — seats viewports, spawns the master loop.
// - `viewport.rs`: The per-window thread: drain surface events, catch up
//                  to the newest snapshot, redraw, emit key edges, sleep.
// - `camera.rs`:   Deadzone-trailing camera, one axis per frame.
// - `compose.rs`:  Frame composition with the per-frame RNG reseed that
//                  keeps sprite variants stable across frames.
// - `surface.rs`:  The host collaborator trait (window, draw calls, raw
//                  input) plus `RecordingSurface` for headless tests.
//
// Dependencies: `mosshollow_core` (state), `mosshollow_sprites` (variant
// table), `mosshollow_prng` (per-viewport RNG). Concurrency is
// `std::thread` + `std::sync::mpsc` only.

pub mod camera;
pub mod compose;
pub mod engine;
pub mod event;
pub mod master;
pub mod surface;
pub mod viewport;

pub use engine::{Engine, MasterHandle, ViewportSeat};
pub use event::{InputEvent, ViewportId};
pub use surface::Surface;
pub use viewport::Viewport;
