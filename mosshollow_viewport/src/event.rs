// The channel vocabulary between viewports and the game master.
//
// All cross-thread communication in the engine is one of two messages:
// `InputEvent` flowing viewport → master on the shared input channel, and
// `Arc<Level>` snapshots flowing master → viewport on per-viewport bounded
// channels. Events derive serde so input sequences can be captured and
// replayed when debugging desyncs.

use mosshollow_core::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry key for one viewport's snapshot channel.
///
/// Close-window events carry this rather than a channel value: senders are
/// not comparable, and the master's registry is ID-keyed anyway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewportId(pub u32);

impl fmt::Display for ViewportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "viewport {}", self.0)
    }
}

/// Player input aggregated from all viewports, processed by the master
/// strictly in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Move the player one cell. Silently rejected against walls.
    Move(Direction),
    /// Toggle the debug-highlight set around the player.
    Search,
    /// Stop the whole game: every snapshot channel is closed.
    QuitGame,
    /// Retire exactly one viewport's snapshot channel; siblings and the
    /// master itself are unaffected.
    CloseViewport(ViewportId),
}
