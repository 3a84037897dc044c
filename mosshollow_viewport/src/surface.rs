// The display-surface collaborator boundary.
//
// Window creation, texture upload, raw input polling, and actual draw
// calls are the host platform's business; the engine only needs the small
// contract below. A host binds one `Surface` implementation per window
// (SDL, a game engine, anything that can blit atlas rectangles) and hands
// it to `Viewport`. Surface acquisition failures are the host's fatal
// startup errors — a viewport is only constructed around a working
// surface.
//
// `RecordingSurface` lives here rather than in a test crate so integration
// tests (and any headless embedding) can use it without duplicating the
// trait plumbing.

use mosshollow_sprites::AtlasRect;
use std::collections::VecDeque;

/// Keys the engine tracks for edge-triggered input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Search,
}

impl Key {
    pub const COUNT: usize = 5;
    pub const ALL: [Key; Key::COUNT] = [Key::Up, Key::Down, Key::Left, Key::Right, Key::Search];

    const fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Left => 2,
            Key::Right => 3,
            Key::Search => 4,
        }
    }
}

/// One full sample of the tracked keys. Two consecutive samples are
/// diffed to detect release→press transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeySnapshot([bool; Key::COUNT]);

impl KeySnapshot {
    /// A snapshot with exactly the given keys held down.
    pub fn holding(keys: &[Key]) -> Self {
        let mut snapshot = Self::default();
        for &key in keys {
            snapshot.0[key.index()] = true;
        }
        snapshot
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.0[key.index()]
    }
}

/// Window-system events a surface reports from its native event queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// This window's close button: tear down this viewport only.
    CloseRequested,
    /// A process-level quit: tear down the whole game.
    QuitRequested,
}

/// Color modulation applied to a blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    /// No modulation.
    pub const WHITE: Tint = Tint {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Half-red modulation marking debug-highlighted cells.
    pub const HIGHLIGHT: Tint = Tint { r: 128, g: 0, b: 0 };
}

/// Destination rectangle in window pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// One display window plus its input state, implemented by the host.
pub trait Surface {
    /// Pop the next pending window event; `None` when the queue is empty.
    /// The viewport drains this every cycle before touching anything else.
    fn poll_event(&mut self) -> Option<SurfaceEvent>;

    /// Whether this window currently holds input focus. Unfocused windows
    /// are never sampled, so one physical keypress cannot fan out to N
    /// viewports.
    fn has_focus(&self) -> bool;

    /// Sample the current keyboard state.
    fn keys_down(&self) -> KeySnapshot;

    /// Drawable size in pixels.
    fn size(&self) -> (i32, i32);

    fn clear(&mut self);

    /// Copy `src` from the atlas to `dst`, modulated by `tint`.
    fn blit(&mut self, src: AtlasRect, dst: ScreenRect, tint: Tint);

    /// Flip the composed frame to the screen.
    fn present(&mut self);
}

/// A recorded draw call, for asserting on composed frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Blit {
        src: AtlasRect,
        dst: ScreenRect,
        tint: Tint,
    },
    Present,
}

/// Headless `Surface` for tests: events and keyboard state are scripted by
/// the test, draw calls are recorded in order.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub width: i32,
    pub height: i32,
    pub focused: bool,
    pub events: VecDeque<SurfaceEvent>,
    pub keys: KeySnapshot,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            focused: true,
            events: VecDeque::new(),
            keys: KeySnapshot::default(),
            ops: Vec::new(),
        }
    }

    /// The blit ops of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map_or(0, |i| i + 1);
        let end = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Present)
            .unwrap_or(self.ops.len());
        &self.ops[start..end]
    }
}

impl Surface for RecordingSurface {
    fn poll_event(&mut self) -> Option<SurfaceEvent> {
        self.events.pop_front()
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn keys_down(&self) -> KeySnapshot {
        self.keys
    }

    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn blit(&mut self, src: AtlasRect, dst: ScreenRect, tint: Tint) {
        self.ops.push(DrawOp::Blit { src, dst, tint });
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}
