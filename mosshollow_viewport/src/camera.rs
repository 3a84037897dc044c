// Deadzone-trailing camera, one per viewport.
//
// The center latches onto the player on the first frame, then only moves
// when the player leaves a fixed-radius deadzone — and then by exactly one
// tile on one axis per frame, X checked before Y. The result is a camera
// that lags smoothly behind the player instead of snapping.

use mosshollow_core::Position;

/// Deadzone radius in tiles.
const DEADZONE: i32 = 5;

/// Per-viewport camera state. Private to its viewport thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct Camera {
    center: Option<Position>,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the camera one frame toward the player and return the
    /// center to compose with.
    ///
    /// Order is significant: the X axis is checked first, and at most one
    /// axis adjusts by one tile per call. The Y axis only moves once the
    /// player is back inside the X deadzone.
    pub fn follow(&mut self, player: Position) -> Position {
        let Some(center) = &mut self.center else {
            self.center = Some(player);
            return player;
        };
        if player.x > center.x + DEADZONE {
            center.x += 1;
        } else if player.x < center.x - DEADZONE {
            center.x -= 1;
        } else if player.y > center.y + DEADZONE {
            center.y += 1;
        } else if player.y < center.y - DEADZONE {
            center.y -= 1;
        }
        *center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_latches_onto_player() {
        let mut camera = Camera::new();
        assert_eq!(camera.follow(Position::new(40, 12)), Position::new(40, 12));
    }

    #[test]
    fn still_player_inside_deadzone_never_moves_camera() {
        let mut camera = Camera::new();
        let player = Position::new(10, 10);
        camera.follow(player);
        for _ in 0..50 {
            assert_eq!(camera.follow(player), player);
        }
    }

    #[test]
    fn movement_within_deadzone_is_ignored() {
        let mut camera = Camera::new();
        camera.follow(Position::new(10, 10));
        // 5 tiles away in every direction is still inside the deadzone.
        assert_eq!(camera.follow(Position::new(15, 10)), Position::new(10, 10));
        assert_eq!(camera.follow(Position::new(10, 5)), Position::new(10, 10));
    }

    #[test]
    fn camera_trails_one_tile_per_frame() {
        let mut camera = Camera::new();
        camera.follow(Position::new(10, 10));
        let player = Position::new(18, 10);
        assert_eq!(camera.follow(player), Position::new(11, 10));
        assert_eq!(camera.follow(player), Position::new(12, 10));
        assert_eq!(camera.follow(player), Position::new(13, 10));
        // At center 13 the player is 5 away — back inside the deadzone.
        assert_eq!(camera.follow(player), Position::new(13, 10));
    }

    #[test]
    fn x_axis_settles_before_y_moves() {
        let mut camera = Camera::new();
        camera.follow(Position::new(0, 0));
        // Player outside the deadzone on both axes.
        let player = Position::new(8, 8);
        let first = camera.follow(player);
        assert_eq!(first, Position::new(1, 0), "X must adjust first");
        let second = camera.follow(player);
        assert_eq!(second, Position::new(2, 0), "Y waits for X to settle");
        // Once X is inside its deadzone, Y starts adjusting.
        assert_eq!(camera.follow(player), Position::new(3, 0));
        assert_eq!(camera.follow(player), Position::new(3, 1));
    }

    #[test]
    fn only_one_axis_adjusts_per_frame() {
        let mut camera = Camera::new();
        camera.follow(Position::new(0, 0));
        let mut prev = Position::new(0, 0);
        let player = Position::new(20, 20);
        for _ in 0..40 {
            let next = camera.follow(player);
            let moved = (next.x - prev.x).abs() + (next.y - prev.y).abs();
            assert!(moved <= 1, "camera moved {moved} tiles in one frame");
            prev = next;
        }
    }
}
