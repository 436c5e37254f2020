use raylib::prelude::*;

use crate::map::Map;

const MOVE_STEP: f32 = 0.05;
const ROT_SENSITIVITY: f32 = 0.0025;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDir {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
}

/// Player pose: continuous position, unit facing direction and the camera
/// plane (perpendicular to the direction, magnitude sets the field of view).
/// Position always sits on a walkable tile; `try_move` is the only thing
/// allowed to change it.
pub struct Player {
    pub pos: Vector2,
    pub dir: Vector2,
    pub plane: Vector2,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            pos: Vector2::new(x, y),
            dir: Vector2::new(-1.0, 0.0),
            plane: Vector2::new(0.0, 0.66),
        }
    }

    /// Turn from a horizontal look delta (pixels of mouse motion). Direction
    /// and camera plane rotate by the same angle so they stay perpendicular.
    pub fn rotate(&mut self, look_dx: f32) {
        let angle = -look_dx * ROT_SENSITIVITY;
        let (sin_a, cos_a) = angle.sin_cos();
        let dir = self.dir;
        self.dir.x = dir.x * cos_a - dir.y * sin_a;
        self.dir.y = dir.x * sin_a + dir.y * cos_a;
        let plane = self.plane;
        self.plane.x = plane.x * cos_a - plane.y * sin_a;
        self.plane.y = plane.x * sin_a + plane.y * cos_a;
    }

    /// Collision-checked step. Besides the destination cell, each axis is
    /// probed on its own so a diagonal move cannot slip through a wall
    /// corner that the destination cell alone would miss. A blocked move is
    /// rejected whole (no sliding along the free axis) and leaves the pose
    /// untouched; returns whether the move committed.
    pub fn try_move(&mut self, dir: MoveDir, map: &Map) -> bool {
        let step = match dir {
            MoveDir::Forward => self.dir.scale_by(MOVE_STEP),
            MoveDir::Backward => self.dir.scale_by(-MOVE_STEP),
            MoveDir::StrafeLeft => self.plane.normalized().scale_by(-MOVE_STEP),
            MoveDir::StrafeRight => self.plane.normalized().scale_by(MOVE_STEP),
        };
        let nx = self.pos.x + step.x;
        let ny = self.pos.y + step.y;
        if map.walkable(nx, ny)
            && map.walkable(nx, self.pos.y)
            && map.walkable(self.pos.x, ny)
        {
            self.pos.x = nx;
            self.pos.y = ny;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn open_room() -> Map {
        // 6x6, walled border, empty interior
        let mut tiles = vec![0u8; 36];
        for i in 0..6 {
            tiles[i] = 1;
            tiles[30 + i] = 1;
            tiles[i * 6] = 1;
            tiles[i * 6 + 5] = 1;
        }
        Map::new(6, 6, tiles)
    }

    #[test]
    fn rotation_preserves_norms_and_perpendicularity() {
        let mut p = Player::new(4.5, 4.5);
        for _ in 0..100 {
            p.rotate(17.0);
        }
        assert!((p.dir.length() - 1.0).abs() < EPS);
        assert!((p.plane.length() - 0.66).abs() < EPS);
        assert!(p.dir.dot(p.plane).abs() < EPS);
    }

    #[test]
    fn rotation_round_trips() {
        let mut p = Player::new(4.5, 4.5);
        p.rotate(123.0);
        p.rotate(-123.0);
        assert!((p.dir.x - -1.0).abs() < EPS);
        assert!(p.dir.y.abs() < EPS);
        assert!(p.plane.x.abs() < EPS);
        assert!((p.plane.y - 0.66).abs() < EPS);
    }

    #[test]
    fn walking_into_a_wall_is_rejected_idempotently() {
        let map = open_room();
        let mut p = Player::new(1.2, 1.5); // facing (-1, 0), border one cell west
        while p.try_move(MoveDir::Forward, &map) {}
        let (x, y) = (p.pos.x.to_bits(), p.pos.y.to_bits());
        for _ in 0..5 {
            assert!(!p.try_move(MoveDir::Forward, &map));
        }
        assert_eq!(p.pos.x.to_bits(), x);
        assert_eq!(p.pos.y.to_bits(), y);
        assert!(map.walkable(p.pos.x, p.pos.y));
    }

    #[test]
    fn axis_probe_blocks_corner_cutting() {
        // wall at (4,3); moving diagonally from (4,4) toward (3,3) has a
        // walkable destination cell but the y-probe lands in the wall
        let mut tiles = vec![0u8; 36];
        for i in 0..6 {
            tiles[i] = 1;
            tiles[30 + i] = 1;
            tiles[i * 6] = 1;
            tiles[i * 6 + 5] = 1;
        }
        tiles[3 * 6 + 4] = 1;
        let map = Map::new(6, 6, tiles.clone());

        let diag = std::f32::consts::FRAC_1_SQRT_2;
        let mut p = Player::new(4.02, 4.02);
        p.dir = Vector2::new(-diag, -diag);
        p.plane = Vector2::new(-0.66 * diag, 0.66 * diag);
        assert!(!p.try_move(MoveDir::Forward, &map));
        assert_eq!(p.pos.x, 4.02);
        assert_eq!(p.pos.y, 4.02);

        // same move commits once the corner wall is gone
        tiles[3 * 6 + 4] = 0;
        let open = Map::new(6, 6, tiles);
        assert!(p.try_move(MoveDir::Forward, &open));
    }

    #[test]
    fn strafe_moves_along_the_plane_axis() {
        let map = open_room();
        let mut p = Player::new(3.5, 3.5);
        assert!(p.try_move(MoveDir::StrafeRight, &map));
        assert_eq!(p.pos.x, 3.5);
        assert!((p.pos.y - (3.5 + MOVE_STEP)).abs() < EPS);
    }
}
