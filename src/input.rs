use raylib::prelude::*;

use crate::map::Map;
use crate::player::{MoveDir, Player};

// synthetic look-delta per frame when turning with the arrow keys, in the
// same pixel units the mouse delivers
const ARROW_LOOK_STEP: f32 = 24.0;

/// Drain this frame's input and apply it to the pose. Rotation comes from
/// relative mouse motion or the arrow keys, movement from WASD/UP/DOWN; the
/// pose is touched nowhere else.
pub fn process_events(window: &RaylibHandle, player: &mut Player, map: &Map) {
    let mouse = window.get_mouse_delta();
    if mouse.x != 0.0 {
        player.rotate(mouse.x);
    }
    if window.is_key_down(KeyboardKey::KEY_LEFT) {
        player.rotate(-ARROW_LOOK_STEP);
    }
    if window.is_key_down(KeyboardKey::KEY_RIGHT) {
        player.rotate(ARROW_LOOK_STEP);
    }

    if window.is_key_down(KeyboardKey::KEY_W) || window.is_key_down(KeyboardKey::KEY_UP) {
        player.try_move(MoveDir::Forward, map);
    }
    if window.is_key_down(KeyboardKey::KEY_S) || window.is_key_down(KeyboardKey::KEY_DOWN) {
        player.try_move(MoveDir::Backward, map);
    }
    if window.is_key_down(KeyboardKey::KEY_A) {
        player.try_move(MoveDir::StrafeLeft, map);
    }
    if window.is_key_down(KeyboardKey::KEY_D) {
        player.try_move(MoveDir::StrafeRight, map);
    }
}
