use crate::caster;
use crate::framebuffer::Framebuffer;
use crate::map::Map;
use crate::player::Player;

const CELL_PX: usize = 14;
const MARGIN: usize = 10;
const EMPTY_COLOR: u32 = 0xFF181818;
const PLAYER_COLOR: u32 = 0xFFFF00FF;

// screen-space rect (origin top-left); the framebuffer itself is
// bottom-up, so rows are mirrored here once instead of at every call site
fn fill_rect(fb: &mut Framebuffer, sx: usize, sy: usize, w: usize, h: usize, color: u32) {
    for dy in 0..h {
        let row = sy + dy;
        if row >= fb.height() {
            break;
        }
        let y = fb.height() - 1 - row;
        for dx in 0..w {
            fb.set_pixel(sx + dx, y, color);
        }
    }
}

fn dim(color: u32) -> u32 {
    ((color >> 2) & 0x003F3F3F) | 0xFF000000
}

/// Top-down overlay in the top-left corner: one flat-shaded cell per map
/// tile plus a player marker. Drawn into the framebuffer after the scene so
/// it rides along through the normal present path.
pub fn draw(fb: &mut Framebuffer, map: &Map, player: &Player) {
    for cy in 0..map.height() {
        for cx in 0..map.width() {
            let code = map.tile_at(cx, cy);
            let color = if code == 0 { EMPTY_COLOR } else { dim(caster::wall_color(code)) };
            fill_rect(
                fb,
                MARGIN + cx * CELL_PX,
                MARGIN + cy * CELL_PX,
                CELL_PX - 1,
                CELL_PX - 1,
                color,
            );
        }
    }

    let px = MARGIN + (player.pos.x * CELL_PX as f32) as usize;
    let py = MARGIN + (player.pos.y * CELL_PX as f32) as usize;
    fill_rect(fb, px.saturating_sub(1), py.saturating_sub(1), 3, 3, PLAYER_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_marks_walls_and_player() {
        let map = Map::default_level();
        let player = Player::new(4.5, 4.5);
        let mut fb = Framebuffer::new(200, 160);
        fb.clear(0);
        draw(&mut fb, &map, &player);

        // center of border cell (0,0), in screen coords row MARGIN+...
        let sx = MARGIN + CELL_PX / 2;
        let sy = MARGIN + CELL_PX / 2;
        let wall = fb.pixel_at(sx, fb.height() - 1 - sy);
        assert_eq!(wall, dim(caster::wall_color(1)));

        // center of walkable cell (1,1)
        let sx = MARGIN + CELL_PX + CELL_PX / 2;
        let sy = MARGIN + CELL_PX + CELL_PX / 2;
        assert_eq!(fb.pixel_at(sx, fb.height() - 1 - sy), EMPTY_COLOR);

        // player marker
        let px = MARGIN + (4.5 * CELL_PX as f32) as usize;
        let py = MARGIN + (4.5 * CELL_PX as f32) as usize;
        assert_eq!(fb.pixel_at(px, fb.height() - 1 - py), PLAYER_COLOR);
    }
}
