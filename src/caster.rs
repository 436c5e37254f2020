use raylib::prelude::*;

use crate::framebuffer::Framebuffer;
use crate::map::Map;
use crate::player::Player;

pub const CEILING_COLOR: u32 = 0xFF202020;
pub const FLOOR_COLOR: u32 = 0xFF404040;

/// Which grid axis the terminating DDA step crossed. A vertical hit means
/// the ray stopped on an X step (a wall face parallel to the Y axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Vertical,
    Horizontal,
}

pub struct Intersect {
    pub perp_dist: f32,
    pub side: Side,
    pub tile: u8,
    pub cell: (i32, i32),
}

/// Closed tile-code palette (0xAABBGGRR). New wall variants get a new entry
/// here; anything unmapped falls back to the error color so it stands out.
pub fn wall_color(code: u8) -> u32 {
    debug_assert!(code != 0, "wall_color called for a walkable tile");
    match code {
        1 => 0xFF0000FF, // red
        3 => 0xFFFF0000, // blue
        4 => 0xFF00FF00, // green
        _ => 0xFFFF00FF, // magenta, unmapped variant
    }
}

fn darken(color: u32) -> u32 {
    ((color >> 1) & 0x007F7F7F) | 0xFF000000
}

/// Walk the grid with DDA until the ray meets a nonzero tile and report the
/// perpendicular (fisheye-corrected) distance to it. The loop is capped by
/// the map size; an enclosed map always terminates well inside the cap, so
/// running past it (or off the grid) means the enclosure invariant is broken
/// and we fail loudly rather than render garbage.
pub fn cast_ray(map: &Map, pos: Vector2, ray_dir: Vector2) -> Intersect {
    let mut map_x = pos.x.floor() as i32;
    let mut map_y = pos.y.floor() as i32;

    let delta_dist_x = if ray_dir.x.abs() < 1e-6 { f32::INFINITY } else { 1.0 / ray_dir.x.abs() };
    let delta_dist_y = if ray_dir.y.abs() < 1e-6 { f32::INFINITY } else { 1.0 / ray_dir.y.abs() };

    let (step_x, mut side_dist_x) = if ray_dir.x < 0.0 {
        (-1, (pos.x - map_x as f32) * delta_dist_x)
    } else {
        (1, (map_x as f32 + 1.0 - pos.x) * delta_dist_x)
    };
    let (step_y, mut side_dist_y) = if ray_dir.y < 0.0 {
        (-1, (pos.y - map_y as f32) * delta_dist_y)
    } else {
        (1, (map_y as f32 + 1.0 - pos.y) * delta_dist_y)
    };

    // an axis the ray never crosses must lose every comparison below
    if delta_dist_x.is_infinite() {
        side_dist_x = f32::INFINITY;
    }
    if delta_dist_y.is_infinite() {
        side_dist_y = f32::INFINITY;
    }

    let max_steps = 2 * (map.width() + map.height());
    let mut side = Side::Vertical;
    for _ in 0..max_steps {
        if side_dist_x < side_dist_y {
            side_dist_x += delta_dist_x;
            map_x += step_x;
            side = Side::Vertical;
        } else {
            side_dist_y += delta_dist_y;
            map_y += step_y;
            side = Side::Horizontal;
        }

        if !map.in_bounds(map_x, map_y) {
            break;
        }
        let tile = map.tile_at(map_x as usize, map_y as usize);
        if tile != 0 {
            let perp_dist = match side {
                Side::Vertical => {
                    (map_x as f32 - pos.x + (1 - step_x) as f32 / 2.0) / ray_dir.x
                }
                Side::Horizontal => {
                    (map_y as f32 - pos.y + (1 - step_y) as f32 / 2.0) / ray_dir.y
                }
            };
            return Intersect { perp_dist, side, tile, cell: (map_x, map_y) };
        }
    }

    panic!(
        "caster: ray from ({:.2},{:.2}) dir ({:.3},{:.3}) escaped at cell ({map_x},{map_y}); map border must be fully walled",
        pos.x, pos.y, ray_dir.x, ray_dir.y
    );
}

/// Projected wall stripe for a column, clamped to the screen. Start and end
/// are inclusive rows; height over distance fixes the screen-units-per-
/// world-unit ratio.
pub(crate) fn stripe_bounds(perp_dist: f32, screen_h: usize) -> (usize, usize) {
    let h = screen_h as f32;
    let line_h = h / perp_dist.max(1e-6);
    let draw_start = (h / 2.0 - line_h / 2.0).clamp(0.0, h - 1.0) as usize;
    let draw_end = (h / 2.0 + line_h / 2.0).clamp(0.0, h - 1.0) as usize;
    (draw_start, draw_end)
}

/// Paint one full frame: every column gets a ceiling span, a wall stripe and
/// a floor span, overwriting whatever the buffer held. Reads the pose and
/// the map, writes only the framebuffer.
pub fn render_scene(fb: &mut Framebuffer, map: &Map, player: &Player) {
    let w = fb.width();
    let h = fb.height();
    for x in 0..w {
        let camera_x = 2.0 * x as f32 / w as f32 - 1.0;
        let ray_dir = Vector2::new(
            player.dir.x + player.plane.x * camera_x,
            player.dir.y + player.plane.y * camera_x,
        );
        let hit = cast_ray(map, player.pos, ray_dir);
        let (draw_start, draw_end) = stripe_bounds(hit.perp_dist, h);

        let mut color = wall_color(hit.tile);
        if hit.side == Side::Horizontal {
            color = darken(color);
        }

        fb.fill_column(x, 0, draw_start, CEILING_COLOR);
        fb.fill_column(x, draw_start, draw_end + 1, color);
        fb.fill_column(x, draw_end + 1, h, FLOOR_COLOR);
    }
}
