use raylib::prelude::*;
use std::time::Instant;

mod caster;
mod framebuffer;
mod input;
mod map;
mod minimap;
mod player;

use caster::render_scene;
use framebuffer::Framebuffer;
use map::Map;
use player::Player;

const SCREEN_WIDTH: usize = 800;
const SCREEN_HEIGHT: usize = 600;

fn unpack(color: u32) -> Color {
    Color::new(
        (color & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        ((color >> 16) & 0xFF) as u8,
        ((color >> 24) & 0xFF) as u8,
    )
}

// Upload the finished frame and draw it with the FPS overlay. The buffer is
// bottom-up, the screen is top-down; the flip happens here, never in the
// renderer.
fn present(window: &mut RaylibHandle, thread: &RaylibThread, fb: &Framebuffer, fps: f32) {
    let mut image =
        Image::gen_image_color(fb.width() as i32, fb.height() as i32, Color::BLACK);
    for y in 0..fb.height() {
        let screen_y = (fb.height() - 1 - y) as i32;
        for x in 0..fb.width() {
            Image::draw_pixel(&mut image, x as i32, screen_y, unpack(fb.pixel_at(x, y)));
        }
    }

    if let Ok(texture) = window.load_texture_from_image(thread, &image) {
        let mut d = window.begin_drawing(thread);
        d.draw_texture(&texture, 0, 0, Color::WHITE);
        let fps_text = format!("FPS: {:.1}", fps);
        d.draw_text(&fps_text, 10, (fb.height() - 30) as i32, 20, Color::RAYWHITE);
    }
}

fn main() {
    let (mut window, raylib_thread) = raylib::init()
        .size(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32)
        .title("Blamo")
        .build();
    window.set_target_fps(60);
    window.disable_cursor();

    let map = Map::default_level();
    let mut player = Player::new(4.5, 4.5);
    let mut framebuffer = Framebuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut show_minimap = false;

    let mut last = Instant::now();
    let mut fps = 0.0f32;

    while !window.window_should_close() {
        let now = Instant::now();
        let frame_dt = now.duration_since(last).as_secs_f32();
        last = now;
        if frame_dt > 0.0 {
            fps = 1.0 / frame_dt;
        }

        if window.is_key_pressed(KeyboardKey::KEY_M) {
            show_minimap = !show_minimap;
        }
        input::process_events(&window, &mut player, &map);

        render_scene(&mut framebuffer, &map, &player);
        if show_minimap {
            minimap::draw(&mut framebuffer, &map, &player);
        }
        present(&mut window, &raylib_thread, &framebuffer, fps);
    }
}
