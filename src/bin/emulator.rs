//! Mate Light emulator
//!
//! Listens for frames like the real display does and draws every bottle as a
//! dot in a window. Handy when you are not next to the wall but want to see
//! what you send to it. Close the window, press Escape or Ctrl+C to stop.

use log::{error, info};
use mlgame::config::Config;
use mlgame::input::{Action, InputContext, InputSystem};
use mlgame::transport::FrameReceiver;
use mlgame::{Clock, Surface};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Draws one bottle as a filled dot centered on `(cx, cy)`
fn draw_bottle(canvas: &mut Canvas<Window>, cx: i32, cy: i32, radius: i32) -> Result<(), String> {
    for dy in -radius..=radius {
        let half_width = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        canvas.draw_line((cx - half_width, cy + dy), (cx + half_width, cy + dy))?;
    }
    Ok(())
}

/// Draws the whole frame and presents it
fn render_frame(canvas: &mut Canvas<Window>, frame: &Surface, dot_size: u32) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();

    let dot = dot_size as i32;
    let radius = (dot / 2 - 1).max(0);
    for y in 0..frame.height() as i32 {
        for x in 0..frame.width() as i32 {
            if let Some(color) = frame.get((x, y)) {
                canvas.set_draw_color(color);
                draw_bottle(canvas, x * dot + dot / 2, y * dot + dot / 2, radius)?;
            }
        }
    }

    canvas.present();
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default()
        .map_err(|e| format!("Failed to load config: {}", e))?
        .emulator;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window(
            "Mate Light Emu",
            config.width * config.dot_size,
            config.height * config.dot_size,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let mut receiver = FrameReceiver::bind(
        (config.host.as_str(), config.port),
        config.width,
        config.height,
    )?;
    info!(
        "Emulating a {}x{} Mate Light on {}",
        config.width,
        config.height,
        receiver.local_addr()?
    );

    let input = InputSystem::new(InputContext::Emulator);
    let mut clock = Clock::new();

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            if action == Action::Quit {
                break 'running;
            }
        }

        if let Err(e) = receiver.poll() {
            error!("Receiving frames failed: {}", e);
        }

        render_frame(&mut canvas, receiver.frame(), config.dot_size)?;
        clock.tick(config.fps);
    }

    info!("Emulator stopped after {} frames", clock.frames());
    Ok(())
}
