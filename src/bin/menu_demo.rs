//! Menu demo
//!
//! Shows a three entry menu on the Mate Light (or the emulator). Navigate with
//! the arrow keys in the small control window, Enter activates an entry and
//! "quit" ends the demo.

use log::{info, warn};
use mlgame::config::Config;
use mlgame::gui::{Menu, MenuStyle};
use mlgame::input::{Action, InputContext, InputSystem};
use mlgame::text::GlyphAtlas;
use mlgame::{Clock, Screen};
use std::cell::Cell;
use std::rc::Rc;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default().map_err(|e| format!("Failed to load config: {}", e))?;
    let display = &config.display;
    let menu_config = &config.menu;

    let atlas = match &menu_config.font {
        Some(path) => GlyphAtlas::load(path).map_err(|e| e.to_string())?,
        None => GlyphAtlas::builtin(),
    };
    let style = MenuStyle {
        color: menu_config.color,
        active: menu_config.active,
        background: menu_config.background,
        brightness: menu_config.brightness,
    };

    let running = Rc::new(Cell::new(true));
    let mut menu = Menu::with_style(menu_config.width, menu_config.height, style, atlas);
    menu.add_entry("new game", Some(Box::new(|| info!("Starting a new game"))));
    menu.add_entry("options", Some(Box::new(|| info!("No options yet"))));
    let quit = Rc::clone(&running);
    menu.add_entry("quit", Some(Box::new(move || quit.set(false))));

    let mut screen = Screen::new(&display.host, display.port, display.width, display.height)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _window = video_subsystem
        .window("mlgame menu", 100, 10)
        .build()
        .map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let input = InputSystem::new(InputContext::Menu);
    let mut clock = Clock::new();

    while running.get() {
        for action in input.poll_events(&mut event_pump) {
            match action {
                Action::Quit => running.set(false),
                Action::MenuUp => menu.select_previous(),
                Action::MenuDown => menu.select_next(),
                Action::MenuConfirm => {
                    menu.activate();
                }
                _ => {}
            }
        }

        menu.update();

        screen.reset();
        if let Some(surface) = menu.render() {
            screen.blit(surface, (0, 0));
        }
        if let Err(e) = screen.update() {
            warn!("Frame not sent: {}", e);
        }

        clock.tick(menu_config.fps);
    }

    info!("Menu demo stopped");
    Ok(())
}
