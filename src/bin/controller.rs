//! Controller bridge
//!
//! Reads the buttons of game controllers attached to this machine and forwards
//! them to a running game via JSON-RPC. Only the Xbox 360 wireless controller
//! is supported for now. Run with `RUST_LOG=debug` to see every button.

use log::{error, info, warn};
use mlgame::config::Config;
use mlgame::input::{Action, ControllerBridge, InputContext, InputSystem, JsonRpcClient};
use mlgame::Clock;
use sdl2::pixels::Color;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default()
        .map_err(|e| format!("Failed to load config: {}", e))?
        .controller;

    let sdl_context = sdl2::init()?;
    let joystick_subsystem = sdl_context.joystick()?;
    let video_subsystem = sdl_context.video()?;

    // a tiny window so the bridge can be focused and closed like any program
    let window = video_subsystem
        .window("mlgame_ctlr", 100, 10)
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let client = JsonRpcClient::new(&config.host, config.port);
    info!("Forwarding controllers to {}", client.url());
    let mut bridge = ControllerBridge::new(client);

    // opened joysticks must stay alive to keep delivering events
    let mut joysticks = Vec::new();
    for index in 0..joystick_subsystem.num_joysticks()? {
        let joystick = joystick_subsystem
            .open(index)
            .map_err(|e| format!("Failed to open joystick {}: {}", index, e))?;
        let registered = bridge
            .register(joystick.instance_id(), &joystick.name())
            .map_err(|e| format!("Failed to register controller: {}", e))?;
        if registered {
            joysticks.push(joystick);
        }
    }

    if !bridge.has_controllers() {
        warn!("Sorry no compatible controllers found on your system.");
        return Ok(());
    }

    let input = InputSystem::new(InputContext::Controller);
    let mut clock = Clock::new();

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            match action {
                Action::Quit => break 'running,
                Action::JoyButton {
                    instance,
                    direction,
                    code,
                } => {
                    if let Err(e) = bridge.forward(instance, direction, code) {
                        error!("Forwarding button {} failed: {}", code, e);
                    }
                }
                Action::JoyRemoved(instance) => {
                    if let Some(controller) = bridge.unregister(instance) {
                        warn!("Controller {} was removed", controller.name);
                    }
                    joysticks.retain(|joystick| joystick.instance_id() != instance);
                }
                _ => {}
            }
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        canvas.present();
        clock.tick(config.fps);
    }

    info!("Controller bridge stopped");
    Ok(())
}
