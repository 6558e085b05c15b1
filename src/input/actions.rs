use super::buttons::Direction;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// What a program should do in response to input
///
/// This decouples SDL events from the frame loops of the programs.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Menu Navigation ===
    MenuUp,
    MenuDown,
    MenuConfirm,

    // === Controllers ===
    JoyButton {
        instance: u32,
        direction: Direction,
        code: u8,
    },
    JoyRemoved(u32),

    // === System ===
    Quit,
}

/// Which program is reading input
///
/// Only events that make sense for the program turn into actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The display emulator only needs to know when to stop
    Emulator,
    /// Keyboard navigation of a menu
    Menu,
    /// Joystick buttons to forward
    Controller,
}

/// Turns SDL events into [`Action`]s
///
/// Escape and closing the window (or Ctrl+C, which SDL delivers as a quit
/// event) end every program.
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new(context: InputContext) -> Self {
        InputSystem { context }
    }

    /// Drains pending SDL events and returns the resulting actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<Action> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Translates a single event, `None` if it is irrelevant here
    pub fn translate(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Quit { .. } => Some(Action::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => self.handle_keydown(*key),
            Event::JoyButtonDown {
                which, button_idx, ..
            } if self.context == InputContext::Controller => Some(Action::JoyButton {
                instance: *which,
                direction: Direction::KeyDown,
                code: *button_idx,
            }),
            Event::JoyButtonUp {
                which, button_idx, ..
            } if self.context == InputContext::Controller => Some(Action::JoyButton {
                instance: *which,
                direction: Direction::KeyUp,
                code: *button_idx,
            }),
            Event::JoyDeviceRemoved { which, .. } if self.context == InputContext::Controller => {
                Some(Action::JoyRemoved(*which))
            }
            _ => None,
        }
    }

    fn handle_keydown(&self, key: Keycode) -> Option<Action> {
        if key == Keycode::Escape {
            return Some(Action::Quit);
        }

        match self.context {
            InputContext::Menu => match key {
                Keycode::Up | Keycode::W => Some(Action::MenuUp),
                Keycode::Down | Keycode::S => Some(Action::MenuDown),
                Keycode::Return | Keycode::Space => Some(Action::MenuConfirm),
                _ => None,
            },
            InputContext::Emulator | InputContext::Controller => None,
        }
    }
}
