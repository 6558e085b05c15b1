//! Controller buttons and per-device button maps

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Device name SDL reports for the Xbox 360 wireless receiver
pub const XBOX_360_WIRELESS: &str = "Xbox 360 Wireless Receiver";

/// Buttons a game can react to, independent of the physical controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
    X,
    Y,
    L1,
    R1,
    Select,
    Start,
    Left,
    Right,
    Up,
    Down,
}

impl Button {
    /// Name sent over the wire
    pub fn name(&self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::X => "X",
            Button::Y => "Y",
            Button::L1 => "L1",
            Button::R1 => "R1",
            Button::Select => "Select",
            Button::Start => "Start",
            Button::Left => "Left",
            Button::Right => "Right",
            Button::Up => "Up",
            Button::Down => "Down",
        }
    }
}

/// Whether a button went down or came back up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    KeyDown,
    KeyUp,
}

impl Direction {
    /// Name sent over the wire
    pub fn name(&self) -> &'static str {
        match self {
            Direction::KeyDown => "KeyDown",
            Direction::KeyUp => "KeyUp",
        }
    }
}

/// Maps the raw button codes of one controller model to [`Button`]s
#[derive(Debug, Clone)]
pub struct ButtonMap {
    device: String,
    buttons: HashMap<u8, Button>,
}

impl ButtonMap {
    /// Button layout of the Xbox 360 wireless controller
    pub fn xbox360() -> Self {
        let buttons = HashMap::from([
            (0, Button::A),
            (1, Button::B),
            (2, Button::X),
            (3, Button::Y),
            (4, Button::L1),
            (5, Button::R1),
            (6, Button::Select),
            (7, Button::Start),
            (11, Button::Left),
            (12, Button::Right),
            (13, Button::Up),
            (14, Button::Down),
        ]);

        ButtonMap {
            device: XBOX_360_WIRELESS.to_string(),
            buttons,
        }
    }

    /// Returns the map for a device name, `None` for unsupported controllers
    pub fn for_device(name: &str) -> Option<Self> {
        match name {
            XBOX_360_WIRELESS => Some(ButtonMap::xbox360()),
            _ => None,
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn button(&self, code: u8) -> Option<Button> {
        self.buttons.get(&code).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xbox_mapping() {
        let map = ButtonMap::xbox360();

        assert_eq!(map.button(0), Some(Button::A));
        assert_eq!(map.button(7), Some(Button::Start));
        assert_eq!(map.button(14), Some(Button::Down));
        // 8-10 are the stick clicks and the guide button
        assert_eq!(map.button(8), None);
    }

    #[test]
    fn test_for_device() {
        assert!(ButtonMap::for_device(XBOX_360_WIRELESS).is_some());
        assert!(ButtonMap::for_device("Generic USB Joystick").is_none());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(Button::Select.name(), "Select");
        assert_eq!(Button::L1.name(), "L1");
        assert_eq!(Direction::KeyDown.name(), "KeyDown");
        assert_eq!(Direction::KeyUp.name(), "KeyUp");
    }
}
