//! Forwards local controller buttons to a remote game

use super::buttons::{Button, ButtonMap, Direction};
use super::rpc::{RemoteControl, RpcError, SessionId};
use log::{debug, info, warn};
use std::collections::HashMap;

/// A registered, supported controller
#[derive(Debug, Clone)]
pub struct Controller {
    pub name: String,
    pub session: SessionId,
    map: ButtonMap,
}

/// Keeps one remote session per local controller
///
/// Controllers are keyed by the instance id SDL assigns to an opened joystick.
pub struct ControllerBridge<R: RemoteControl> {
    remote: R,
    controllers: HashMap<u32, Controller>,
}

impl<R: RemoteControl> ControllerBridge<R> {
    pub fn new(remote: R) -> Self {
        ControllerBridge {
            remote,
            controllers: HashMap::new(),
        }
    }

    /// Registers a controller with the game if its model is supported
    ///
    /// Returns false (after a warning) for unsupported hardware.
    pub fn register(&mut self, instance: u32, name: &str) -> Result<bool, RpcError> {
        let Some(map) = ButtonMap::for_device(name) else {
            warn!("Sorry but this controller is not supported yet ({})", name);
            return Ok(false);
        };

        let session = self.remote.init()?;
        info!("Controller {} ({}) got session {}", instance, name, session);

        self.controllers.insert(
            instance,
            Controller {
                name: name.to_string(),
                session,
                map,
            },
        );
        Ok(true)
    }

    /// Forgets a controller, e.g. after it was unplugged
    pub fn unregister(&mut self, instance: u32) -> Option<Controller> {
        self.controllers.remove(&instance)
    }

    /// Sends a raw button event to the game
    ///
    /// Events from unknown controllers and unmapped buttons are ignored.
    /// Returns the button that was sent.
    pub fn forward(
        &mut self,
        instance: u32,
        direction: Direction,
        code: u8,
    ) -> Result<Option<Button>, RpcError> {
        let Some(controller) = self.controllers.get(&instance) else {
            debug!("Ignoring button {} of unregistered controller {}", code, instance);
            return Ok(None);
        };
        let Some(button) = controller.map.button(code) else {
            debug!("Ignoring unmapped button {} on {}", code, controller.name);
            return Ok(None);
        };

        debug!(
            "joy {} (uid: {}) {} {}",
            controller.name,
            controller.session,
            direction.name(),
            button.name()
        );
        self.remote
            .trigger_button(&controller.session, direction, button)?;
        Ok(Some(button))
    }

    pub fn has_controllers(&self) -> bool {
        !self.controllers.is_empty()
    }

    pub fn controller(&self, instance: u32) -> Option<&Controller> {
        self.controllers.get(&instance)
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::buttons::XBOX_360_WIRELESS;

    /// Records every call instead of talking to a game
    #[derive(Default)]
    struct RecordingRemote {
        sessions: u32,
        sent: Vec<(SessionId, Direction, Button)>,
    }

    impl RemoteControl for RecordingRemote {
        fn init(&mut self) -> Result<SessionId, RpcError> {
            self.sessions += 1;
            Ok(SessionId(format!("uid-{}", self.sessions)))
        }

        fn trigger_button(
            &mut self,
            session: &SessionId,
            direction: Direction,
            button: Button,
        ) -> Result<(), RpcError> {
            self.sent.push((session.clone(), direction, button));
            Ok(())
        }
    }

    #[test]
    fn test_register_supported_controller() {
        let mut bridge = ControllerBridge::new(RecordingRemote::default());

        assert!(bridge.register(3, XBOX_360_WIRELESS).unwrap());

        assert!(bridge.has_controllers());
        assert_eq!(bridge.controller(3).unwrap().session, SessionId("uid-1".to_string()));
    }

    #[test]
    fn test_unsupported_controller_is_skipped() {
        let mut bridge = ControllerBridge::new(RecordingRemote::default());

        assert!(!bridge.register(0, "Some Gamepad").unwrap());

        assert!(!bridge.has_controllers());
        assert_eq!(bridge.remote().sessions, 0);
    }

    #[test]
    fn test_forward_maps_buttons_per_session() {
        let mut bridge = ControllerBridge::new(RecordingRemote::default());
        bridge.register(0, XBOX_360_WIRELESS).unwrap();
        bridge.register(1, XBOX_360_WIRELESS).unwrap();

        assert_eq!(bridge.forward(1, Direction::KeyDown, 13).unwrap(), Some(Button::Up));
        assert_eq!(bridge.forward(0, Direction::KeyUp, 0).unwrap(), Some(Button::A));

        assert_eq!(
            bridge.remote().sent,
            vec![
                (SessionId("uid-2".to_string()), Direction::KeyDown, Button::Up),
                (SessionId("uid-1".to_string()), Direction::KeyUp, Button::A),
            ]
        );
    }

    #[test]
    fn test_forward_ignores_unknown_input() {
        let mut bridge = ControllerBridge::new(RecordingRemote::default());
        bridge.register(0, XBOX_360_WIRELESS).unwrap();

        assert_eq!(bridge.forward(0, Direction::KeyDown, 9).unwrap(), None);
        assert_eq!(bridge.forward(5, Direction::KeyDown, 0).unwrap(), None);
        assert!(bridge.remote().sent.is_empty());
    }

    #[test]
    fn test_unregister() {
        let mut bridge = ControllerBridge::new(RecordingRemote::default());
        bridge.register(2, XBOX_360_WIRELESS).unwrap();

        assert!(bridge.unregister(2).is_some());
        assert!(!bridge.has_controllers());
    }
}
