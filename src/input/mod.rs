//! Input handling
//!
//! - `actions`: SDL events to program actions
//! - `buttons`: controller buttons and device button maps
//! - `rpc`: the remote-control calls a game offers, and a JSON-RPC client
//! - `bridge`: forwards local controller buttons to a remote game

pub mod actions;
pub mod bridge;
pub mod buttons;
pub mod rpc;

pub use actions::{Action, InputContext, InputSystem};
pub use bridge::{Controller, ControllerBridge};
pub use buttons::{Button, ButtonMap, Direction};
pub use rpc::{JsonRpcClient, RemoteControl, RpcError, SessionId};
