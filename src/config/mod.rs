//! Configuration for the mlgame programs
//!
//! JSON config file, one section per program:
//!
//! ```json
//! {
//!   "display":    { "host": "127.0.0.1", "port": 1337, "width": 40, "height": 16 },
//!   "emulator":   { "host": "127.0.0.1", "port": 1337, "dot_size": 10 },
//!   "controller": { "host": "127.0.0.1", "port": 1338 },
//!   "menu":       { "active": [0, 255, 255], "brightness": 0.1, "font": "font.png" }
//! }
//! ```
//!
//! - `types`: config structures, defaults and error type
//! - `loader`: lookup, loading and saving

pub mod loader;
pub mod types;

pub use loader::{default_path, CONFIG_ENV};
pub use types::*;
