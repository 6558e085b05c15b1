//! Widgets composed from surfaces
//!
//! # Available Components
//!
//! - [`Menu`] - Scrolling text menu with per-entry callbacks
//!
//! # Example Usage
//!
//! ```rust
//! use mlgame::gui::Menu;
//!
//! // Create menu once
//! let mut menu = Menu::new(40, 16);
//! menu.add_entry("new game", None);
//! menu.add_entry("quit", None);
//!
//! // Handle input
//! menu.select_next();
//!
//! // Every frame
//! menu.update();
//! if let Some(surface) = menu.render() {
//!     // screen.blit(surface, (0, 0));
//! #   assert_eq!(surface.height(), 16);
//! }
//! ```

pub mod menu;

pub use menu::{Callback, Menu, MenuStyle};
