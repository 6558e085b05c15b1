//! UDP transport for Mate Light frames
//!
//! - `protocol`: the datagram layout and its encoder/decoder
//! - `receiver`: the display side, used by the emulator
//! - `error`: transport setup errors
//!
//! The sending side lives in [`crate::screen::Screen`].

pub mod error;
pub mod protocol;
pub mod receiver;

pub use error::TransportError;
pub use protocol::{decode_frame, encode_frame, packet_size, TRAILER_LEN};
pub use receiver::{FrameDecoder, FrameReceiver};
