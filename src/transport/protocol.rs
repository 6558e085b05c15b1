//! Mate Light frame format
//!
//! One frame is one UDP datagram:
//!
//! ```text
//! bytes[0 .. W*H*3 - 1]   row-major (y outer, x inner) RGB, one byte per channel
//! bytes[W*H*3 .. +3]      4-byte trailer, always zero
//! ```
//!
//! The trailer is reserved for a checksum that the display never checks.
//! Colors go out exactly as stored, brightness is applied when drawing.

use crate::color::Color;
use crate::surface::Surface;

/// Length of the reserved checksum trailer
pub const TRAILER_LEN: usize = 4;

const TRAILER: [u8; TRAILER_LEN] = [0; TRAILER_LEN];

/// Size in bytes of a frame for a `width` x `height` display
pub fn packet_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3 + TRAILER_LEN
}

/// Serializes `surface` into a datagram
pub fn encode_frame(surface: &Surface) -> Vec<u8> {
    let mut data = Vec::with_capacity(packet_size(surface.width(), surface.height()));
    for color in surface.pixels() {
        data.extend_from_slice(&color.channels());
    }
    data.extend_from_slice(&TRAILER);
    data
}

/// Parses a datagram for a `width` x `height` display
///
/// Returns `None` unless the datagram has exactly the expected length.
pub fn decode_frame(datagram: &[u8], width: u32, height: u32) -> Option<Surface> {
    if datagram.len() != packet_size(width, height) {
        return None;
    }

    let body = &datagram[..datagram.len() - TRAILER_LEN];
    let mut frame = Surface::new(width, height);
    for (i, rgb) in body.chunks_exact(3).enumerate() {
        let x = (i % width as usize) as i32;
        let y = (i / width as usize) as i32;
        frame.put_pixel((x, y), Color::rgb(rgb[0], rgb[1], rgb[2]));
    }
    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, RED, WHITE};

    #[test]
    fn test_packet_size() {
        assert_eq!(packet_size(40, 16), 40 * 16 * 3 + 4);
        assert_eq!(packet_size(0, 0), 4);
    }

    #[test]
    fn test_encode_layout_is_row_major() {
        let mut surface = Surface::new(2, 2);
        surface.draw_dot((1, 0), RED, 1.0);
        surface.draw_dot((0, 1), BLUE, 1.0);

        let data = encode_frame(&surface);

        assert_eq!(
            data,
            vec![
                0, 0, 0, // (0, 0)
                255, 0, 0, // (1, 0)
                0, 0, 255, // (0, 1)
                0, 0, 0, // (1, 1)
                0, 0, 0, 0, // trailer
            ]
        );
    }

    #[test]
    fn test_encode_then_decode_reproduces_surface() {
        let mut surface = Surface::new(5, 3);
        surface.draw_line((0, 0), (4, 2), WHITE, 0.5);
        surface.draw_dot((4, 0), RED, 0.3);

        let decoded = decode_frame(&encode_frame(&surface), 5, 3);

        assert_eq!(decoded, Some(surface));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let surface = Surface::new(3, 2);
        let mut data = encode_frame(&surface);

        data.pop();
        assert_eq!(decode_frame(&data, 3, 2), None);

        data.extend_from_slice(&[0, 0]);
        assert_eq!(decode_frame(&data, 3, 2), None);
    }

    #[test]
    fn test_decode_ignores_trailer_contents() {
        let surface = Surface::new(2, 1);
        let mut data = encode_frame(&surface);
        let len = data.len();
        data[len - 1] = 0xff;

        assert_eq!(decode_frame(&data, 2, 1), Some(surface));
    }
}
