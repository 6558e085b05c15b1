//! The Mate Light screen
//!
//! A [`Screen`] is a surface the size of the display plus the UDP socket that
//! ships it. Draw on it (or blit onto it) during a frame, then call
//! [`Screen::update`] once to send the frame.
//!
//! # Example
//!
//! ```no_run
//! use mlgame::color::{RED, DEFAULT_BRIGHTNESS};
//! use mlgame::screen::Screen;
//!
//! let mut screen = Screen::new("127.0.0.1", 1337, 40, 16)?;
//! screen.reset();
//! screen.surface_mut().draw_circle((20, 8), 5, RED, None, DEFAULT_BRIGHTNESS);
//! screen.update()?;
//! # Ok::<(), mlgame::transport::TransportError>(())
//! ```

use crate::color::{BLACK, DEFAULT_BRIGHTNESS};
use crate::surface::Surface;
use crate::transport::protocol::encode_frame;
use crate::transport::TransportError;
use log::{debug, info};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

/// The display, as a surface bound to a UDP destination
///
/// The size is whatever the caller says it is. Nothing checks it against the
/// real display.
pub struct Screen {
    surface: Surface,
    destination: SocketAddr,
    socket: UdpSocket,
}

impl Screen {
    /// Creates a black screen that sends its frames to `host:port`
    ///
    /// The host is resolved and the socket opened here, once per screen.
    pub fn new(host: &str, port: u16, width: u32, height: u32) -> Result<Self, TransportError> {
        let destination = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| TransportError::UnresolvedHost(host.to_string()))?;

        let bind_addr = if destination.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };
        let socket = UdpSocket::bind(bind_addr)?;

        info!("Screen {}x{} sending to {}", width, height, destination);

        Ok(Screen {
            surface: Surface::new(width, height),
            destination,
            socket,
        })
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn destination(&self) -> SocketAddr {
        self.destination
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Drawing access to the screen's buffer
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Fills the screen with black bottles
    pub fn reset(&mut self) {
        self.surface.fill(BLACK, DEFAULT_BRIGHTNESS);
    }

    /// Sends the current screen contents to the display
    ///
    /// One datagram per call, fire and forget. Returns the number of bytes sent.
    pub fn update(&self) -> Result<usize, TransportError> {
        let data = encode_frame(&self.surface);
        let sent = self.socket.send_to(&data, self.destination)?;
        debug!("Sent frame of {} bytes to {}", sent, self.destination);
        Ok(sent)
    }

    /// Blits `surface` onto the screen with its upper left corner at `pos`
    ///
    /// Whatever falls outside the screen is dropped.
    pub fn blit(&mut self, surface: &Surface, pos: (i32, i32)) {
        self.surface.blit(surface, pos);
    }

    /// Checks whether `pos` is inside the visible area
    pub fn point_on_screen(&self, pos: (i32, i32)) -> bool {
        self.surface.contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{get_color, Color, CYAN, WHITE};
    use crate::transport::protocol::{decode_frame, packet_size};
    use std::time::Duration;

    fn local_screen(width: u32, height: u32) -> (Screen, UdpSocket) {
        let display = UdpSocket::bind("127.0.0.1:0").unwrap();
        display
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let port = display.local_addr().unwrap().port();
        let screen = Screen::new("127.0.0.1", port, width, height).unwrap();
        (screen, display)
    }

    #[test]
    fn test_new_screen_is_black() {
        let (screen, _display) = local_screen(40, 16);

        assert_eq!(screen.width(), 40);
        assert_eq!(screen.height(), 16);
        assert!(screen.surface().pixels().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn test_point_on_screen_bounds() {
        let (screen, _display) = local_screen(4, 3);

        assert!(screen.point_on_screen((0, 0)));
        assert!(screen.point_on_screen((3, 2)));
        assert!(!screen.point_on_screen((4, 0)));
        assert!(!screen.point_on_screen((0, 3)));
        assert!(!screen.point_on_screen((-1, 0)));
    }

    #[test]
    fn test_blit_clips_to_screen() {
        let (mut screen, _display) = local_screen(4, 4);
        let mut sprite = Surface::new(3, 3);
        sprite.fill(WHITE, 1.0);

        screen.blit(&sprite, (2, -1));

        let lit = screen
            .surface()
            .pixels()
            .iter()
            .filter(|p| **p == WHITE)
            .count();
        assert_eq!(lit, 4);
        assert_eq!(screen.surface().get((2, 0)), Some(WHITE));
        assert_eq!(screen.surface().get((3, 1)), Some(WHITE));
    }

    #[test]
    fn test_blit_far_off_is_dropped() {
        let (mut screen, _display) = local_screen(4, 4);
        let mut sprite = Surface::new(2, 2);
        sprite.fill(WHITE, 1.0);

        screen.blit(&sprite, (i32::MAX, i32::MAX));
        screen.blit(&sprite, (i32::MIN, 0));

        assert!(screen.surface().pixels().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn test_reset_clears_drawing() {
        let (mut screen, _display) = local_screen(3, 3);
        screen.surface_mut().fill(CYAN, 1.0);

        screen.reset();

        assert!(screen.surface().pixels().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn test_update_sends_one_frame() {
        let (mut screen, display) = local_screen(5, 2);
        screen
            .surface_mut()
            .draw_dot((4, 1), Color::rgb(200, 100, 50), DEFAULT_BRIGHTNESS);

        let sent = screen.update().unwrap();
        assert_eq!(sent, packet_size(5, 2));

        let mut buffer = vec![0; 1024];
        let (len, _) = display.recv_from(&mut buffer).unwrap();
        assert_eq!(len, 5 * 2 * 3 + 4);
        assert_eq!(&buffer[len - 4..len], &[0, 0, 0, 0]);

        let frame = decode_frame(&buffer[..len], 5, 2).unwrap();
        assert_eq!(
            frame.get((4, 1)),
            Some(get_color(Color::rgb(200, 100, 50), DEFAULT_BRIGHTNESS))
        );
        assert_eq!(&frame, screen.surface());
    }

    #[test]
    fn test_unresolvable_host() {
        let result = Screen::new("no-such-host.invalid", 1337, 1, 1);
        assert!(result.is_err());
    }
}
