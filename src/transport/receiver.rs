//! Receive side of the frame protocol
//!
//! The emulator plays the part of the display: it listens for frames and
//! keeps the last valid one around for drawing. Datagrams of the wrong length
//! are dropped and the current frame stays as it was.

use super::error::TransportError;
use super::protocol::{decode_frame, packet_size};
use crate::surface::Surface;
use log::debug;
use std::io::ErrorKind;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

/// Holds the current frame and applies incoming datagrams to it
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    frame: Surface,
}

impl FrameDecoder {
    /// Starts with a black frame
    pub fn new(width: u32, height: u32) -> Self {
        FrameDecoder {
            frame: Surface::new(width, height),
        }
    }

    /// Expected datagram length
    pub fn packet_size(&self) -> usize {
        packet_size(self.frame.width(), self.frame.height())
    }

    /// Replaces the current frame if `datagram` is a valid frame
    ///
    /// Returns whether the datagram was accepted.
    pub fn accept(&mut self, datagram: &[u8]) -> bool {
        match decode_frame(datagram, self.frame.width(), self.frame.height()) {
            Some(frame) => {
                self.frame = frame;
                true
            }
            None => {
                debug!(
                    "Dropping datagram of {} bytes (expected {})",
                    datagram.len(),
                    self.packet_size()
                );
                false
            }
        }
    }

    pub fn frame(&self) -> &Surface {
        &self.frame
    }
}

/// A non-blocking UDP listener feeding a [`FrameDecoder`]
pub struct FrameReceiver {
    socket: UdpSocket,
    decoder: FrameDecoder,
    buffer: Vec<u8>,
}

impl FrameReceiver {
    /// Binds to `addr` and waits for frames of `width` x `height` bottles
    pub fn bind(addr: impl ToSocketAddrs, width: u32, height: u32) -> Result<Self, TransportError> {
        let socket = UdpSocket::bind(addr)?;
        socket.set_nonblocking(true)?;

        let decoder = FrameDecoder::new(width, height);
        // one spare byte so oversized datagrams show up as too long instead of
        // being silently truncated to a valid length
        let buffer = vec![0; decoder.packet_size() + 1];

        Ok(FrameReceiver {
            socket,
            decoder,
            buffer,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        Ok(self.socket.local_addr()?)
    }

    /// Reads every datagram that is waiting on the socket
    ///
    /// Returns how many of them were valid frames. Never blocks.
    pub fn poll(&mut self) -> Result<usize, TransportError> {
        let mut accepted = 0;
        loop {
            match self.socket.recv_from(&mut self.buffer) {
                Ok((len, _from)) => {
                    if self.decoder.accept(&self.buffer[..len]) {
                        accepted += 1;
                    }
                }
                Err(e) if e.kind() == ErrorKind::WouldBlock => return Ok(accepted),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    pub fn frame(&self) -> &Surface {
        self.decoder.frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RED, WHITE};
    use crate::transport::protocol::encode_frame;
    use std::time::Duration;

    #[test]
    fn test_decoder_accepts_valid_frame() {
        let mut decoder = FrameDecoder::new(3, 2);
        let mut surface = Surface::new(3, 2);
        surface.draw_dot((2, 1), WHITE, 1.0);

        assert!(decoder.accept(&encode_frame(&surface)));
        assert_eq!(decoder.frame(), &surface);
    }

    #[test]
    fn test_decoder_keeps_frame_on_short_datagram() {
        let mut decoder = FrameDecoder::new(3, 2);
        let mut first = Surface::new(3, 2);
        first.fill(RED, 1.0);
        assert!(decoder.accept(&encode_frame(&first)));

        let mut short = encode_frame(&Surface::new(3, 2));
        assert_eq!(short.len(), 3 * 2 * 3 + 4);
        short.pop();

        assert!(!decoder.accept(&short));
        assert_eq!(decoder.frame(), &first);
    }

    #[test]
    fn test_decoder_rejects_empty_datagram() {
        let mut decoder = FrameDecoder::new(2, 2);
        assert!(!decoder.accept(&[]));
        assert_eq!(decoder.frame(), &Surface::new(2, 2));
    }

    #[test]
    fn test_receiver_over_loopback() {
        let mut receiver = FrameReceiver::bind("127.0.0.1:0", 4, 2).unwrap();
        let target = receiver.local_addr().unwrap();
        let sender = UdpSocket::bind("127.0.0.1:0").unwrap();

        let mut surface = Surface::new(4, 2);
        surface.draw_line((0, 0), (3, 0), WHITE, 1.0);
        let mut too_long = encode_frame(&surface);
        too_long.push(0);

        sender.send_to(&too_long, target).unwrap();
        sender.send_to(&encode_frame(&surface), target).unwrap();

        let mut accepted = 0;
        for _ in 0..50 {
            accepted += receiver.poll().unwrap();
            if accepted > 0 {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(accepted, 1);
        assert_eq!(receiver.frame(), &surface);
    }
}
