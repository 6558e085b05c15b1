use std::fmt;

/// Errors that can occur while setting up or using a UDP transport
///
/// Only setup and socket failures end up here. Malformed datagrams are
/// dropped by the receiver and never reported as errors.
#[derive(Debug)]
pub enum TransportError {
    /// Socket creation, bind or send failed
    Io(std::io::Error),

    /// The host name did not resolve to any address
    UnresolvedHost(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransportError::Io(e) => write!(f, "Socket error: {}", e),
            TransportError::UnresolvedHost(host) => {
                write!(f, "Could not resolve host: {}", host)
            }
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Io(e) => Some(e),
            TransportError::UnresolvedHost(_) => None,
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io(err)
    }
}

impl From<TransportError> for String {
    fn from(error: TransportError) -> Self {
        error.to_string()
    }
}
