use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// 20-byte peer identifier chosen by the client for one session
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerId(pub [u8; 20]);

impl From<[u8; 20]> for PeerId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// A client taking part in a swarm
///
/// Two peers are the same peer only when id, IP and port all match, so a
/// client that re-announces from a new address shows up as a distinct peer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Peer {
    /// 20-byte peer identifier
    pub peer_id: PeerId,
    /// IP address (IPv4 or IPv6)
    pub ip: IpAddr,
    /// Port number
    pub port: u16,
}

impl Peer {
    pub fn new(peer_id: impl Into<PeerId>, ip: IpAddr, port: u16) -> Self {
        Self {
            peer_id: peer_id.into(),
            ip,
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}

impl fmt::Display for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.peer_id, self.socket_addr())
    }
}
