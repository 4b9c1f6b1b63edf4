use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use std::net::SocketAddr;

/// Weak voter identity derived from the network origin of a request.
///
/// Only used to suppress duplicate votes, never as an authenticated
/// identity. Supplied by the boundary layer so the vote operation stays
/// independent of how identity is derived.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct VoterIdentity(String);

impl VoterIdentity {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// `realip_remote_addr` yields either a forwarded client IP or a peer
    /// `ip:port` pair; ports are stripped so reconnects tally as one voter.
    pub fn from_client_ip(addr: &str) -> Self {
        match addr.parse::<SocketAddr>() {
            Ok(sock) => Self(sock.ip().to_string()),
            Err(_) => Self(addr.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromRequest for VoterIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let info = req.connection_info();
        let identity = info
            .realip_remote_addr()
            .map(Self::from_client_ip)
            .unwrap_or_else(|| Self::new("unknown"));
        ready(Ok(identity))
    }
}
