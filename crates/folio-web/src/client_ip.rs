use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::HeaderMap;

/// Best-effort client address used as the rate-limit key.
///
/// Forwarding headers are taken at face value, so this identifies a client
/// only as well as the proxy in front of us does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(ClientIp(resolve(&parts.headers, peer)))
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn resolve(headers: &HeaderMap, peer: Option<String>) -> String {
    if let Some(first) = header_str(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return first.to_string();
    }

    if let Some(real_ip) = header_str(headers, "x-real-ip") {
        return real_ip.to_string();
    }

    peer.unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn forwarded_for_takes_first_hop() {
        let h = headers(&[("x-forwarded-for", "203.0.113.7, 10.0.0.1")]);
        assert_eq!(resolve(&h, None), "203.0.113.7");
    }

    #[test]
    fn forwarded_for_beats_real_ip_and_peer() {
        let h = headers(&[("x-forwarded-for", "203.0.113.7"), ("x-real-ip", "198.51.100.2")]);
        assert_eq!(resolve(&h, Some("127.0.0.1".to_string())), "203.0.113.7");
    }

    #[test]
    fn real_ip_used_without_forwarded_for() {
        let h = headers(&[("x-real-ip", "198.51.100.2")]);
        assert_eq!(resolve(&h, Some("127.0.0.1".to_string())), "198.51.100.2");
    }

    #[test]
    fn blank_forwarded_for_falls_through() {
        let h = headers(&[("x-forwarded-for", "  "), ("x-real-ip", "198.51.100.2")]);
        assert_eq!(resolve(&h, None), "198.51.100.2");
    }

    #[test]
    fn peer_address_is_fallback() {
        assert_eq!(resolve(&HeaderMap::new(), Some("192.0.2.1".to_string())), "192.0.2.1");
    }

    #[test]
    fn unknown_when_nothing_available() {
        assert_eq!(resolve(&HeaderMap::new(), None), "unknown");
    }
}
