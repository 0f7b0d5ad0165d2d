//! Server lifecycle management.

use crate::log;
use anyhow::{Result, bail};
use std::net::{IpAddr, SocketAddr};
use tiny_http::Server;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind to the specified interface and port, with automatic port retry.
///
/// Returns the address actually bound, so port `0` reports the assigned port.
pub fn bind_with_retry(interface: IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                let bound = server.server_addr().to_ip().unwrap_or(addr);
                return Ok((server, bound));
            }
            Err(e) => last_error = Some(e),
        }
    }

    bail!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        MAX_PORT_RETRIES,
        base_port,
        base_port.saturating_add(MAX_PORT_RETRIES - 1),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

    #[test]
    fn test_bind_ephemeral() {
        let (server, addr) = bind_with_retry(LOCALHOST, 0).unwrap();
        assert_eq!(addr.ip(), LOCALHOST);
        assert_ne!(addr.port(), 0);
        assert_eq!(server.server_addr().to_ip(), Some(addr));
    }

    #[test]
    fn test_retry_on_taken_port() {
        let (_first, first_addr) = bind_with_retry(LOCALHOST, 0).unwrap();
        let taken = first_addr.port();
        let (_second, addr) = bind_with_retry(LOCALHOST, taken).unwrap();
        assert_ne!(addr.port(), taken);
        assert!(addr.port() > taken && addr.port() < taken.saturating_add(MAX_PORT_RETRIES));
    }
}
