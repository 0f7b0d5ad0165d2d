//! Preview server.
//!
//! Every request for the page renders it again with a fresh timestamp, so
//! the served document always matches what `build` would write right now.

mod lifecycle;
mod response;

use crate::{
    config::{SiteConfig, cfg},
    core::{is_shutdown, register_server},
    debug, log,
    page::Clock,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;
use tiny_http::{Request, Server};

/// Worker threads for request handling.
const WORKER_THREADS: usize = 4;

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
}

/// Bind the HTTP server and register it for Ctrl+C shutdown.
pub fn bind_server() -> Result<BoundServer> {
    let config = cfg();
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    Ok(BoundServer { server })
}

impl BoundServer {
    /// Start the request loop (blocking until shutdown).
    pub fn run(self, clock: Arc<dyn Clock>) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(WORKER_THREADS)
            .build()
            .context("failed to create thread pool")?;

        for request in self.server.incoming_requests() {
            let config = cfg();
            let clock = Arc::clone(&clock);
            pool.spawn(move || {
                if let Err(e) = handle_request(request, &config, clock.as_ref()) {
                    log!("serve"; "request error: {e}");
                }
            });
        }

        log!("serve"; "stopped");
        Ok(())
    }
}

/// Bind and serve the global config until Ctrl+C.
pub fn serve_site(clock: Arc<dyn Clock>) -> Result<()> {
    bind_server()?.run(clock)
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig, clock: &dyn Clock) -> Result<()> {
    if is_shutdown() {
        return response::send(request, response::Reply::unavailable());
    }

    let started = Instant::now();
    let reply = response::route(request.method(), request.url(), config, clock);
    debug!(
        "serve"; "{} {} -> {} in {:?}",
        request.method(), request.url(), reply.status, started.elapsed()
    );
    response::send(request, reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::FixedClock;
    use std::io::{Read, Write};
    use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpStream};

    fn raw_request(addr: SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(request.as_bytes()).unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn test_serves_page_over_http() {
        let config = SiteConfig::default();
        let (server, addr) =
            lifecycle::bind_with_retry(IpAddr::V4(Ipv4Addr::LOCALHOST), 0).unwrap();
        let server = Arc::new(server);
        let config = Arc::new(config);
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new("2024-01-15T00:00:00.000Z"));

        let worker = {
            let server = Arc::clone(&server);
            std::thread::spawn(move || {
                for _ in 0..2 {
                    let request = server.recv().unwrap();
                    handle_request(request, &config, clock.as_ref()).unwrap();
                }
            })
        };

        let get = raw_request(addr, "GET / HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n");
        assert!(get.starts_with("HTTP/1.1 200"));
        assert!(get.contains("Last updated 1/15/2024"));

        let head = raw_request(addr, "HEAD / HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n");
        assert!(head.starts_with("HTTP/1.1 200"));
        assert!(!head.contains("<!DOCTYPE html>"));

        worker.join().unwrap();
    }
}
