//! Network availability probes.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Answers whether the network is usable right now.
///
/// Synchronous and side-effect free from the caller's point of view. Callers
/// on an async runtime should run it through `spawn_blocking`.
pub trait ConnectivityProbe: Send + Sync {
    fn is_available(&self) -> bool;
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct StaticConnectivity(pub bool);

impl ConnectivityProbe for StaticConnectivity {
    fn is_available(&self) -> bool {
        self.0
    }
}

/// Considers the network available when a TCP connection to the catalog host
/// can be opened within the timeout.
#[derive(Debug, Clone)]
pub struct TcpConnectivityProbe {
    target: String,
    timeout: Duration,
}

impl TcpConnectivityProbe {
    pub fn new(target: impl Into<String>, timeout: Duration) -> Self {
        Self {
            target: target.into(),
            timeout,
        }
    }

    /// Probe the host and port of `url`. Returns `None` when the URL has no
    /// host or no known port.
    pub fn for_url(url: &str, timeout: Duration) -> Option<Self> {
        let parsed = reqwest::Url::parse(url).ok()?;
        let host = parsed.host_str()?;
        let port = parsed.port_or_known_default()?;
        Some(Self::new(format!("{}:{}", host, port), timeout))
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl ConnectivityProbe for TcpConnectivityProbe {
    fn is_available(&self) -> bool {
        let addrs = match self.target.to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                tracing::debug!(target_addr = %self.target, error = %e, "Probe host did not resolve");
                return false;
            }
        };

        let reachable = addrs
            .into_iter()
            .any(|addr| TcpStream::connect_timeout(&addr, self.timeout).is_ok());
        tracing::debug!(target_addr = %self.target, reachable, "Connectivity probed");
        reachable
    }
}
