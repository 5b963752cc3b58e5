//! # Configuration Module
//!
//! Immutable run configuration for the status reporter. Built once in `main`
//! from CLI arguments and passed by reference into the report builders; the
//! tool is single-shot, so there is no mutable process-wide state.

use serde::{
    Deserialize,
    Serialize,
};

/// Which role-specific section the report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Deposit and broadcast configuration (the default).
    Broadcaster,
    /// Registration status and economic parameters of a transcoder.
    Transcoder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host of the node's HTTP control API.
    pub host: String,
    /// Port of the node's HTTP control API.
    pub http_port: u16,
    /// RTMP ingest port, shown in the node table.
    pub rtmp_port: u16,
    pub mode: Mode,
}

impl Config {
    pub fn new(host: String, http_port: u16, rtmp_port: u16, mode: Mode) -> Self {
        Self {
            host,
            http_port,
            rtmp_port,
            mode,
        }
    }

    /// Base URL of the control API, e.g. `http://localhost:8935`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_includes_host_and_port() {
        let config = Config::new("localhost".to_string(), 8935, 1935, Mode::Broadcaster);
        assert_eq!(config.base_url(), "http://localhost:8935");
    }
}
