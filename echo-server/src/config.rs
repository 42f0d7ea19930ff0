//! Listener settings.
//!
//! The server has no configuration surface: no file, no flags, no
//! environment. `Config::default()` is the only configuration, and tests
//! bypass it by binding their own ephemeral listener.

/// Where the echo server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// `host:port`, as handed to the socket bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL advertised in the startup banner.
    pub fn url(&self) -> String {
        format!("http://{}", self.bind_addr())
    }
}
