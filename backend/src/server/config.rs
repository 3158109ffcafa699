//! HTTP server configuration loaded via OrthoConfig.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Settings read from CLI flags, `STUDENTS_*` environment variables and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STUDENTS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Start with the four demo records.
    #[ortho_config(default = true)]
    pub seed_demo_data: bool,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the host is not an IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let ip: IpAddr = self.host().parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid host {:?}: {err}", self.host()),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_demo_data: bool,
}

impl ServerConfig {
    /// Construct a server configuration binding to `bind_addr` with an
    /// empty store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_demo_data: false,
        }
    }

    /// Build the configuration from loaded settings.
    ///
    /// # Errors
    /// Propagates [`ServerSettings::bind_addr`] failures.
    pub fn from_settings(settings: &ServerSettings) -> std::io::Result<Self> {
        Ok(Self::new(settings.bind_addr()?).with_demo_data(settings.seed_demo_data))
    }

    /// Toggle seeding of the demo records.
    #[must_use]
    pub fn with_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
