//! Listener settings and the server configuration object.

use std::net::{IpAddr, SocketAddr};

use backend::domain::ElectionStores;
use ortho_config::OrthoConfig;
use serde::Deserialize;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener and query defaults loaded from CLI flags, `ELECTION_*`
/// environment variables and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ELECTION")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Election year used when region listings name none.
    #[ortho_config(default = 2025)]
    pub default_year: u16,
}

impl ServerSettings {
    /// Configured host, falling back to every interface.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] when the host is not an
    /// IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let ip: IpAddr = self.host().parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid host '{}': {err}", self.host()),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Everything `create_server` needs besides the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) stores: ElectionStores,
    pub(crate) default_year: u16,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Serve `stores` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, stores: ElectionStores, default_year: u16) -> Self {
        Self {
            bind_addr,
            stores,
            default_year,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 3] = ["ELECTION_HOST", "ELECTION_PORT", "ELECTION_DEFAULT_YEAR"];

    fn load(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once("election-backend")
            .chain(args.iter().copied())
            .map(OsString::from);
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn defaults_bind_every_interface_on_8080() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));
        let settings = load(&[]);
        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.default_year, 2025);
        assert_eq!(
            settings.bind_addr().expect("valid").to_string(),
            "0.0.0.0:8080"
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ELECTION_HOST", Some("127.0.0.1".to_owned())),
            ("ELECTION_PORT", Some("9090".to_owned())),
            ("ELECTION_DEFAULT_YEAR", Some("2023".to_owned())),
        ]);
        let settings = load(&[]);
        assert_eq!(
            settings.bind_addr().expect("valid").to_string(),
            "127.0.0.1:9090"
        );
        assert_eq!(settings.default_year, 2023);
    }

    #[rstest]
    fn cli_flags_override_defaults() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));
        let settings = load(&["--port", "8181"]);
        assert_eq!(settings.port, 8181);
    }

    #[rstest]
    fn hostnames_are_rejected() {
        let _guard = lock_env([("ELECTION_HOST", Some("localhost".to_owned()))]);
        let err = load(&[]).bind_addr().expect_err("not an ip");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
