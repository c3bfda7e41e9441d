use anyhow::Context;
use serde::Deserialize;

/// Startup configuration for both listeners and the initial backend list.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,

    /// Initial backend list, comma separated ("host:port,host:port").
    /// Validated in main with the same rules as the /set operation.
    #[serde(default)]
    pub backends: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Public address traffic is proxied from.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Address the HTTP control interface listens on.
    #[serde(default = "default_control_addr")]
    pub control_addr: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_control_addr() -> String {
    "127.0.0.1:6777".to_string()
}

impl Config {
    /// Load configuration from the YAML file named by `SEAMLESS_CONFIG`,
    /// or from the `LISTEN`, `CONTROL` and `BACKENDS` environment
    /// variables when no file is given.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("SEAMLESS_CONFIG") {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read config file {path}"))?;
            let cfg = serde_yaml::from_str(&raw)
                .with_context(|| format!("cannot parse config file {path}"))?;
            return Ok(cfg);
        }

        let listen_addr = std::env::var("LISTEN").unwrap_or_else(|_| default_listen_addr());
        let control_addr = std::env::var("CONTROL").unwrap_or_else(|_| default_control_addr());
        let backends = std::env::var("BACKENDS").unwrap_or_default();

        Ok(Self {
            server: ServerConfig {
                listen_addr,
                control_addr,
            },
            backends,
        })
    }
}
