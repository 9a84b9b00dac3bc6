//! Process-level settings for `docsim-server`.
//!
//! Sources, later ones winning:
//!
//! 1. built-in defaults (`0.0.0.0:8082`, 30s timeout, 10 MB bodies)
//! 2. an optional `server.{toml,yaml,json}` in the working directory
//! 3. `DOCSIM_SERVER__<FIELD>` environment variables, e.g.
//!    `DOCSIM_SERVER__PORT=9000` or `DOCSIM_SERVER__PIPELINE_CONFIG=docsim.yaml`
//!
//! The comparison policy itself lives in the pipeline YAML named by
//! `pipeline_config`, not here.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to listen on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request deadline; slower requests get `408`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Largest document `POST /analyze` accepts, in MB. Larger bodies get `413`.
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Allow any origin, method and header.
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Install the Prometheus recorder and serve `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Path to a pipeline YAML (index capacity, default `min_score` and
    /// `max_results`). Unset means exact-duplicate reporting.
    #[serde(default)]
    pub pipeline_config: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            pipeline_config: None,
        }
    }
}

impl ServerConfig {
    /// Merge the file and environment sources over the defaults.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(config::Environment::with_prefix("DOCSIM_SERVER").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// `bind_addr:port`, failing on an unparsable address.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Body limit in bytes, as handed to `DefaultBodyLimit`.
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
