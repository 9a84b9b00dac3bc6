//! Docsim Server - HTTP API for document analysis and similarity
//!
//! Exposes the two pipeline operations over HTTP:
//!
//! - **Analyze**: `POST /analyze` with the raw document as the body
//! - **Compare**: `GET /compare/{fingerprint}` scores one stored document
//!   against every other stored document
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `GET /metadata` - Version, uptime, index size
//! - `POST /analyze` - Analyze and store a document
//! - `GET /compare/{fingerprint}?min_score=&limit=` - Similarity scores
//! - `GET /records/{fingerprint}` - Stored analysis record
//! - `GET /stats` - Index statistics

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
