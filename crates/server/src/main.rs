//! Docsim Server - HTTP API for document analysis and similarity

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up DOCSIM_SERVER__* from a local .env, if any
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;
    server::start_server(config).await?;

    Ok(())
}
