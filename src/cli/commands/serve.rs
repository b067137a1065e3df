//! Run the catalog HTTP server

use std::path::Path;

use repo_catalog::config::ServerConfig;
use repo_catalog::server;

/// Start serving the JSON API
///
/// Blocks until the process is stopped. The repository store is created
/// by the server loop and dropped with it, so every run starts empty.
pub fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    log::info!("Starting repo-catalog v{}", repo_catalog::VERSION);
    server::serve(config)
}

/// Resolve the effective configuration: file (or defaults), then flags
pub fn load_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<ServerConfig> {
    Ok(ServerConfig::load(path)?.with_overrides(host, port))
}
