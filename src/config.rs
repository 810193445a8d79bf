use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub json_rpc_urls: Vec<String>,
}

impl Config {
    /// Reads the node endpoint configuration from the environment (and a
    /// `.env` file when present). `JSON_RPC_URL` accepts a comma-separated
    /// list; extra endpoints become failover providers.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let raw = std::env::var("JSON_RPC_URL").context("JSON_RPC_URL must be set in .env")?;

        let json_rpc_urls: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();

        if json_rpc_urls.is_empty() {
            anyhow::bail!("JSON_RPC_URL is set but contains no endpoint");
        }

        Ok(Config { json_rpc_urls })
    }
}
