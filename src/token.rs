use crate::events::{decimalsCall, nameCall, symbolCall};
use crate::rpc::RpcClient;
use alloy_primitives::utils::parse_units;
use alloy_primitives::{Address, U256};
use anyhow::{Context, Result};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: u8,
}

/// Fetches the monitored token's metadata. `decimals` is required for the
/// threshold arithmetic and its failure is fatal; `name` and `symbol` are
/// cosmetic and fall back to `None` with a warning.
pub async fn fetch_token_metadata(client: &RpcClient, address: Address) -> Result<TokenMetadata> {
    info!("Fetching token metadata for {:?}", address);

    let decimals = client
        .call_contract(address, decimalsCall {})
        .await
        .with_context(|| format!("Contract {address} does not expose a readable decimals()"))?;
    info!("Token decimals: {}", decimals);

    let name = match client.call_contract(address, nameCall {}).await {
        Ok(result) => {
            info!("Token name: {}", result);
            Some(result)
        }
        Err(e) => {
            warn!("Failed to fetch token name: {}", e);
            None
        }
    };

    let symbol = match client.call_contract(address, symbolCall {}).await {
        Ok(result) => {
            info!("Token symbol: {}", result);
            Some(result)
        }
        Err(e) => {
            warn!("Failed to fetch token symbol: {}", e);
            None
        }
    };

    Ok(TokenMetadata {
        name,
        symbol,
        decimals,
    })
}

/// Everything the loop needs to know about the monitored token. The raw
/// threshold is computed exactly once here and never recomputed.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub threshold_human: String,
    pub threshold_raw: U256,
}

impl TokenConfig {
    pub fn new(
        address: Address,
        decimals: u8,
        symbol: Option<String>,
        threshold: &str,
    ) -> Result<Self> {
        // Exact decimal-string scaling; no float touches the raw value.
        let threshold_raw = parse_units(threshold, decimals)
            .with_context(|| {
                format!("Invalid threshold {threshold:?} for a token with {decimals} decimals")
            })?
            .get_absolute();

        Ok(TokenConfig {
            address,
            decimals,
            symbol,
            threshold_human: threshold.to_string(),
            threshold_raw,
        })
    }
}
