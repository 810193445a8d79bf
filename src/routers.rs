use alloy_primitives::Address;
use anyhow::{Context, Result};
use std::str::FromStr;

/// DEX routers watched on mainnet, as in the upstream deployments.
const MAINNET_ROUTERS: &[(&str, &str)] = &[
    ("UniswapV2", "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D"),
    ("UniswapV3", "0xE592427A0AEce92De3Edee1F18E0157C05861564"),
    ("Sushiswap", "0xd9e1cE17f2641f24aE83637ab66a2cca9C378B9F"),
];

#[derive(Debug, Clone)]
pub struct RouterEntry {
    pub name: String,
    pub address: Address,
}

/// Fixed set of known DEX router addresses. Built once at startup; lookups
/// compare canonical 20-byte addresses, so textual casing does not matter.
#[derive(Debug, Clone)]
pub struct RouterRegistry {
    entries: Vec<RouterEntry>,
}

impl RouterRegistry {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        let mut entries: Vec<RouterEntry> = Vec::with_capacity(pairs.len());

        for (name, addr_str) in pairs {
            let address = Address::from_str(addr_str)
                .with_context(|| format!("Invalid router address for {}: {}", name, addr_str))?;

            if entries.iter().any(|e| e.address == address) {
                anyhow::bail!("Duplicate router address for {}: {}", name, addr_str);
            }

            entries.push(RouterEntry {
                name: name.to_string(),
                address,
            });
        }

        Ok(RouterRegistry { entries })
    }

    pub fn mainnet() -> Result<Self> {
        Self::from_pairs(MAINNET_ROUTERS)
    }

    pub fn is_member(&self, address: Address) -> bool {
        self.entries.iter().any(|e| e.address == address)
    }

    /// Reverse lookup: the entry registered under `address`, if any.
    pub fn lookup(&self, address: Address) -> Option<&RouterEntry> {
        self.entries.iter().find(|e| e.address == address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
