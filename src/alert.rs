use alloy_primitives::{Address, U256};
use std::fmt;

/// One whale sighting, ready to print. Holds the raw value so formatting
/// stays a display concern.
#[derive(Debug, Clone)]
pub struct WhaleAlert {
    pub block: u64,
    pub value: U256,
    pub decimals: u8,
    pub from: Address,
    pub dex: String,
    pub router: Address,
}

impl fmt::Display for WhaleAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Block {}] Whale transfer: {} tokens from {} -> DEX {} ({})",
            self.block,
            format_token_amount(self.value, self.decimals),
            self.from,
            self.dex,
            self.router
        )
    }
}

/// Renders a raw token amount as a human-scaled decimal with exactly two
/// fractional digits, truncating. Integer arithmetic throughout; U256 values
/// exceed what f64 can represent. `decimals` is bounded by the threshold
/// parser before any amount reaches this point.
pub fn format_token_amount(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return format!("{value}.00");
    }

    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = value / scale;
    let rem = value % scale;

    let cents = if decimals >= 2 {
        rem / (scale / U256::from(100u64))
    } else {
        rem * U256::from(10u64)
    };

    format!("{}.{:02}", whole, cents.to::<u64>())
}
