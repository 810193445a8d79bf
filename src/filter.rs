use crate::events::Transfer;
use crate::routers::{RouterEntry, RouterRegistry};
use alloy_primitives::U256;

/// Returns the matched router entry when `transfer` is worth alerting on:
/// value at or above `threshold_raw` (raw token units) and recipient in the
/// registry. Pure predicate; malformed inputs are rejected before this point.
pub fn whale_match<'a>(
    transfer: &Transfer,
    threshold_raw: U256,
    routers: &'a RouterRegistry,
) -> Option<&'a RouterEntry> {
    if transfer.value < threshold_raw {
        return None;
    }
    routers.lookup(transfer.to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, address};
    use std::str::FromStr;

    const UNISWAP_V2: &str = "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D";

    fn transfer_to(to: Address, value: u64) -> Transfer {
        Transfer {
            from: address!("00000000000000000000000000000000000000a1"),
            to,
            value: U256::from(value),
        }
    }

    #[test]
    fn matches_router_transfer_at_or_above_threshold() {
        let routers = RouterRegistry::mainnet().unwrap();
        let router = Address::from_str(UNISWAP_V2).unwrap();

        let at = transfer_to(router, 10_000);
        let above = transfer_to(router, 15_000);

        assert_eq!(
            whale_match(&at, U256::from(10_000u64), &routers).unwrap().name,
            "UniswapV2"
        );
        assert!(whale_match(&above, U256::from(10_000u64), &routers).is_some());
    }

    #[test]
    fn below_threshold_never_matches() {
        let routers = RouterRegistry::mainnet().unwrap();
        let router = Address::from_str(UNISWAP_V2).unwrap();
        let transfer = transfer_to(router, 5_000);

        assert!(whale_match(&transfer, U256::from(10_000u64), &routers).is_none());
    }

    #[test]
    fn non_router_recipient_never_matches() {
        let routers = RouterRegistry::mainnet().unwrap();
        let transfer = transfer_to(
            address!("00000000000000000000000000000000000000b2"),
            1_000_000,
        );

        assert!(whale_match(&transfer, U256::from(1u64), &routers).is_none());
    }

    #[test]
    fn raising_threshold_is_monotonic() {
        let routers = RouterRegistry::mainnet().unwrap();
        let router = Address::from_str(UNISWAP_V2).unwrap();
        let transfer = transfer_to(router, 10_000);

        // Once a threshold excludes a transfer, every higher one does too.
        let mut matched_after_miss = false;
        let mut missed = false;
        for threshold in [1u64, 10_000, 10_001, 1_000_000] {
            let hit = whale_match(&transfer, U256::from(threshold), &routers).is_some();
            if missed && hit {
                matched_after_miss = true;
            }
            if !hit {
                missed = true;
            }
        }
        assert!(!matched_after_miss);
    }
}
