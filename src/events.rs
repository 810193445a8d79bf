use alloy::rpc::types::Log;
use alloy::sol;
use alloy::sol_types::SolEvent;

sol! {
    event Transfer(address indexed from, address indexed to, uint256 value);

    function decimals() external view returns (uint8);
    function name() external view returns (string);
    function symbol() external view returns (string);
}

/// Decodes one raw log into a `Transfer`. Sender and recipient come from the
/// low 20 bytes of topics[1]/topics[2], the value from the data payload.
/// Errors if the log has fewer than three topics or a malformed payload.
pub fn decode_transfer_event(log: &Log) -> anyhow::Result<Transfer> {
    let log_data = log.data();
    let decoded = Transfer::decode_raw_log(log.topics(), &log_data.data)?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, B256, LogData, U256, address};

    fn transfer_log(from: Address, to: Address, value: U256) -> Log {
        let topics = vec![Transfer::SIGNATURE_HASH, from.into_word(), to.into_word()];
        let data = value.to_be_bytes::<32>().to_vec();
        Log {
            inner: alloy_primitives::Log {
                address: Address::ZERO,
                data: LogData::new_unchecked(topics, data.into()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn decodes_sender_recipient_and_value() {
        let from = address!("00000000000000000000000000000000000000a1");
        let to = address!("00000000000000000000000000000000000000b2");
        let log = transfer_log(from, to, U256::from(15_000u64));

        let event = decode_transfer_event(&log).unwrap();
        assert_eq!(event.from, from);
        assert_eq!(event.to, to);
        assert_eq!(event.value, U256::from(15_000u64));
    }

    #[test]
    fn decode_is_deterministic() {
        let from = address!("00000000000000000000000000000000000000a1");
        let to = address!("00000000000000000000000000000000000000b2");
        let log = transfer_log(from, to, U256::MAX);

        let first = decode_transfer_event(&log).unwrap();
        let second = decode_transfer_event(&log).unwrap();
        assert_eq!(first.from, second.from);
        assert_eq!(first.to, second.to);
        assert_eq!(first.value, second.value);
    }

    #[test]
    fn rejects_log_with_missing_topics() {
        let from = address!("00000000000000000000000000000000000000a1");
        let topics = vec![Transfer::SIGNATURE_HASH, from.into_word()];
        let data = U256::from(1u64).to_be_bytes::<32>().to_vec();
        let log = Log {
            inner: alloy_primitives::Log {
                address: Address::ZERO,
                data: LogData::new_unchecked(topics, data.into()),
            },
            ..Default::default()
        };

        assert!(decode_transfer_event(&log).is_err());
    }

    #[test]
    fn rejects_log_with_empty_payload() {
        let from = address!("00000000000000000000000000000000000000a1");
        let to = address!("00000000000000000000000000000000000000b2");
        let topics = vec![Transfer::SIGNATURE_HASH, from.into_word(), to.into_word()];
        let log = Log {
            inner: alloy_primitives::Log {
                address: Address::ZERO,
                data: LogData::new_unchecked(topics, Default::default()),
            },
            ..Default::default()
        };

        assert!(decode_transfer_event(&log).is_err());
    }

    #[test]
    fn signature_matches_erc20_transfer() {
        let hash: B256 = alloy_primitives::keccak256("Transfer(address,address,uint256)");
        assert_eq!(Transfer::SIGNATURE_HASH, hash);
    }
}
