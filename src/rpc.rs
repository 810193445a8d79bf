use alloy::network::TransactionBuilder;
use alloy::providers::fillers::FillProvider;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{Filter, Log, TransactionRequest};
use alloy::sol_types::SolCall;
use alloy_primitives::{Address, B256};
use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::timeout;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

type AlloyFullProvider = FillProvider<
    alloy::providers::fillers::JoinFill<
        alloy::providers::Identity,
        alloy::providers::fillers::JoinFill<
            alloy::providers::fillers::GasFiller,
            alloy::providers::fillers::JoinFill<
                alloy::providers::fillers::BlobGasFiller,
                alloy::providers::fillers::JoinFill<
                    alloy::providers::fillers::NonceFiller,
                    alloy::providers::fillers::ChainIdFiller,
                >,
            >,
        >,
    >,
    alloy::providers::RootProvider,
>;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The narrow node interface the poll loop consumes. Production traffic goes
/// through [`RpcClient`]; tests substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait LogSource {
    async fn get_latest_block(&self) -> Result<u64>;

    async fn get_logs(
        &self,
        from_block: u64,
        to_block: u64,
        contract_address: Address,
        topic0: B256,
    ) -> Result<Vec<Log>>;
}

#[derive(Clone)]
pub struct RpcClient {
    providers: Vec<AlloyFullProvider>,
    urls: Vec<String>,
    current_provider: Arc<AtomicUsize>,
    max_retries: usize,
}

impl RpcClient {
    pub fn new(rpc_urls: &[String]) -> Result<Self> {
        if rpc_urls.is_empty() {
            return Err(anyhow::anyhow!("At least one RPC URL must be provided"));
        }

        let mut providers = Vec::new();
        for url in rpc_urls {
            let parsed_url = url
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid RPC URL: {}", url))?;
            let provider: AlloyFullProvider = ProviderBuilder::new().connect_http(parsed_url);
            providers.push(provider);
        }

        Ok(RpcClient {
            providers,
            urls: rpc_urls.to_vec(),
            current_provider: Arc::new(AtomicUsize::new(0)),
            max_retries: 5,
        })
    }

    fn get_provider(&self) -> &AlloyFullProvider {
        let index = self.current_provider.load(Ordering::Relaxed) % self.providers.len();
        &self.providers[index]
    }

    pub fn get_current_url(&self) -> &str {
        let index = self.current_provider.load(Ordering::Relaxed) % self.urls.len();
        &self.urls[index]
    }

    pub fn rotate_provider(&self) {
        let current = self.current_provider.load(Ordering::Relaxed);
        let next = (current + 1) % self.providers.len();
        self.current_provider.store(next, Ordering::Relaxed);

        if self.providers.len() > 1 {
            debug!("Rotating to RPC provider #{}", next);
        }
    }

    fn get_retry_strategy(&self) -> impl Iterator<Item = Duration> {
        ExponentialBackoff::from_millis(100)
            .factor(2)
            .max_delay(Duration::from_secs(10))
            .map(jitter)
            .take(self.max_retries)
    }

    fn handle_error(&self, error_str: &str) {
        let current_url = self.get_current_url();
        warn!(
            "RPC error on {}: {}, rotating provider",
            current_url, error_str
        );
        self.rotate_provider();
    }

    fn handle_timeout(&self) -> anyhow::Error {
        let current_url = self.get_current_url();
        warn!(
            "Request timeout after {} seconds on {}, rotating provider",
            REQUEST_TIMEOUT.as_secs(),
            current_url
        );
        self.rotate_provider();
        anyhow::anyhow!(
            "Request timeout after {} seconds",
            REQUEST_TIMEOUT.as_secs()
        )
    }

    /// One-shot `eth_call` against `address`, used for the token metadata
    /// lookups at startup.
    pub async fn call_contract<C: SolCall + Clone>(
        &self,
        address: Address,
        call: C,
    ) -> Result<C::Return> {
        let client = self.clone();
        Retry::spawn(self.get_retry_strategy(), move || {
            let client = client.clone();
            let call = call.clone();
            async move {
                let provider = client.get_provider();
                let tx = TransactionRequest::default()
                    .with_to(address)
                    .with_input(call.abi_encode());

                match timeout(REQUEST_TIMEOUT, provider.call(tx)).await {
                    Ok(Ok(output)) => Ok(C::abi_decode_returns(&output)?),
                    Ok(Err(e)) => {
                        let error_str = e.to_string();
                        client.handle_error(&error_str);
                        Err(anyhow::anyhow!("{}", e))
                    }
                    Err(_) => Err(client.handle_timeout()),
                }
            }
        })
        .await
    }
}

impl LogSource for RpcClient {
    async fn get_latest_block(&self) -> Result<u64> {
        let client = self.clone();
        Retry::spawn(self.get_retry_strategy(), move || {
            let client = client.clone();
            async move {
                let provider = client.get_provider();
                match timeout(REQUEST_TIMEOUT, provider.get_block_number()).await {
                    Ok(Ok(block_number)) => Ok(block_number),
                    Ok(Err(e)) => {
                        let error_str = e.to_string();
                        client.handle_error(&error_str);
                        Err(anyhow::anyhow!("{}", e))
                    }
                    Err(_) => Err(client.handle_timeout()),
                }
            }
        })
        .await
    }

    async fn get_logs(
        &self,
        from_block: u64,
        to_block: u64,
        contract_address: Address,
        topic0: B256,
    ) -> Result<Vec<Log>> {
        let client = self.clone();
        Retry::spawn(self.get_retry_strategy(), move || {
            let client = client.clone();
            async move {
                let provider = client.get_provider();
                let filter = Filter::new()
                    .address(contract_address)
                    .event_signature(topic0)
                    .from_block(from_block)
                    .to_block(to_block);

                match timeout(REQUEST_TIMEOUT, provider.get_logs(&filter)).await {
                    Ok(Ok(logs)) => Ok(logs),
                    Ok(Err(e)) => {
                        let error_str = e.to_string();
                        client.handle_error(&error_str);
                        Err(anyhow::anyhow!("{}", e))
                    }
                    Err(_) => Err(client.handle_timeout()),
                }
            }
        })
        .await
    }
}
