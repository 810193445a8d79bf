use crate::alert::WhaleAlert;
use crate::events::{Transfer as EventTransfer, decode_transfer_event};
use crate::filter::whale_match;
use crate::routers::RouterRegistry;
use crate::rpc::LogSource;
use crate::token::TokenConfig;
use alloy::sol_types::SolEvent;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// The poll loop. Owns the "next block to query" cursor, which only ever
/// moves forward, and past a block only once its logs are confirmed fetched.
pub struct Watchdog<L> {
    source: L,
    token: TokenConfig,
    routers: RouterRegistry,
    poll_interval: Duration,
    next_block: u64,
}

impl<L: LogSource> Watchdog<L> {
    pub fn new(
        source: L,
        token: TokenConfig,
        routers: RouterRegistry,
        poll_interval: Duration,
        start_block: u64,
    ) -> Self {
        Watchdog {
            source,
            token,
            routers,
            poll_interval,
            next_block: start_block,
        }
    }

    pub fn next_block(&self) -> u64 {
        self.next_block
    }

    /// One tick: catch the cursor up to the chain head, block by block, and
    /// collect alerts for matching transfers. Query failures are logged and
    /// leave the cursor on the unconfirmed block for the next tick; decode
    /// failures skip the single log.
    pub async fn poll_once(&mut self, shutdown: &watch::Receiver<bool>) -> Vec<WhaleAlert> {
        let mut alerts = Vec::new();

        let latest = match self.source.get_latest_block().await {
            Ok(block) => block,
            Err(e) => {
                warn!("Failed to fetch chain head: {}, retrying next tick", e);
                return alerts;
            }
        };

        if latest < self.next_block {
            debug!(
                "Chain head {} has not reached block {} yet",
                latest, self.next_block
            );
            return alerts;
        }

        for block in self.next_block..=latest {
            if *shutdown.borrow() {
                break;
            }

            let logs = match self
                .source
                .get_logs(block, block, self.token.address, EventTransfer::SIGNATURE_HASH)
                .await
            {
                Ok(logs) => logs,
                Err(e) => {
                    warn!(
                        "Log query for block {} failed: {}, retrying next tick",
                        block, e
                    );
                    break;
                }
            };

            for log in &logs {
                let event = match decode_transfer_event(log) {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("Skipping undecodable log in block {}: {}", block, e);
                        continue;
                    }
                };

                if let Some(router) = whale_match(&event, self.token.threshold_raw, &self.routers)
                {
                    alerts.push(WhaleAlert {
                        block,
                        value: event.value,
                        decimals: self.token.decimals,
                        from: event.from,
                        dex: router.name.clone(),
                        router: router.address,
                    });
                }
            }

            self.next_block = block + 1;
        }

        alerts
    }

    /// Runs until the shutdown flag flips (or its sender goes away). Alerts
    /// go to stdout; everything else is tracing.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        info!(
            "Watching {:?} from block {} (threshold {} raw units)",
            self.token.address, self.next_block, self.token.threshold_raw
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            for alert in self.poll_once(&shutdown).await {
                println!("{alert}");
            }

            tokio::select! {
                _ = sleep(self.poll_interval) => {}
                _ = shutdown.changed() => break,
            }
        }

        info!("Watch loop stopped at block cursor {}", self.next_block);
        Ok(())
    }
}
