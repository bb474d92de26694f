use std::sync::Mutex;
use std::time::Duration;

use log::{debug, info};
use serde::Deserialize;

use crate::blockchain::{Block, Ledger, validator};

/// Per-peer budget for fetching a chain; a silent peer is treated the same
/// as an unreachable one.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// A peer's view of its chain, as served by `GET /api/v1/chain/`.
#[derive(Debug, Deserialize)]
pub struct RemoteChain {
    pub length: usize,
    pub chain: Vec<Block>,
}

/// Injected collaborator fetching a peer's chain. `None` covers every
/// failure mode: unreachable peer, non-success status, undecodable body.
#[allow(async_fn_in_trait)]
pub trait ChainFetcher {
    async fn fetch_chain(&self, peer: &str) -> Option<RemoteChain>;
}

/// Production fetcher: HTTP GET against the peer's chain endpoint.
pub struct HttpChainFetcher {
    client: reqwest::Client,
}

impl HttpChainFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("build http client");
        Self { client }
    }
}

impl Default for HttpChainFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainFetcher for HttpChainFetcher {
    async fn fetch_chain(&self, peer: &str) -> Option<RemoteChain> {
        let url = format!("http://{peer}/api/v1/chain/");
        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json::<RemoteChain>().await.ok()
    }
}

/// Longest-valid-chain conflict resolution.
///
/// Scans every known peer, keeps the longest fetched chain that is strictly
/// longer than ours and passes full re-validation (peer-reported validity is
/// never trusted), and swaps it in at the end. Unreachable or malformed
/// peers are skipped; partial network failure only shrinks the candidate
/// set. Returns whether the local chain was replaced.
///
/// The ledger lock is taken twice, briefly: once to measure the local chain
/// and once to swap. It is never held across a fetch.
pub async fn resolve_conflicts<F: ChainFetcher>(
    ledger: &Mutex<Ledger>,
    peers: &[String],
    fetcher: &F,
) -> bool {
    let mut max_length = {
        let ledger = ledger.lock().expect("mutex poisoned");
        ledger.len()
    };
    let mut adopted: Option<Vec<Block>> = None;

    for peer in peers {
        let Some(remote) = fetcher.fetch_chain(peer).await else {
            debug!("CONSENSUS - skipping unreachable peer {peer}");
            continue;
        };
        if remote.length <= max_length {
            debug!(
                "CONSENSUS - peer {peer} reports length {}, not longer than {max_length}",
                remote.length
            );
            continue;
        }
        if !validator::is_valid_chain(&remote.chain) {
            debug!("CONSENSUS - peer {peer} served an invalid chain, ignoring");
            continue;
        }
        max_length = remote.length;
        adopted = Some(remote.chain);
    }

    if let Some(chain) = adopted {
        let mut ledger = ledger.lock().expect("mutex poisoned");
        // A concurrent append may have outgrown the candidate by now.
        if chain.len() > ledger.len() {
            info!(
                "CONSENSUS - replacing local chain (length {} -> {})",
                ledger.len(),
                chain.len()
            );
            ledger.replace_chain(chain);
            return true;
        }
    }
    false
}
