use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

use crate::blockchain::{Block, Ledger};
use crate::consensus::HttpChainFetcher;
use crate::peers::PeerRegistry;
use crate::transaction::Transaction;

/// Shared application state: the in-memory ledger, the peer registry and
/// this node's identity. All state dies with the process.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub peers: Mutex<PeerRegistry>,
    pub fetcher: HttpChainFetcher,
    /// Globally unique address of this node, reward recipient when mining.
    pub node_id: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            peers: Mutex::new(PeerRegistry::new()),
            fetcher: HttpChainFetcher::new(),
            node_id: Uuid::new_v4().simple().to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: &'a [Block],
}

/* ---------- Mining API Models ---------- */

#[derive(Deserialize)]
pub struct MineQuery {
    /// Team label carried on the reward transaction.
    pub team: Option<String>,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- TX API Models ---------- */

/// All four fields are required; options exist only so a missing one can be
/// rejected with a message naming it.
#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub amount: Option<u64>,
    pub team: Option<String>,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub message: String,
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub nodes: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub message: &'static str,
    pub replaced: bool,
    pub chain: Vec<Block>,
}
