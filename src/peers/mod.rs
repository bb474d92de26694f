use std::collections::HashSet;

use log::debug;

use crate::error::NodeError;

/// Set of known peer addresses, normalized to bare `host:port`.
///
/// Purely a lookup table: it owns no connections and is only consulted by
/// consensus resolution. Iteration order is unspecified.
#[derive(Debug, Default)]
pub struct PeerRegistry {
    peers: HashSet<String>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and record a peer address. Registering the same peer twice
    /// (with or without a scheme) keeps a single entry.
    pub fn register(&mut self, address: &str) -> Result<String, NodeError> {
        let normalized = normalize(address)
            .ok_or_else(|| NodeError::InvalidAddress(address.to_string()))?;
        if self.peers.insert(normalized.clone()) {
            debug!("PEERS - registered {normalized}");
        }
        Ok(normalized)
    }

    /// Snapshot of all known peers, order unspecified.
    pub fn list(&self) -> Vec<String> {
        self.peers.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

/// Reduce an address to its network location: strip any scheme, keep the
/// `host:port` part, drop any trailing path. Schemeless input is treated as
/// already bare. Returns `None` when nothing usable remains.
fn normalize(address: &str) -> Option<String> {
    let rest = match address.trim().split_once("://") {
        Some((_scheme, rest)) => rest,
        None => address.trim(),
    };
    let location = rest.split('/').next().unwrap_or_default();
    if location.is_empty() {
        None
    } else {
        Some(location.to_string())
    }
}
