use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

/// A single block in the chain. Immutable once appended: the miner seals it
/// with a proof and the next block pins it by hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position in the chain.
    pub index: u64,
    /// Unix timestamp (UTC), display only.
    pub timestamp: i64,
    pub transactions: Vec<Transaction>,
    /// Proof-of-Work nonce relative to the previous block.
    pub proof: u64,
    /// Hash of the preceding block ("1" for genesis).
    pub previous_hash: String,
}

impl Block {
    pub fn new(index: u64, transactions: Vec<Transaction>, proof: u64, previous_hash: String) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp(),
            transactions,
            proof,
            previous_hash,
        }
    }

    /// SHA-256 over the canonical JSON encoding of the block.
    ///
    /// Going through `serde_json::Value` key-sorts every object map, so the
    /// miner and the validator agree on the digest of structurally equal
    /// blocks regardless of field order.
    pub fn hash(&self) -> String {
        let canonical = serde_json::to_value(self).expect("serialize block");
        let mut hasher = Sha256::new();
        hasher.update(canonical.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use crate::transaction::Transaction;

    fn sample_block() -> Block {
        Block::new(
            2,
            vec![Transaction::new("alice".into(), "bob".into(), 3, "home".into())],
            35293,
            "aa".repeat(32),
        )
    }

    #[test]
    fn hash_is_stable_across_calls() {
        let block = sample_block();
        assert_eq!(block.hash(), block.hash());
    }

    #[test]
    fn structurally_equal_blocks_hash_identically() {
        let a = sample_block();
        let mut b = a.clone();
        b.timestamp = a.timestamp;
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn hash_changes_when_any_field_changes() {
        let block = sample_block();
        let base = block.hash();

        let mut bumped = block.clone();
        bumped.proof += 1;
        assert_ne!(base, bumped.hash());

        let mut tampered = block.clone();
        tampered.transactions[0].amount = 4;
        assert_ne!(base, tampered.hash());
    }
}
