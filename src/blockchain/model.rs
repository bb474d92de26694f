use log::debug;

use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::error::NodeError;
use crate::transaction::Transaction;

/// In-memory append-only chain plus the buffer of not-yet-mined transactions.
///
/// The chain only grows by `append` or is wholesale swapped by consensus
/// resolution; nothing else mutates it.
#[derive(Debug)]
pub struct Ledger {
    pub chain: Vec<Block>,
    pub pending: Vec<Transaction>,
}

impl Ledger {
    /// Create a ledger seeded with the genesis block.
    pub fn new() -> Self {
        let genesis = Block::new(1, Vec::new(), GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string());
        Self {
            chain: vec![genesis],
            pending: Vec::new(),
        }
    }

    /// The current tip. `EmptyChain` is unreachable after `new`.
    pub fn last_block(&self) -> Result<&Block, NodeError> {
        self.chain.last().ok_or(NodeError::EmptyChain)
    }

    /// Seal the pending transactions into a new block with the given proof.
    /// The new block links to the tip by hash; the pending buffer is drained.
    pub fn append(&mut self, proof: u64) -> Result<&Block, NodeError> {
        let previous_hash = self.last_block()?.hash();
        let index = self.chain.len() as u64 + 1;
        let transactions = std::mem::take(&mut self.pending);

        let block = Block::new(index, transactions, proof, previous_hash);
        debug!(
            "LEDGER - appended block #{} with {} tx(s)",
            block.index,
            block.transactions.len()
        );
        self.chain.push(block);
        self.last_block()
    }

    /// Buffer a transaction for the next mined block and return the index of
    /// the block that will hold it. Advisory: if nobody mines, the index is
    /// never realized.
    pub fn stage_transaction(&mut self, tx: Transaction) -> Result<u64, NodeError> {
        let next_index = self.last_block()?.index + 1;
        self.pending.push(tx);
        Ok(next_index)
    }

    /// Wholesale chain swap. Only consensus resolution calls this, and only
    /// after validating the replacement.
    pub fn replace_chain(&mut self, chain: Vec<Block>) {
        self.chain = chain;
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Ledger;
    use crate::blockchain::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF, pow};
    use crate::transaction::Transaction;

    fn transfer(sender: &str, team: &str) -> Transaction {
        Transaction::new(sender.into(), "receiver".into(), 1, team.into())
    }

    #[test]
    fn new_ledger_holds_only_genesis() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 1);

        let genesis = ledger.last_block().unwrap();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, GENESIS_PROOF);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
        assert!(genesis.transactions.is_empty());
    }

    #[test]
    fn append_grows_by_one_and_drains_pending() {
        let mut ledger = Ledger::new();
        ledger.stage_transaction(transfer("alice", "home")).unwrap();
        ledger.stage_transaction(transfer("bob", "away")).unwrap();

        let block = ledger.append(12345).unwrap();
        assert_eq!(block.index, 2);
        assert_eq!(block.transactions.len(), 2);
        assert_eq!(ledger.len(), 2);
        assert!(ledger.pending.is_empty());
    }

    #[test]
    fn indexes_are_one_based_and_contiguous() {
        let mut ledger = Ledger::new();
        for proof in 0..4 {
            ledger.append(proof).unwrap();
        }
        for (k, block) in ledger.chain.iter().enumerate() {
            assert_eq!(block.index, k as u64 + 1);
        }
    }

    #[test]
    fn stage_predicts_next_block_index() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.stage_transaction(transfer("alice", "home")).unwrap(), 2);
        assert_eq!(ledger.stage_transaction(transfer("bob", "home")).unwrap(), 2);

        ledger.append(9).unwrap();
        assert_eq!(ledger.stage_transaction(transfer("carol", "away")).unwrap(), 3);
    }

    #[test]
    fn stage_then_mine_seals_exactly_the_staged_transactions() {
        let mut ledger = Ledger::new();
        let reward = Transaction::new("0".into(), "X".into(), 1, "home".into());
        ledger.stage_transaction(reward.clone()).unwrap();

        let tip = ledger.last_block().unwrap();
        let (tip_proof, tip_hash) = (tip.proof, tip.hash());
        let proof = pow::solve(tip_proof, &tip_hash);

        let block = ledger.append(proof).unwrap();
        assert_eq!(block.transactions, vec![reward]);
        assert_eq!(block.previous_hash, tip_hash);
        assert!(ledger.pending.is_empty());
    }

    #[test]
    fn replace_chain_swaps_wholesale() {
        let mut ledger = Ledger::new();
        ledger.append(1).unwrap();

        let mut other = Ledger::new();
        other.append(2).unwrap();
        other.append(3).unwrap();

        ledger.replace_chain(other.chain.clone());
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.chain, other.chain);
    }
}
