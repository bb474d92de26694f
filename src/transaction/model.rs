use serde::{Deserialize, Serialize};

use crate::blockchain::REWARD_SENDER;

/// A transfer staged for inclusion in the next mined block.
///
/// Amounts are not checked for sufficiency: the node keeps no balances.
/// `team` is an opaque label carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
    pub team: String,
}

impl Transaction {
    pub fn new(sender: String, receiver: String, amount: u64, team: String) -> Self {
        Self {
            sender,
            receiver,
            amount,
            team,
        }
    }

    /// Mining rewards are issued from the reserved `"0"` sender.
    pub fn is_reward(&self) -> bool {
        self.sender == REWARD_SENDER
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;

    #[test]
    fn reward_uses_reserved_sender() {
        let reward = Transaction::new("0".into(), "miner".into(), 1, "none".into());
        assert!(reward.is_reward());

        let transfer = Transaction::new("alice".into(), "bob".into(), 5, "home".into());
        assert!(!transfer.is_reward());
    }
}
