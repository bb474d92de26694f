pub mod block;
pub mod model;
pub mod pow;
pub mod validator;

pub use block::Block;
pub use model::Ledger;

/// Proof-of-Work difficulty: leading zero hex digits required of a guess hash.
pub const DIFFICULTY: usize = 4;

/// Proof baked into the genesis block (never verified, genesis is trusted).
pub const GENESIS_PROOF: u64 = 100;

/// Sentinel previous_hash of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Reserved sender address for mining-reward issuance.
pub const REWARD_SENDER: &str = "0";

/// Coins granted per mined block.
pub const REWARD_AMOUNT: u64 = 1;
