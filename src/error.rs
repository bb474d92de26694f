use thiserror::Error;

/// Failures surfaced by the ledger core. Peer-fetch failures during
/// consensus resolution are swallowed per peer and never reach this enum.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeError {
    /// Peer address with neither a network location nor a usable path.
    #[error("invalid peer address: {0:?}")]
    InvalidAddress(String),

    /// Required request field absent from the payload.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The ledger has no blocks. Unreachable after construction, since the
    /// genesis block is created before the ledger is ever handed out.
    #[error("ledger has no blocks")]
    EmptyChain,
}
