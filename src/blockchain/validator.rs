use log::debug;

use super::{Block, pow};

/// Walk a candidate chain and check every link: hash linkage first, then
/// Proof-of-Work. Rejects on the first broken link; a single bad pair
/// invalidates the whole candidate.
///
/// Genesis is trusted unconditionally, so empty and single-block chains are
/// trivially valid.
pub fn is_valid_chain(chain: &[Block]) -> bool {
    for pair in chain.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        let previous_hash = previous.hash();

        if current.previous_hash != previous_hash {
            debug!(
                "VALIDATOR - block #{} does not link to the hash of block #{}",
                current.index, previous.index
            );
            return false;
        }

        if !pow::verify(previous.proof, current.proof, &previous_hash) {
            debug!("VALIDATOR - block #{} carries an invalid proof", current.index);
            return false;
        }
    }
    true
}
