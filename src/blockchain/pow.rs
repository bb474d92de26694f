use sha2::{Digest, Sha256};

use super::DIFFICULTY;

/// Check a Proof-of-Work guess: SHA-256 of `{previous_hash}{previous_proof}{proof}`
/// must start with `DIFFICULTY` zero hex digits. Cheap by design; the cost
/// lives entirely in `solve`.
pub fn verify(previous_proof: u64, proof: u64, previous_hash: &str) -> bool {
    let guess = format!("{previous_hash}{previous_proof}{proof}");
    let digest = hex::encode(Sha256::digest(guess.as_bytes()));
    digest.as_bytes()[..DIFFICULTY].iter().all(|&c| c == b'0')
}

/// Find the smallest proof accepted by `verify` for the given tip.
///
/// Unbounded incrementing search; expected O(16^DIFFICULTY) hash
/// evaluations, and it always terminates for a finite difficulty.
pub fn solve(previous_proof: u64, previous_hash: &str) -> u64 {
    let mut proof = 0;
    while !verify(previous_proof, proof, previous_hash) {
        proof += 1;
    }
    proof
}
