use actix_web::{HttpResponse, Responder, get, web};
use log::{debug, info};
use std::time::Instant;

use super::models::{AppState, MineQuery, MineResponse};
use crate::blockchain::{REWARD_AMOUNT, REWARD_SENDER, pow};
use crate::transaction::Transaction;

/// Team label on the reward transaction when the miner does not pick one.
const DEFAULT_REWARD_TEAM: &str = "none";

/// Mine a new block:
/// - Snapshot the tip under a short ledger lock
/// - Solve Proof-of-Work outside any lock (CPU-bound)
/// - Stage the mining reward and append as one locked unit
#[get("/mine/")]
pub async fn mine_block(state: web::Data<AppState>, query: web::Query<MineQuery>) -> impl Responder {
    let (tip_proof, tip_hash) = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        match ledger.last_block() {
            Ok(tip) => (tip.proof, tip.hash()),
            Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
        }
    };

    let t0 = Instant::now();
    let proof = pow::solve(tip_proof, &tip_hash);
    debug!(
        "MINER - found proof {} in {} ms",
        proof,
        t0.elapsed().as_millis()
    );

    let team = query
        .team
        .clone()
        .unwrap_or_else(|| DEFAULT_REWARD_TEAM.to_string());
    let reward = Transaction::new(
        REWARD_SENDER.to_string(),
        state.node_id.clone(),
        REWARD_AMOUNT,
        team,
    );

    let block = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        if let Err(e) = ledger.stage_transaction(reward) {
            return HttpResponse::InternalServerError().body(e.to_string());
        }
        match ledger.append(proof) {
            Ok(block) => block.clone(),
            Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
        }
    };

    info!(
        "MINER - forged block #{} (proof={}, {} tx(s))",
        block.index,
        block.proof,
        block.transactions.len()
    );
    HttpResponse::Ok().json(MineResponse {
        message: "New Block Forged",
        index: block.index,
        transactions: block.transactions,
        proof: block.proof,
        previous_hash: block.previous_hash,
    })
}
