use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ChainResponse};

/// Get the full chain. Peers hit this same endpoint during consensus
/// resolution, so the shape must stay in sync with `consensus::RemoteChain`.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: ledger.len(),
        chain: &ledger.chain,
    };
    HttpResponse::Ok().json(resp)
}
