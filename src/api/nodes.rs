use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, RegisterRequest, RegisterResponse, ResolveResponse};
use crate::consensus;

/// Register a list of peer nodes. The whole request is rejected on the
/// first malformed address.
#[post("/nodes/register/")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> impl Responder {
    let Some(nodes) = body.into_inner().nodes else {
        warn!("POST /nodes/register/ - rejected: no node list");
        return HttpResponse::BadRequest().body("Error: Please supply a valid list of nodes");
    };

    let total_nodes = {
        let mut peers = state.peers.lock().expect("mutex poisoned");
        for address in &nodes {
            if let Err(e) = peers.register(address) {
                warn!("POST /nodes/register/ - rejected: {e}");
                return HttpResponse::BadRequest().body(e.to_string());
            }
        }
        peers.list()
    };

    info!(
        "PEERS - registered {} node(s), {} known in total",
        nodes.len(),
        total_nodes.len()
    );
    HttpResponse::Created().json(RegisterResponse {
        message: "New nodes have been added",
        total_nodes,
    })
}

/// Run longest-valid-chain conflict resolution against all known peers.
#[get("/nodes/resolve/")]
pub async fn resolve_conflicts(state: web::Data<AppState>) -> impl Responder {
    let peers = {
        let peers = state.peers.lock().expect("mutex poisoned");
        peers.list()
    };

    let replaced = consensus::resolve_conflicts(&state.ledger, &peers, &state.fetcher).await;

    let chain = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.chain.clone()
    };
    HttpResponse::Ok().json(ResolveResponse {
        message: if replaced {
            "Our chain was replaced"
        } else {
            "Our chain is authoritative"
        },
        replaced,
        chain,
    })
}
