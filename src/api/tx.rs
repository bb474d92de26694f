use actix_web::{HttpResponse, Responder, post, web};
use log::{info, warn};

use super::models::{AppState, NewTxRequest, NewTxResponse};
use crate::error::NodeError;
use crate::transaction::Transaction;

/// Stage a new transaction for the next mined block. All four fields are
/// required; the sender's funds are not checked (no balances exist).
#[post("/transactions/")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let tx = match build_transaction(body.into_inner()) {
        Ok(tx) => tx,
        Err(e) => {
            warn!("POST /transactions/ - rejected: {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    if tx.is_reward() {
        warn!("POST /transactions/ - staging a transaction from the reserved reward sender");
    }

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        match ledger.stage_transaction(tx) {
            Ok(index) => index,
            Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
        }
    };

    info!("TX - staged transaction for block #{index}");
    HttpResponse::Created().json(NewTxResponse {
        message: format!("Transaction will be added to Block {index}"),
    })
}

fn build_transaction(req: NewTxRequest) -> Result<Transaction, NodeError> {
    let sender = req.sender.ok_or(NodeError::MissingField("sender"))?;
    let receiver = req.receiver.ok_or(NodeError::MissingField("receiver"))?;
    let amount = req.amount.ok_or(NodeError::MissingField("amount"))?;
    let team = req.team.ok_or(NodeError::MissingField("team"))?;
    Ok(Transaction::new(sender, receiver, amount, team))
}

#[cfg(test)]
mod tests {
    use super::build_transaction;
    use crate::api::models::NewTxRequest;
    use crate::error::NodeError;

    fn full_request() -> NewTxRequest {
        NewTxRequest {
            sender: Some("0".into()),
            receiver: Some("X".into()),
            amount: Some(1),
            team: Some("home".into()),
        }
    }

    #[test]
    fn all_fields_present_builds_transaction() {
        let tx = build_transaction(full_request()).unwrap();
        assert_eq!(tx.sender, "0");
        assert_eq!(tx.receiver, "X");
        assert_eq!(tx.amount, 1);
        assert_eq!(tx.team, "home");
    }

    #[test]
    fn each_missing_field_is_named() {
        let mut req = full_request();
        req.team = None;
        assert_eq!(
            build_transaction(req).unwrap_err(),
            NodeError::MissingField("team")
        );

        let mut req = full_request();
        req.amount = None;
        assert_eq!(
            build_transaction(req).unwrap_err(),
            NodeError::MissingField("amount")
        );
    }
}
