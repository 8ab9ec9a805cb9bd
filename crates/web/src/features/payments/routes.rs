use axum::{Router, routing::post};

use super::handlers::{create_preference, verify_payment, webhook};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments/create-preference", post(create_preference))
        .route("/payments/verify/:registration_id", post(verify_payment))
        .route("/payments/webhook", post(webhook))
}
