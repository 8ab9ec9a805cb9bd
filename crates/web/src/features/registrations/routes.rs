use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    bulk_delete_registrations, calculate_price, create_registration, get_registration,
    list_registrations, override_registration_status,
};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/registrations", get(list_registrations))
        .route("/registrations", delete(bulk_delete_registrations))
        .route("/registrations/:id/status", put(override_registration_status))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/registrations", post(create_registration))
        .route("/registrations/calculate", post(calculate_price))
        .route("/registrations/:id", get(get_registration))
        .merge(protected)
}
