use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::handlers::{
    get_commission_stats, get_event_payment_config, get_platform_config, list_registrations,
    update_event_payment_config, update_platform_config,
};
use crate::middleware::auth::require_operator;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/superadmin/platform-config", get(get_platform_config))
        .route("/superadmin/platform-config", put(update_platform_config))
        .route("/superadmin/event-mercadopago", get(get_event_payment_config))
        .route("/superadmin/event-mercadopago", put(update_event_payment_config))
        .route("/superadmin/commission-stats", get(get_commission_stats))
        .route("/superadmin/registrations", get(list_registrations))
        .route_layer(middleware::from_fn_with_state(state, require_operator))
}
