use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{attendance_stats, check_in, scan_qr};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/check-in", post(check_in))
        .route("/admin/attendance", get(attendance_stats))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new().route("/qr/scan", post(scan_qr)).merge(admin)
}
