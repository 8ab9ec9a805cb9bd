use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_coupon, delete_coupon, list_coupons, update_coupon, validate_coupon};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/coupons", get(list_coupons))
        .route("/admin/coupons", post(create_coupon))
        .route("/admin/coupons/:id", put(update_coupon))
        .route("/admin/coupons/:id", delete(delete_coupon))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/coupons/validate", post(validate_coupon))
        .merge(admin)
}
