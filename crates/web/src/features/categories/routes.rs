use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::handlers::{get_catalog, get_catalog_admin, update_prices};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/category-prices", get(get_catalog_admin))
        .route("/admin/category-prices", put(update_prices))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/categories", get(get_catalog))
        .merge(admin)
}
