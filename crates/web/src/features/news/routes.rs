use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{create_news, delete_news, list_news};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/news", post(create_news))
        .route("/admin/news/:id", delete(delete_news))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new().route("/news", get(list_news)).merge(admin)
}
