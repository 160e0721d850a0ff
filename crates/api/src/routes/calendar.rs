use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/plans/:id/grid", get(handlers::calendar::get_grid))
        .route(
            "/api/plans/:id/days/:date",
            get(handlers::calendar::get_day),
        )
}
