use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/plans", post(handlers::plan::create_plan))
        .route(
            "/api/plans/:id",
            get(handlers::plan::get_plan).delete(handlers::plan::delete_plan),
        )
        .route(
            "/api/plans/:id/blocks",
            post(handlers::blocks::reconcile_blocks),
        )
        .route(
            "/api/plans/:id/blocks/:block_id",
            put(handlers::blocks::replace_block).delete(handlers::blocks::delete_block),
        )
}
