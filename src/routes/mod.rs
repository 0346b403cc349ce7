pub mod invoices;

use axum::{routing::get, Router};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(invoices::routes())
        .route("/health", get(health_check))
}

async fn health_check() -> &'static str {
    "OK"
}
