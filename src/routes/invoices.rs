use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::invoice;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(invoice::show_form))
        .route(
            "/calculate",
            post(invoice::calculate).get(invoice::calculate_redirect),
        )
}
