//! Financials API module

mod handler;

pub use handler::PreviewRequest;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/financials", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/preview", post(handler::preview))
}
