use axum::Router;

pub mod catalog;
pub mod inventory;
pub mod system;

/// Router for all catalog and inventory endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/inventory", inventory::router())
}
