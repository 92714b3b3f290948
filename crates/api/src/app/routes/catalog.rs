use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use minimarket_catalog::{Product, ProductDraft};
use minimarket_core::{Entity, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/create", post(create_product))
        .route("/delete/:id", delete(delete_product))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.catalog.list_products())).into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> axum::response::Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection_to_response(rej),
    };

    let product = match Product::new(draft) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.register_product(product) {
        Ok(p) => {
            tracing::info!(product_id = %p.id(), "product registered");
            (StatusCode::OK, Json(p)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match ProductId::new(id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.get_product(&id) {
        Ok(p) => (StatusCode::OK, Json(p)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match ProductId::new(id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.delete_product(&id) {
        Ok(removed) => {
            tracing::info!(
                product_id = %id,
                discarded_stock = removed.stock_quantity(),
                "product deleted"
            );
            (StatusCode::OK, Json(dto::DeletedResponse::new(id))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
