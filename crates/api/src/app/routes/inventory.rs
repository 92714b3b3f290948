use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use minimarket_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/reception/:id", post(receive_stock))
        .route("/withdrawal/:id", post(withdraw_stock))
        .route("/value-report", get(value_report))
        .route("/alerts", get(low_stock_alerts))
}

/// Which way a stock movement goes.
#[derive(Debug, Clone, Copy)]
enum Movement {
    Reception,
    Withdrawal,
}

pub async fn receive_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    query: Result<Query<dto::QuantityQuery>, QueryRejection>,
) -> axum::response::Response {
    move_stock(&services, Movement::Reception, id, query)
}

pub async fn withdraw_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    query: Result<Query<dto::QuantityQuery>, QueryRejection>,
) -> axum::response::Response {
    move_stock(&services, Movement::Withdrawal, id, query)
}

fn move_stock(
    services: &AppServices,
    movement: Movement,
    id: String,
    query: Result<Query<dto::QuantityQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(dto::QuantityQuery { quantity }) = match query {
        Ok(q) => q,
        Err(rej) => return errors::query_rejection_to_response(rej),
    };
    let id = match ProductId::new(id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let result = match movement {
        Movement::Reception => services.ledger.receive_stock(&id, quantity),
        Movement::Withdrawal => services.ledger.withdraw_stock(&id, quantity),
    };

    match result {
        Ok(p) => {
            tracing::info!(
                product_id = %id,
                ?movement,
                quantity,
                stock = p.stock_quantity(),
                "stock moved"
            );
            (StatusCode::OK, Json(p)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn value_report(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.ledger.valuation_report())).into_response()
}

pub async fn low_stock_alerts(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::LowStockQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rej) => return errors::query_rejection_to_response(rej),
    };
    let limit = query.limit.unwrap_or(services.low_stock_limit);
    (StatusCode::OK, Json(services.ledger.low_stock(limit))).into_response()
}
