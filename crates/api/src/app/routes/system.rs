use axum::{http::StatusCode, Json};

use crate::app::dto::ServiceInfo;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn banner() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "minimarket API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
