use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use minimarket_catalog::StoreError;
use minimarket_core::DomainError;

/// HTTP status for a domain failure.
pub fn domain_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::DuplicateId(_) | DomainError::InvalidField { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::InvalidQuantity(_) | DomainError::InsufficientStock { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    let status = match &err {
        StoreError::Domain(e) => domain_status(e),
        StoreError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %err, "catalog storage failure");
    } else {
        tracing::warn!(kind = err.kind(), error = %err, "request rejected");
    }

    json_error(status, err.kind(), err.to_string())
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    store_error_to_response(StoreError::Domain(err))
}

pub fn json_rejection_to_response(rej: JsonRejection) -> axum::response::Response {
    tracing::warn!(error = %rej, "invalid request body");
    json_error(rej.status(), "invalid_body", rej.body_text())
}

pub fn query_rejection_to_response(rej: QueryRejection) -> axum::response::Response {
    tracing::warn!(error = %rej, "invalid query string");
    json_error(rej.status(), "invalid_query", rej.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimarket_catalog::RepositoryError;

    #[test]
    fn domain_errors_map_to_documented_statuses() {
        assert_eq!(domain_status(&DomainError::duplicate_id("P1")), StatusCode::BAD_REQUEST);
        assert_eq!(
            domain_status(&DomainError::invalid_field("unitPrice", "zero")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(domain_status(&DomainError::not_found("P1")), StatusCode::NOT_FOUND);
        assert_eq!(
            domain_status(&DomainError::invalid_quantity("0")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            domain_status(&DomainError::InsufficientStock { requested: 2, available: 1 }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn storage_errors_are_server_errors() {
        let res = store_error_to_response(RepositoryError::Io("disk full".into()).into());
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
