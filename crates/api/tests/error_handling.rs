//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use labman_api::error::AppError;
use labman_core::statistics::{ReportError, ReportKind};

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn report_error_returns_500_with_message_verbatim() {
    let err = AppError::Report(ReportError {
        report: ReportKind::Budget,
        message: "no such table: project_organizations".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "REPORT_ERROR");
    assert_eq!(
        json["error"],
        "Error getting budget statistics: no such table: project_organizations"
    );
}

#[tokio::test]
async fn not_found_returns_404() {
    let (status, json) = error_to_response(AppError::NotFound("Not found".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Not found");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("Handler panicked: index out of bounds".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[test]
fn report_error_converts_into_report_variant() {
    let err: AppError = ReportError {
        report: ReportKind::Timeline,
        message: "disk I/O error".into(),
    }
    .into();
    assert_matches!(err, AppError::Report(ReportError { report: ReportKind::Timeline, .. }));
    assert_eq!(err.to_string(), "Error getting timeline data: disk I/O error");
}
