//! Label print API.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use base64::{Engine, engine::general_purpose};
use serde_json::{Value, json};

use crate::app::SharedState;
use crate::error::PrintError;
use crate::request::PrintRequest;
use crate::services::render_job;

use super::{err_json, ok_json};

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn map_print_error(err: PrintError) -> (StatusCode, Json<Value>) {
    let status = err.status_code();
    if status >= 500 {
        tracing::error!("Print job failed: {err}");
    } else {
        tracing::warn!("Rejected print job: {err}");
    }
    err_json(status, &err.to_string())
}

fn map_json_rejection(rejection: JsonRejection) -> (StatusCode, Json<Value>) {
    let message = rejection.body_text();
    tracing::warn!("Rejected print body: {message}");
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return err_json(413, &message);
    }
    err_json(400, &message)
}

/// POST /api/mobile/print – Render a label and return the TSPL stream as Base64
pub async fn print_label(
    State(state): State<SharedState>,
    payload: Result<Json<PrintRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload.map_err(map_json_rejection)?;
    let outcome = render_job(request, state.config())
        .await
        .map_err(map_print_error)?;

    Ok(ok_json(json!({
        "labelType": outcome.label_type.as_str(),
        "dpi": outcome.dpi,
        "widthPx": outcome.width_px,
        "heightPx": outcome.height_px,
        "widthBytes": outcome.width_bytes,
        "copies": outcome.copies,
        "byteLength": outcome.payload.len(),
        "tspl": general_purpose::STANDARD.encode(&outcome.payload),
    })))
}

/// POST /api/mobile/print/raw – Render a label and return the raw TSPL bytes
pub async fn print_label_raw(
    State(state): State<SharedState>,
    payload: Result<Json<PrintRequest>, JsonRejection>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let Json(request) = payload.map_err(map_json_rejection)?;
    let outcome = render_job(request, state.config())
        .await
        .map_err(map_print_error)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream"),
            (header::HeaderName::from_static("x-label-type"), outcome.label_type.as_str()),
        ],
        outcome.payload,
    )
        .into_response())
}
