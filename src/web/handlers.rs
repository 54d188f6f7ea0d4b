//! Protocol dispatch for the PassKit web-service surface.
//!
//! # Responsibilities
//! - Split the wildcard capture into path segments
//! - Match the fixed `v1/{passes,devices,log}` table
//! - Enforce shape, method, auth, and body rules before any backend call
//! - Map backend results onto HTTP responses
//!
//! # Design Decisions
//! - One wildcard route with manual segment matching instead of per-route
//!   registration: a pass path with the wrong segment count must answer
//!   400, not the router's 404
//! - Check order on every endpoint: shape, method, auth, body, backend

use axum::{
    body::Body,
    extract::{Path, State},
    http::{request::Parts, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::service::ServiceResult;
use crate::web::error::ProtocolError;
use crate::web::headers;
use crate::web::AppState;

/// Largest accepted request body for register/log payloads.
const BODY_LIMIT: usize = 1024 * 1024;

/// JSON body of a device registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationPayload {
    push_token: String,
}

/// JSON body of a device log submission.
#[derive(Debug, Deserialize)]
struct LogPayload {
    logs: Vec<String>,
}

/// Entry point for every request under the mount point.
pub(crate) async fn dispatch(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request<Body>,
) -> Response {
    let (parts, body) = request.into_parts();

    tracing::debug!(method = %parts.method, path = %path, "Dispatching web-service request");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let outcome = match segments.as_slice() {
        ["v1", "passes", tail @ ..] => passes(&state, tail, &parts).await,
        ["v1", "devices", tail @ ..] => devices(&state, tail, &parts, body).await,
        ["v1", "log", tail @ ..] => device_log(&state, tail, &parts, body).await,
        _ => Err(ProtocolError::NotFound),
    };

    outcome.unwrap_or_else(|error| error.into_response())
}

/// `GET /v1/passes/{passTypeIdentifier}/{serialNumber}`
async fn passes(state: &AppState, tail: &[&str], parts: &Parts) -> Result<Response, ProtocolError> {
    if parts.method != Method::GET {
        return Err(ProtocolError::MethodNotAllowed);
    }
    let &[pass_type_identifier, serial_number] = tail else {
        return Err(ProtocolError::BadPath);
    };
    let token =
        headers::authentication_token(&parts.headers).ok_or(ProtocolError::Unauthorized)?;
    let if_modified_since = headers::if_modified_since(&parts.headers);

    let result = state
        .service
        .latest_pass(pass_type_identifier, serial_number, token, if_modified_since)
        .await;

    match result {
        Ok(result) => Ok(service_response(result)),
        Err(error) => {
            tracing::error!(error = %error, "Backend latest_pass failed");
            Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

/// Dispatch the two shapes under `/v1/devices`.
async fn devices(
    state: &AppState,
    tail: &[&str],
    parts: &Parts,
    body: Body,
) -> Result<Response, ProtocolError> {
    match *tail {
        [device_library_identifier, "registrations", pass_type_identifier] => {
            registrations(state, device_library_identifier, pass_type_identifier, parts).await
        }
        [device_library_identifier, "registrations", pass_type_identifier, serial_number] => {
            registration(
                state,
                device_library_identifier,
                pass_type_identifier,
                serial_number,
                parts,
                body,
            )
            .await
        }
        _ => Err(ProtocolError::BadPath),
    }
}

/// `GET .../registrations/{passTypeIdentifier}[?passesUpdatedSince=tag]`
///
/// Unauthenticated per the protocol: devices do not send the token here.
async fn registrations(
    state: &AppState,
    device_library_identifier: &str,
    pass_type_identifier: &str,
    parts: &Parts,
) -> Result<Response, ProtocolError> {
    if parts.method != Method::GET {
        return Err(ProtocolError::MethodNotAllowed);
    }

    let passes_updated_since = parts.uri.query().and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(name, _)| name == "passesUpdatedSince")
            .map(|(_, value)| value.into_owned())
    });

    let result = state
        .service
        .registrations(
            device_library_identifier,
            pass_type_identifier,
            passes_updated_since.as_deref(),
        )
        .await;

    match result {
        Ok(result) => Ok(service_response(result)),
        Err(error) => {
            tracing::error!(error = %error, "Backend registrations failed");
            Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

/// `POST|DELETE .../registrations/{passTypeIdentifier}/{serialNumber}`
async fn registration(
    state: &AppState,
    device_library_identifier: &str,
    pass_type_identifier: &str,
    serial_number: &str,
    parts: &Parts,
    body: Body,
) -> Result<Response, ProtocolError> {
    if parts.method != Method::POST && parts.method != Method::DELETE {
        return Err(ProtocolError::MethodNotAllowed);
    }
    let token =
        headers::authentication_token(&parts.headers).ok_or(ProtocolError::Unauthorized)?;

    let status = if parts.method == Method::POST {
        let payload: RegistrationPayload = read_json(body).await?;
        state
            .service
            .register_device(
                device_library_identifier,
                pass_type_identifier,
                serial_number,
                token,
                &payload.push_token,
            )
            .await
    } else {
        state
            .service
            .unregister_device(
                device_library_identifier,
                pass_type_identifier,
                serial_number,
                token,
            )
            .await
    };

    match status {
        Ok(status) => Ok(status.into_response()),
        Err(error) => {
            tracing::error!(error = %error, "Backend device registration failed");
            Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

/// `POST /v1/log`
async fn device_log(
    state: &AppState,
    tail: &[&str],
    parts: &Parts,
    body: Body,
) -> Result<Response, ProtocolError> {
    if !tail.is_empty() {
        return Err(ProtocolError::BadPath);
    }
    if parts.method != Method::POST {
        return Err(ProtocolError::MethodNotAllowed);
    }

    let payload: LogPayload = read_json(body).await?;

    if let Err(error) = state.service.log(payload.logs).await {
        tracing::error!(error = %error, "Backend log failed");
        return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
    }
    Ok(StatusCode::OK.into_response())
}

/// Translate a backend result into an HTTP response.
///
/// A 200 without a body is a backend contract violation; fail loud so the
/// bug surfaces in the hosting pipeline instead of as an empty 200.
fn service_response(result: ServiceResult) -> Response {
    match (result.status, result.body) {
        (StatusCode::OK, Some(body)) => Json(body).into_response(),
        (StatusCode::OK, None) => panic!("backend returned 200 without a body"),
        (status, _) => status.into_response(),
    }
}

/// Read and deserialize a JSON request body, capped at [`BODY_LIMIT`].
async fn read_json<T: serde::de::DeserializeOwned>(body: Body) -> Result<T, ProtocolError> {
    let bytes = axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|_| ProtocolError::BadBody)?;
    serde_json::from_slice(&bytes).map_err(|_| ProtocolError::BadBody)
}
