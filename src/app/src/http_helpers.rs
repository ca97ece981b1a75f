//! HTTP helper functions for Crux Core
//!
//! Response handling for the two HTTP surfaces of the app: the switch itself (answers arrive as
//! [`DeviceResponse`] from the device command) and the assistant API (reached through `crux_http`).

use crux_http::Response;

use crate::commands::device::DeviceResponse;
use crate::types::{DeviceAddress, DeviceError, DeviceSnapshot, DeviceStatus};

pub const STATUS_PATH: &str = "/status";
pub const POWER_ON_PATH: &str = "/on";
pub const POWER_OFF_PATH: &str = "/off";

/// Constructs the device URL for a path.
///
/// # Example
/// ```
/// use foco_core::{http_helpers::device_url, DeviceAddress};
/// let url = device_url(&DeviceAddress::new("192.168.1.45"), "/status");
/// assert_eq!(url, "http://192.168.1.45/status");
/// ```
pub fn device_url(address: &DeviceAddress, path: &str) -> String {
    format!("http://{address}{path}")
}

/// Path of the power command for the requested state
pub fn power_path(on: bool) -> &'static str {
    if on {
        POWER_ON_PATH
    } else {
        POWER_OFF_PATH
    }
}

/// Parse the answer to `GET /status`.
///
/// Only a 200 with a well-formed body counts as success.
pub fn parse_status_response(response: DeviceResponse) -> Result<DeviceSnapshot, DeviceError> {
    match response {
        DeviceResponse::Completed { status: 200, body } => {
            serde_json::from_slice::<DeviceStatus>(&body)
                .map(DeviceSnapshot::from)
                .map_err(|e| DeviceError::Protocol(format!("invalid status body: {e}")))
        }
        DeviceResponse::Completed { status, .. } => Err(DeviceError::Protocol(format!(
            "{STATUS_PATH} returned HTTP {status}"
        ))),
        DeviceResponse::TimedOut => Err(DeviceError::Timeout),
        DeviceResponse::Failed { message } => Err(DeviceError::Network(message)),
    }
}

/// Check the answer to a command (`/on`, `/off`, `/config`) and return its text body.
pub fn check_command_response(path: &str, response: DeviceResponse) -> Result<String, DeviceError> {
    let reason = match response {
        DeviceResponse::Completed { status: 200, body } => {
            return Ok(String::from_utf8_lossy(&body).trim().to_string());
        }
        DeviceResponse::Completed { status, .. } => format!("HTTP {status}"),
        DeviceResponse::TimedOut => "timed out".to_string(),
        DeviceResponse::Failed { message } => message,
    };

    Err(DeviceError::Command {
        path: path.to_string(),
        reason,
    })
}

/// Validates HTTP response.
///
/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts error message from HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) if !body.is_empty() => match String::from_utf8(body) {
            Ok(msg) => format!("{action} failed: HTTP {status}: {msg}"),
            Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
        },
        _ => format!("{action} failed: HTTP {status} (Empty body)"),
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Map a transport error of `crux_http` to a message
pub fn map_http_error(action: &str, error: crux_http::HttpError) -> String {
    format!("{action} failed: {error}")
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Handle request creation error - sets error message and returns render command
///
/// This is used when building an HTTP request fails (e.g., JSON serialization error).
pub fn handle_request_error<M, E>(
    model: &mut M,
    action: &str,
    error: impl std::fmt::Display,
) -> crux_core::Command<crate::Effect, E>
where
    M: crate::model::ModelErrorHandler,
    E: Send + 'static,
{
    model.set_error(format!("Failed to create {action} request: {error}"));
    crux_core::render::render()
}
