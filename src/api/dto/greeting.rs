//! Responsibility
//! - response body for GET / (serialization shape only, no logic)

use serde::Serialize;

/// Body of `GET /`. `pod` serializes as `null` when the process has no
/// pod name assigned.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub service: &'static str,
    pub pod: Option<String>,
    pub time: String,
}
