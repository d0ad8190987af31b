//! Responsibility
//! - GET / (JSON greeting with pod metadata)
//!
//! POD_NAME is read from the process environment on every request rather
//! than once at startup. The value cannot change at runtime, so this only
//! matters for tests, but it keeps the handler free of captured state.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::api::dto::greeting::GreetingResponse;
use crate::config;

const GREETING: &str = "hello from a container";
const SERVICE_NAME: &str = "hello-node";

pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING,
        service: SERVICE_NAME,
        pod: std::env::var(config::POD_NAME).ok(),
        // Millisecond precision with a trailing Z, e.g. 2026-08-28T12:34:56.789Z
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    #[tokio::test]
    async fn greeting_has_constant_message_and_service() {
        let Json(body) = greeting().await;
        assert_eq!(body.message, "hello from a container");
        assert_eq!(body.service, "hello-node");
    }

    #[tokio::test]
    async fn time_is_rfc3339_and_non_decreasing() {
        let Json(first) = greeting().await;
        let Json(second) = greeting().await;

        let t1 = DateTime::parse_from_rfc3339(&first.time).expect("first time parses");
        let t2 = DateTime::parse_from_rfc3339(&second.time).expect("second time parses");
        assert!(t2 >= t1);
        assert!(first.time.ends_with('Z'));
    }

    // Set and unset cases live in one test body: cargo runs tests in
    // parallel and POD_NAME is process-global.
    #[tokio::test]
    async fn pod_field_tracks_environment() {
        unsafe { std::env::set_var(config::POD_NAME, "pod-abc123") };
        let Json(with_pod) = greeting().await;
        assert_eq!(with_pod.pod.as_deref(), Some("pod-abc123"));

        unsafe { std::env::remove_var(config::POD_NAME) };
        let Json(without_pod) = greeting().await;
        assert_eq!(without_pod.pod, None);
    }
}
