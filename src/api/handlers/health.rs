//! Responsibility
//! - GET /ready (readiness probe) and GET /healthy (liveness probe)
//!
//! Neither performs an actual check: the process being able to answer HTTP
//! is the whole signal. Probe consumers match the bodies byte-for-byte, so
//! the trailing space in "ok " stays.

pub async fn ready() -> &'static str {
    "ready"
}

pub async fn healthy() -> &'static str {
    "ok "
}
