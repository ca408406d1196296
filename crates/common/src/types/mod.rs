use serde::Serialize;

/// Health check payload returned by `/health`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Health {
    pub status: &'static str,
}
