//! Business context extraction
//!
//! The authenticating gateway resolves the tenant and attaches it to the
//! request as an extension. For standalone/dev runs the trusted
//! `X-Business-Id` header fills the same role.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shared::error::{AppError, ErrorCode};

/// The business (tenant) a request is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessContext {
    pub business_id: i64,
}

impl<S> FromRequestParts<S> for BusinessContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<BusinessContext>() {
            return Ok(*ctx);
        }

        // Trusted-gateway fallback header
        if let Some(raw) = parts.headers.get("x-business-id") {
            let business_id = raw
                .to_str()
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| {
                    AppError::with_message(
                        ErrorCode::BusinessNotSelected,
                        "Malformed X-Business-Id header",
                    )
                })?;
            return Ok(Self { business_id });
        }

        Err(AppError::new(ErrorCode::BusinessNotSelected))
    }
}
