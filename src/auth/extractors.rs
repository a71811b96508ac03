use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::{
    auth::{jwt::JwtKeys, repo::User},
    error::ApiError,
    state::AppState,
};

/// Resolves the bearer token on a request to the user it names. Any failure
/// along the way (missing header, bad scheme, bad signature, expired token,
/// unknown user id) collapses to the same 401 so callers cannot probe which
/// step rejected them.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::InvalidCredentials)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or(ApiError::InvalidCredentials)?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::InvalidCredentials
        })?;

        let user = User::find_by_id(&state.db, claims.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = claims.id, "token names a missing user");
                ApiError::InvalidCredentials
            })?;

        Ok(AuthUser(user))
    }
}
