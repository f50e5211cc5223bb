use crate::modules::user;
use crate::modules::user::repository::User;
use crate::types::Context;
use crate::utils::identity::IdentityClaims;
use axum::async_trait;
use axum::extract::{Extension, FromRequestParts};
use axum::http::{self, request::Parts, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, RequestPartsExt};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

enum Error {
    MissingToken,
    InvalidToken,
    UnexpectedError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "error": "No token provided" })),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::FORBIDDEN,
                Json(json!({ "success": false, "error": "Invalid or expired token" })),
            )
                .into_response(),
            Self::UnexpectedError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to verify identity" })),
            )
                .into_response(),
        }
    }
}

fn get_token_from_header(header: &str) -> Result<&str, Error> {
    header
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
        .ok_or(Error::MissingToken)
}

async fn authenticate(ctx: Arc<Context>, parts: &mut Parts) -> Result<(IdentityClaims, User), Error> {
    let headers = parts
        .extract::<HeaderMap>()
        .await
        .map_err(|_| Error::UnexpectedError)?;

    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(Error::MissingToken)?;

    let token = get_token_from_header(auth_header)?;
    let claims = ctx
        .identity
        .verify(token)
        .map_err(|_| Error::InvalidToken)?;

    let user = user::repository::upsert(
        &ctx.db_conn.pool,
        claims.sub.clone(),
        claims.email.clone(),
    )
    .await
    .map_err(|_| Error::UnexpectedError)?;

    Ok((claims, user))
}

/// Any authenticated caller.
#[derive(Serialize, Clone)]
pub struct Auth {
    pub claims: IdentityClaims,
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|_| Error::UnexpectedError.into_response())?;

        authenticate(ctx, parts)
            .await
            .map(|(claims, user)| Self { claims, user })
            .map_err(IntoResponse::into_response)
    }
}

/// Authenticated caller holding the admin claim. The token claim is the
/// fast path; the users table is re-checked for tokens issued before the
/// claim was granted.
#[derive(Serialize, Clone)]
pub struct AdminAuth {
    pub claims: IdentityClaims,
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|_| Error::UnexpectedError.into_response())?;

        let (claims, user) = authenticate(ctx, parts)
            .await
            .map_err(IntoResponse::into_response)?;

        if !claims.admin && !user::repository::is_admin(&user) {
            return Err((
                StatusCode::FORBIDDEN,
                Json(json!({ "success": false, "error": "Access denied. Admin only." })),
            )
                .into_response());
        }

        Ok(Self { claims, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_token_from_a_bearer_header() {
        let token = match get_token_from_header("Bearer abc.def.ghi") {
            Ok(token) => token,
            Err(_) => panic!("expected a token"),
        };
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn rejects_a_header_without_a_token() {
        assert!(get_token_from_header("Bearer").is_err());
        assert!(get_token_from_header("Bearer ").is_err());
    }
}
