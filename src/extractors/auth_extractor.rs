use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    headers::{authorization::Bearer, Authorization},
    http::request::Parts,
    TypedHeader,
};
use tracing::warn;

use crate::{
    structs::user::User,
    utils::{app_error::AppError, authentication::resolve_current_user},
    AppState,
};

/// The account behind the `Authorization: Bearer` header of the request
pub struct CurrentUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = Arc::<AppState>::from_ref(state);
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    warn!("{} {} {e}", parts.method, parts.uri);
                    AppError::TokenMissing
                })?;

        let user = resolve_current_user(
            app_state.repository.as_ref(),
            &app_state.secret_key,
            bearer.token(),
        )
        .await?;

        Ok(CurrentUser(user))
    }
}
