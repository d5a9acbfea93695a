use std::sync::Arc;

use axum::{extract::State, Json};
use axum_macros::debug_handler;
use tracing::{info, warn};

use crate::structs::access_token::AccessToken;
use crate::structs::login_user::LoginUser;
use crate::utils::app_error::AppError;
use crate::utils::authentication::authenticate;
use crate::utils::token::Token;
use crate::AppState;

#[debug_handler]
pub async fn login_route(
    State(app_state): State<Arc<AppState>>,
    Json(login_user): Json<LoginUser>,
) -> Result<Json<AccessToken>, AppError> {
    let Some(user) = authenticate(
        app_state.repository.as_ref(),
        &login_user.username,
        &login_user.password,
    )
    .await?
    else {
        warn!("Failed login attempt for @{}", login_user.username);
        return Err(AppError::IncorrectCredentials);
    };

    let access_token = Token::create(
        &user.username,
        app_state.token_lifetime,
        &app_state.secret_key,
    )?;

    info!("User @{} logged in", user.username);
    Ok(Json(AccessToken::bearer(access_token)))
}
