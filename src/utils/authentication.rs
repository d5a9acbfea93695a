use tracing::warn;

use super::{app_error::AppError, password::verify_password, token::Token};
use crate::{store::Repository, structs::user::User};

/// Find the account named `username` and check its password.
/// Unknown user and wrong password both give `None`.
pub async fn authenticate(
    repository: &dyn Repository,
    username: &str,
    password: &str,
) -> Result<Option<User>, AppError> {
    let Some(user) = repository.find_user_by_username(username).await? else {
        return Ok(None);
    };

    if !verify_password(password, &user.hashed_password) {
        return Ok(None);
    }

    Ok(Some(user))
}

/// Resolve a bearer token to the account named by its subject
pub async fn resolve_current_user(
    repository: &dyn Repository,
    secret: &[u8],
    token: &str,
) -> Result<User, AppError> {
    let claims = Token::decode(token, secret)?;

    match repository.find_user_by_username(&claims.sub).await? {
        Some(user) => Ok(user),
        None => {
            warn!("Token subject @{} does not exist anymore", claims.sub);
            Err(AppError::InvalidToken)
        }
    }
}
