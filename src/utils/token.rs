use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::app_error::AppError;

/// Claims of a signed bearer token
#[derive(Debug, Serialize, Deserialize)]
pub struct Token {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

impl Token {
    /// Create a HS256 token for `sub` which expires after `exp_in`
    pub fn create(sub: &str, exp_in: Duration, secret: &[u8]) -> Result<String, AppError> {
        let now = Utc::now();
        let Some(exp) = now.checked_add_signed(exp_in) else {
            warn!("Token expiration for `{sub}` is out of range : {exp_in}");
            return Err(AppError::InternalServerError);
        };
        let claims = Token {
            sub: sub.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| {
            warn!("Error creating token for `{sub}` (expiration : {exp_in}) : {e}");
            AppError::InternalServerError
        })
    }

    /// Check the signature and expiry of `token` and return its claims
    pub fn decode(token: &str, secret: &[u8]) -> Result<Token, AppError> {
        decode::<Token>(
            token,
            &DecodingKey::from_secret(secret),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => {
                warn!("Expired token");
                AppError::ExpiredToken
            }
            _ => {
                warn!("Error decoding token : {e}");
                AppError::InvalidToken
            }
        })
    }
}
