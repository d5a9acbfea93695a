use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use hyper::StatusCode;
use tracing::warn;

use crate::{store::StoreError, structs::error_detail::ErrorDetail};

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    //Token errors
    TokenMissing,
    InvalidToken,
    ExpiredToken,
    //Login route errors
    IncorrectCredentials,
    //Publish post route errors
    MissingPostData,
    InternalServerError,
}

impl AppError {
    pub fn detail(&self) -> &'static str {
        match self {
            AppError::TokenMissing => "Not authenticated",
            AppError::InvalidToken => "Could not validate credentials",
            AppError::ExpiredToken => "Token has expired",
            AppError::IncorrectCredentials => "Incorrect username or password",
            AppError::MissingPostData => "Title and content are required",
            AppError::InternalServerError => "",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::TokenMissing
            | AppError::InvalidToken
            | AppError::ExpiredToken
            | AppError::IncorrectCredentials => StatusCode::UNAUTHORIZED,
            AppError::MissingPostData => StatusCode::BAD_REQUEST,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = self.detail();

        if body.is_empty() {
            return status_code.into_response();
        }

        let body = Json(ErrorDetail {
            detail: body.to_string(),
        });

        if status_code == StatusCode::UNAUTHORIZED {
            return (status_code, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }

        (status_code, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        warn!("Storage error : {e}");
        AppError::InternalServerError
    }
}
