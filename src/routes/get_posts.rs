use std::sync::Arc;

use axum::{extract::State, Json};
use axum_macros::debug_handler;

use crate::{
    structs::post::Post,
    utils::{app_error::AppError, post::sanitize_post},
    AppState,
};

#[debug_handler]
pub async fn get_posts_route(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Post>>, AppError> {
    let posts = app_state
        .repository
        .list_posts()
        .await?
        .into_iter()
        .map(sanitize_post)
        .collect();

    Ok(Json(posts))
}
