use std::sync::Arc;

use axum::{extract::State, Json};
use axum_macros::debug_handler;
use tracing::info;

use crate::{
    extractors::auth_extractor::CurrentUser,
    structs::post::{NewPost, Post},
    utils::{app_error::AppError, post::check_new_post_data, sanitize::sanitize},
    AppState,
};

#[debug_handler]
pub async fn publish_post_route(
    State(app_state): State<Arc<AppState>>,
    CurrentUser(auth_user): CurrentUser,
    Json(post): Json<NewPost>,
) -> Result<Json<Post>, AppError> {
    let title = sanitize(&post.title);
    let content = sanitize(&post.content);
    let (title, content) = (title.trim(), content.trim());

    check_new_post_data(auth_user.id, title, content)?;

    let post = app_state
        .repository
        .insert_post(auth_user.id, title, content)
        .await?;

    info!("User @{} published post {}", auth_user.username, post.id);
    Ok(Json(post))
}
