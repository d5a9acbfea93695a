use std::sync::Arc;

use axum::Router;
use blog_service::{
    app, store::MemoryRepository, utils::seed::create_test_user, AppState,
};
use chrono::Duration;

#[allow(dead_code)]
pub const SECRET: &[u8] = b"integration-test-secret";

/// Router over an in-memory repository holding the seeded test account
pub async fn test_app() -> (Router, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::new());
    create_test_user(repository.as_ref()).await.unwrap();

    let app_state = Arc::new(AppState {
        repository: repository.clone(),
        secret_key: SECRET.to_vec(),
        token_lifetime: Duration::minutes(30),
    });

    (app(app_state), repository)
}
