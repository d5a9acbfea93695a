pub mod client;
pub mod config;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod store;
pub mod structs;
pub mod utils;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use chrono::Duration;
use hyper::header::{AUTHORIZATION, CONTENT_TYPE};
use hyper::http::Method;
use tower_http::cors::{Any, CorsLayer};

use middleware::logger_middleware::logger_middleware;
use routes::get_posts::get_posts_route;
use routes::login_route::login_route;
use routes::publish_post::publish_post_route;
use store::Repository;

pub struct AppState {
    pub repository: Arc<dyn Repository>,
    pub secret_key: Vec<u8>,
    pub token_lifetime: Duration,
}

pub fn app(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/auth/login", post(login_route))
        .route("/api/data", get(get_posts_route).post(publish_post_route))
        .layer(cors)
        .layer(axum_middleware::from_fn(logger_middleware))
        .with_state(app_state)
}
