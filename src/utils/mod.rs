pub mod app_error;
pub mod authentication;
pub mod password;
pub mod post;
pub mod sanitize;
pub mod seed;
pub mod token;
