pub mod access_token;
pub mod error_detail;
pub mod login_user;
pub mod post;
pub mod user;
