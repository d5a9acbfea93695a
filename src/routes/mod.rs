pub mod get_posts;
pub mod login_route;
pub mod publish_post;
