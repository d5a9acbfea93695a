//! Persistence behind the [`Repository`] trait.
//!
//! [`PgRepository`] is the production store. [`MemoryRepository`] keeps the
//! same invariants (unique usernames, posts must reference an existing
//! account) without a database and backs the tests.

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

use async_trait::async_trait;

use crate::structs::{post::Post, user::User};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error : {0}")]
    Database(#[from] sqlx::Error),
    #[error("username `{0}` already used")]
    UsernameTaken(String),
    #[error("no account with id {0}")]
    UnknownAuthor(i64),
}

#[async_trait]
pub trait Repository: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn insert_user(
        &self,
        username: &str,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, StoreError>;

    /// Insert a post, the store assigns `id` and `created_at`
    async fn insert_post(
        &self,
        author_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Post, StoreError>;

    /// Every post, oldest first
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;
}
