use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use super::{Repository, StoreError};
use crate::structs::{post::Post, user::User};

#[derive(Default)]
struct Tables {
    accounts: Vec<User>,
    posts: Vec<Post>,
}

/// Repository kept in process memory, ids are assigned from 1 like `BIGSERIAL`
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .accounts
            .iter()
            .find(|account| account.username == username)
            .cloned())
    }

    async fn insert_user(
        &self,
        username: &str,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.accounts.iter().any(|account| account.username == username) {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }
        let user = User {
            id: tables.accounts.len() as i64 + 1,
            username: username.to_string(),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
        };
        tables.accounts.push(user.clone());
        Ok(user)
    }

    async fn insert_post(
        &self,
        author_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Post, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.accounts.iter().any(|account| account.id == author_id) {
            return Err(StoreError::UnknownAuthor(author_id));
        }
        let post = Post {
            id: tables.posts.len() as i64 + 1,
            title: title.to_string(),
            content: content.to_string(),
            author_id,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.tables.read().await.posts.clone())
    }
}
