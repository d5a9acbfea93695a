use async_trait::async_trait;
use sqlx::{migrate::MigrateError, PgPool};

use super::{Repository, StoreError};
use crate::structs::{post::Post, user::User};

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, hashed_password FROM account WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert_user(
        &self,
        username: &str,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO account (username, email, hashed_password) VALUES ($1, $2, $3) RETURNING id, username, email, hashed_password",
        )
        .bind(username)
        .bind(email)
        .bind(hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_error) if db_error.is_unique_violation() => {
                StoreError::UsernameTaken(username.to_string())
            }
            e => e.into(),
        })
    }

    async fn insert_post(
        &self,
        author_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Post, StoreError> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO post (title, content, author_id) VALUES ($1, $2, $3) RETURNING id, title, content, author_id, created_at",
        )
        .bind(title)
        .bind(content)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_error) if db_error.is_foreign_key_violation() => {
                StoreError::UnknownAuthor(author_id)
            }
            e => e.into(),
        })
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, author_id, created_at FROM post ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }
}

// These need a Postgres server, run them with
// `DATABASE_URL=postgres://... cargo test -- --ignored`
#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn duplicate_username_is_reported(pool: PgPool) {
        let repository = PgRepository::new(pool);
        repository.insert_user("alice", "alice@example.com", "hash").await.unwrap();

        let err = repository
            .insert_user("alice", "other@example.com", "hash")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UsernameTaken(name) if name == "alice"));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn post_requires_existing_author(pool: PgPool) {
        let repository = PgRepository::new(pool);

        let err = repository.insert_post(42, "title", "content").await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownAuthor(42)));
        assert!(repository.list_posts().await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn inserted_rows_are_read_back(pool: PgPool) {
        let repository = PgRepository::new(pool);
        let author = repository.insert_user("bob", "bob@example.com", "hash").await.unwrap();

        let found = repository.find_user_by_username("bob").await.unwrap().unwrap();
        assert_eq!(found.id, author.id);
        assert_eq!(found.hashed_password, "hash");
        assert!(repository.find_user_by_username("carol").await.unwrap().is_none());

        let first = repository.insert_post(author.id, "first", "one").await.unwrap();
        let second = repository.insert_post(author.id, "second", "two").await.unwrap();
        assert_eq!(first.author_id, author.id);
        assert_eq!(repository.list_posts().await.unwrap(), vec![first, second]);
    }
}
