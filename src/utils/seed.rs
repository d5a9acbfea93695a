use tracing::info;

use super::{app_error::AppError, password::hash_password};
use crate::store::{Repository, StoreError};

pub const TEST_USERNAME: &str = "testuser";
pub const TEST_EMAIL: &str = "test@example.com";
pub const TEST_PASSWORD: &str = "testpassword";

/// Create the development account `testuser` / `testpassword` if it does not exist yet
pub async fn create_test_user(repository: &dyn Repository) -> Result<(), AppError> {
    if repository.find_user_by_username(TEST_USERNAME).await?.is_some() {
        return Ok(());
    }

    let hashed_password = hash_password(TEST_PASSWORD)?;
    match repository
        .insert_user(TEST_USERNAME, TEST_EMAIL, &hashed_password)
        .await
    {
        Ok(_) => {
            info!("Test user created: {TEST_USERNAME} / {TEST_PASSWORD}");
            Ok(())
        }
        // another instance seeded it in the meantime
        Err(StoreError::UsernameTaken(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
