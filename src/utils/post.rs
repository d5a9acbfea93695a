use tracing::warn;

use super::{app_error::AppError, sanitize::sanitize};
use crate::structs::post::Post;

pub fn check_new_post_data(auth_user_id: i64, title: &str, content: &str) -> Result<(), AppError> {
    if title.is_empty() || content.is_empty() {
        warn!(
            "User {auth_user_id} tried to create a post with an empty title or content ({}/{})",
            title.len(),
            content.len()
        );
        return Err(AppError::MissingPostData);
    }

    Ok(())
}

/// Sanitize the user supplied fields of a stored post before it leaves the server
pub fn sanitize_post(post: Post) -> Post {
    Post {
        title: sanitize(&post.title),
        content: sanitize(&post.content),
        ..post
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(check_new_post_data(1, "", "content"), Err(AppError::MissingPostData));
        assert_eq!(check_new_post_data(1, "title", ""), Err(AppError::MissingPostData));
        assert_eq!(check_new_post_data(1, "title", "content"), Ok(()));
    }

    #[test]
    fn sanitizes_title_and_content_only() {
        let created_at = OffsetDateTime::now_utc();
        let post = Post {
            id: 7,
            title: "<i>Hi</i>".to_string(),
            content: "<script>alert(1)</script>there".to_string(),
            author_id: 3,
            created_at,
        };

        let post = sanitize_post(post);
        assert_eq!(post.title, "Hi");
        assert_eq!(post.content, "there");
        assert_eq!((post.id, post.author_id, post.created_at), (7, 3, created_at));
    }
}
