use anyhow::Result;
use dialoguer::{Input, Password, Select};
use time::format_description::well_known::Rfc3339;

use super::api::{ApiClient, ClientError, Session};
use crate::structs::post::Post;

/// Run the menu until the user picks "Exit"
pub fn main_menu(api: &ApiClient, session: &mut Session) -> Result<()> {
    let items = ["Login", "View Posts", "Create Post", "Exit"];
    loop {
        println!("\n=== Blog Client ===");
        let selection = Select::new()
            .with_prompt("Choose an option")
            .items(&items)
            .default(0)
            .interact()?;
        match selection {
            0 => handle_login(api, session)?,
            1 => handle_view_posts(api, session),
            2 => handle_create_post(api, session)?,
            _ => {
                println!("Goodbye!");
                break;
            }
        }
    }
    Ok(())
}

fn handle_login(api: &ApiClient, session: &mut Session) -> Result<()> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    match api.login(session, username.trim(), &password) {
        Ok(()) => println!("Login successful!"),
        Err(e) => println!("{}", login_failure_message(&e)),
    }
    Ok(())
}

fn handle_view_posts(api: &ApiClient, session: &Session) {
    match api.get_posts(session) {
        Ok(posts) => print!("{}", render_posts(&posts)),
        Err(e) => println!("{}", failure_message("Failed to get posts", &e)),
    }
}

fn handle_create_post(api: &ApiClient, session: &Session) -> Result<()> {
    if !session.is_logged_in() {
        println!("{}", ClientError::NotLoggedIn);
        return Ok(());
    }

    let title: String = Input::new()
        .with_prompt("Post title")
        .allow_empty(true)
        .interact_text()?;
    let content: String = Input::new()
        .with_prompt("Post content")
        .allow_empty(true)
        .interact_text()?;
    let (title, content) = (title.trim(), content.trim());

    if title.is_empty() || content.is_empty() {
        println!("Title and content are required");
        return Ok(());
    }

    match api.create_post(session, title, content) {
        Ok(_) => println!("Post created successfully!"),
        Err(e) => println!("{}", failure_message("Failed to create post", &e)),
    }
    Ok(())
}

/// Login failures add a hint when the server cannot be reached
pub fn login_failure_message(error: &ClientError) -> String {
    match error {
        ClientError::Connection(_) => format!("{error}. Make sure the server is running."),
        _ => failure_message("Login failed", error),
    }
}

/// Text printed for a failed action. Connection and login problems are
/// printed as is, server errors get the action as prefix.
pub fn failure_message(action: &str, error: &ClientError) -> String {
    match error {
        ClientError::Connection(_) | ClientError::NotLoggedIn => error.to_string(),
        _ => format!("{action}: {error}"),
    }
}

pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts to display\n".to_string();
    }

    let mut out = String::from("\n=== Posts ===\n");
    for post in posts {
        let created_at = post
            .created_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| post.created_at.to_string());
        out.push_str(&format!("\nTitle: {}\n", post.title));
        out.push_str(&format!("Content: {}\n", post.content));
        out.push_str(&format!("Author ID: {}\n", post.author_id));
        out.push_str(&format!("Created: {created_at}\n"));
        out.push_str(&"-".repeat(40));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn renders_empty_list() {
        assert_eq!(render_posts(&[]), "No posts to display\n");
    }

    #[test]
    fn renders_each_post() {
        let posts = vec![Post {
            id: 1,
            title: "Hi".to_string(),
            content: "there".to_string(),
            author_id: 1,
            created_at: datetime!(2024-05-01 12:30:00 UTC),
        }];

        let rendered = render_posts(&posts);
        assert!(rendered.contains("Title: Hi\n"));
        assert!(rendered.contains("Content: there\n"));
        assert!(rendered.contains("Author ID: 1\n"));
        assert!(rendered.contains("Created: 2024-05-01T12:30:00Z\n"));
        assert!(rendered.ends_with(&format!("{}\n", "-".repeat(40))));
    }

    #[test]
    fn prints_server_detail_verbatim() {
        let error = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            detail: "Incorrect username or password".to_string(),
        };
        assert_eq!(
            failure_message("Login failed", &error),
            "Login failed: Incorrect username or password"
        );
        assert_eq!(
            failure_message("Failed to create post", &ClientError::NotLoggedIn),
            "Please login first"
        );
        assert_eq!(
            failure_message("Failed to get posts", &ClientError::NotLoggedIn),
            "Please login first"
        );
        assert_eq!(
            login_failure_message(&error),
            "Login failed: Incorrect username or password"
        );
    }

    #[test]
    fn login_hints_at_unreachable_server() {
        let api = ApiClient::new("http://127.0.0.1:1").unwrap();
        let mut session = Session::default();
        let error = api.login(&mut session, "testuser", "testpassword").unwrap_err();

        assert_eq!(
            login_failure_message(&error),
            "Cannot connect to server. Make sure the server is running."
        );
        assert_eq!(
            failure_message("Failed to get posts", &error),
            "Cannot connect to server"
        );
    }
}
