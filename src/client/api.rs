use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use tracing::debug;

use crate::structs::{
    access_token::AccessToken,
    error_detail::ErrorDetail,
    login_user::LoginUser,
    post::{NewPost, Post},
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Cannot connect to server")]
    Connection(#[source] reqwest::Error),
    #[error("Please login first")]
    NotLoggedIn,
    #[error("{detail}")]
    Api { status: StatusCode, detail: String },
    #[error("HTTP error : {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() {
            ClientError::Connection(e)
        } else {
            ClientError::Http(e)
        }
    }
}

/// State of one client run, the token obtained by the last successful login
#[derive(Debug, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// Use `BLOG_API_URL` or fall back to `http://localhost:8000`
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(std::env::var("BLOG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Log in and keep the returned token in `session`
    pub fn login(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let request = self.client.post(self.url("/auth/login")).json(&LoginUser {
            username: username.to_string(),
            password: password.to_string(),
        });
        let access_token: AccessToken = send(request)?.json()?;
        session.token = Some(access_token.access_token);
        Ok(())
    }

    pub fn get_posts(&self, session: &Session) -> Result<Vec<Post>, ClientError> {
        let token = session.token().ok_or(ClientError::NotLoggedIn)?;
        let request = self.client.get(self.url("/api/data")).bearer_auth(token);
        Ok(send(request)?.json()?)
    }

    pub fn create_post(
        &self,
        session: &Session,
        title: &str,
        content: &str,
    ) -> Result<Post, ClientError> {
        let token = session.token().ok_or(ClientError::NotLoggedIn)?;
        let request = self
            .client
            .post(self.url("/api/data"))
            .bearer_auth(token)
            .json(&NewPost {
                title: title.to_string(),
                content: content.to_string(),
            });
        Ok(send(request)?.json()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Send `request`, turning a non 2xx answer into [`ClientError::Api`] with the server's `detail`
fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request.send().map_err(ClientError::from_send)?;
    let status = response.status();
    debug!("{} {}", status, response.url());

    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorDetail>()
        .map(|error| error.detail)
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ClientError::Api { status, detail })
}
