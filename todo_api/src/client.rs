//! HTTP client for the todo API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    normalize::normalize,
    request::ApiRequest,
    response::{truncate_body, ResponseBody},
    session::TokenStore,
    types::{
        CodeRequest, CreateTodoRequest, EmailRequest, GoogleLoginRequest, LoginRequest,
        LoginResponse, MessageResponse, PasswordRequest, RegisterRequest, Todo,
        UpdatePasswordRequest, UpdateUsernameRequest, User, VerifyEmailRequest,
    },
    Error,
};

/// HTTP client for the todo API.
///
/// Every request carries `Content-Type: application/json` and, when the
/// session holds a token, `Authorization: Bearer <token>`. A 401 response
/// clears the session before the error is returned. The underlying
/// `reqwest::Client` is built once and reused.
pub struct Client {
    http: reqwest::Client,
    /// Base URL without a trailing slash. Paths are appended verbatim.
    base_api_url: String,
    session: Arc<dyn TokenStore>,
}

impl Client {
    /// Creates a client for `base_url` that reads and clears tokens through
    /// `session`.
    pub fn new(base_url: &str, session: Arc<dyn TokenStore>) -> Result<Self, Error> {
        Self::build(base_url, session, None)
    }

    /// Like [`Client::new`] but with a per-request timeout.
    pub fn with_timeout(
        base_url: &str,
        session: Arc<dyn TokenStore>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        Self::build(base_url, session, Some(timeout))
    }

    fn build(
        base_url: &str,
        session: Arc<dyn TokenStore>,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Network(e)
        })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })
    }

    fn headers(&self, request: &ApiRequest) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidHeader(name.clone()))?;
            let value =
                HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(name.to_string()))?;
            headers.insert(name, value);
        }
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::InvalidHeader(AUTHORIZATION.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Sends one request and normalizes the outcome.
    ///
    /// Success bodies come back as JSON, raw text when they do not parse,
    /// or [`ResponseBody::Empty`]. A 401 clears the session and yields
    /// [`Error::Unauthorized`] whatever the body says, or [`Error::Session`]
    /// if the cleared token could not be persisted. Any other non-2xx
    /// status yields [`Error::RequestFailed`] with a normalized message.
    pub async fn execute(&self, request: ApiRequest) -> Result<ResponseBody, Error> {
        let url = self.get_url(&request.path)?;
        let headers = self.headers(&request)?;

        tracing::debug!("{} {}", request.method, request.path);
        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .headers(headers);
        if let Some(body) = request.body_string() {
            builder = builder.body(body);
        }
        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", request.method, request.path, e);
            Error::Network(e)
        })?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                "{} {} returned 401, clearing session",
                request.method,
                request.path
            );
            if let Err(e) = self.session.clear() {
                tracing::error!("Failed to persist cleared session: {}", e);
                return Err(Error::Session(e));
            }
            return Err(Error::Unauthorized);
        }

        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;
        let body = ResponseBody::parse(text);

        if !status.is_success() {
            let raw = body.error_message();
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&raw)
            );
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                message: normalize(&raw),
            });
        }

        tracing::debug!("{} {} -> {}", request.method, request.path, status);
        Ok(body)
    }

    async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Error> {
        self.execute(request).await?.decode()
    }

    async fn call_message(&self, request: ApiRequest) -> Result<MessageResponse, Error> {
        let body = self.execute(request).await?;
        Ok(MessageResponse {
            message: body.message().unwrap_or_default(),
        })
    }

    /// Runs an `/auth/*` call and stores the returned token, if any.
    async fn authenticate(&self, request: ApiRequest) -> Result<LoginResponse, Error> {
        let resp: LoginResponse = self.call(request).await?;
        if let Some(token) = resp.token() {
            self.session.set_token(Some(token)).map_err(Error::Session)?;
        }
        Ok(resp)
    }

    /// Logs in with a username or email address and password.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, Error> {
        let request =
            ApiRequest::post("/auth/login").with_json(&LoginRequest { username, password })?;
        self.authenticate(request).await
    }

    /// Logs in with a Google ID token.
    pub async fn google_login(&self, token: &str) -> Result<LoginResponse, Error> {
        let request =
            ApiRequest::post("/auth/google").with_json(&GoogleLoginRequest { token })?;
        self.authenticate(request).await
    }

    /// Registers a new account. The server emails a verification code.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, Error> {
        let request = ApiRequest::post("/auth/register").with_json(&RegisterRequest {
            username,
            email,
            password,
        })?;
        self.authenticate(request).await
    }

    /// Confirms a registration with the emailed code.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<LoginResponse, Error> {
        let request =
            ApiRequest::post("/auth/verify").with_json(&VerifyEmailRequest { email, code })?;
        self.authenticate(request).await
    }

    /// Forgets the current token. No request is sent.
    pub fn logout(&self) -> Result<(), Error> {
        self.session.clear().map_err(Error::Session)
    }

    /// Fetches the authenticated user's profile.
    pub async fn get_user(&self) -> Result<User, Error> {
        self.call(ApiRequest::get("/api/user/me")).await
    }

    pub async fn update_username(&self, username: &str) -> Result<MessageResponse, Error> {
        let request =
            ApiRequest::patch("/api/user/me").with_json(&UpdateUsernameRequest { username })?;
        self.call_message(request).await
    }

    pub async fn update_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, Error> {
        let request = ApiRequest::put("/api/user/me/password").with_json(&UpdatePasswordRequest {
            old_password,
            new_password,
        })?;
        self.call_message(request).await
    }

    /// Starts an email change. The code goes to the new address.
    pub async fn request_email_update(&self, email: &str) -> Result<MessageResponse, Error> {
        let request = ApiRequest::post("/api/user/me/email").with_json(&EmailRequest { email })?;
        self.call_message(request).await
    }

    pub async fn verify_email_update(&self, code: &str) -> Result<MessageResponse, Error> {
        let request = ApiRequest::put("/api/user/me/email").with_json(&CodeRequest { code })?;
        self.call_message(request).await
    }

    /// Starts account deletion. The server emails a confirmation code.
    pub async fn request_delete_user(&self, password: &str) -> Result<MessageResponse, Error> {
        let request = ApiRequest::delete("/api/user/me").with_json(&PasswordRequest { password })?;
        self.call_message(request).await
    }

    pub async fn confirm_delete_user(&self, code: &str) -> Result<MessageResponse, Error> {
        let request = ApiRequest::put("/api/user/me/delete").with_json(&CodeRequest { code })?;
        self.call_message(request).await
    }

    /// Lists the user's todos. A `null` or empty body is an empty list.
    pub async fn get_todos(&self) -> Result<Vec<Todo>, Error> {
        let todos: Option<Vec<Todo>> = self.call(ApiRequest::get("/api/todos")).await?;
        Ok(todos.unwrap_or_default())
    }

    pub async fn create_todo(
        &self,
        title: &str,
        description: &str,
        deadline: &str,
    ) -> Result<Todo, Error> {
        let request = ApiRequest::post("/api/todos").with_json(&CreateTodoRequest {
            title,
            description,
            deadline,
        })?;
        self.call(request).await
    }

    /// Replaces a todo with `todo`, addressed by its id.
    pub async fn update_todo(&self, todo: &Todo) -> Result<MessageResponse, Error> {
        let request = ApiRequest::put(format!("/api/todos/{}", todo.id)).with_json(todo)?;
        self.call_message(request).await
    }

    pub async fn delete_todo(&self, id: &str) -> Result<MessageResponse, Error> {
        self.call_message(ApiRequest::delete(format!("/api/todos/{}", id)))
            .await
    }
}
