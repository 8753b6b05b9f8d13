use crate::credentials::TokenStore;
use crate::generate::GenerationRequest;
use crate::models::{
    ActiveModels, Article, ArticleDraft, ArticlePage, ArticleRef, AuthToken, LoginRequest, Role,
    RoleDraft, RolePage, ServerMessage, SignupRequest, TextAnalysis, User,
};
use crate::session::SessionSignal;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the session credential. The dispatcher has
    /// already cleared the stored token by the time this is returned.
    #[error("Session is no longer valid, please log in again")]
    Unauthorized,
    /// Input was rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// Any non-success response other than an authentication rejection,
    /// passed through unmodified.
    #[error("Backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// Network fault or a payload that did not decode.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Single choke point for every call to the backend. Attaches the bearer
/// credential when one is stored and enforces the global invalidation policy:
/// a 401 from any endpoint kills the whole session.
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    signal: SessionSignal,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>, signal: SessionSignal) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            tokens,
            signal,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // Pre-call hook: attach the credential iff one is stored. An absent token
    // is not an error; the request simply goes out unauthenticated.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }
        request
    }

    // Post-call hook: a 401 from anywhere invalidates the session, no matter
    // which operation triggered it. Everything else passes through.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Backend rejected the session credential, terminating session");
            if let Err(e) = self.tokens.clear() {
                log::error!("Failed to clear rejected credential: {:?}", e);
            }
            self.signal.set(false);
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(response.json().await?)
    }

    // --- Auth ---

    /// OAuth2 password flow; the backend expects a form-encoded body.
    pub async fn login_access_token(&self, username: &str, password: &str) -> ApiResult<AuthToken> {
        let form = [
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
        ];
        self.execute(self.request(Method::POST, "login/access-token").form(&form))
            .await
    }

    /// JSON login variant exposed by the same backend.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthToken> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute(self.request(Method::POST, "auth/login").json(&body))
            .await
    }

    pub async fn signup(&self, email: &str, password: &str, full_name: &str) -> ApiResult<User> {
        let body = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        };
        self.execute(self.request(Method::POST, "users/signup").json(&body))
            .await
    }

    pub async fn me(&self) -> ApiResult<User> {
        self.execute(self.request(Method::GET, "users/me")).await
    }

    // --- Roles ---

    pub async fn personal_roles(&self) -> ApiResult<RolePage> {
        self.execute(self.request(Method::GET, "avatars/")).await
    }

    pub async fn global_roles(&self) -> ApiResult<RolePage> {
        self.execute(self.request(Method::GET, "avatars/global")).await
    }

    pub async fn role(&self, id: Uuid) -> ApiResult<Role> {
        self.execute(self.request(Method::GET, &format!("avatars/{}", id)))
            .await
    }

    pub async fn create_role(&self, draft: &RoleDraft) -> ApiResult<Role> {
        self.execute(self.request(Method::POST, "avatars/personal/").json(draft))
            .await
    }

    pub async fn update_role(&self, id: Uuid, draft: &RoleDraft) -> ApiResult<Role> {
        self.execute(self.request(Method::PUT, &format!("avatars/{}", id)).json(draft))
            .await
    }

    pub async fn delete_role(&self, id: Uuid) -> ApiResult<ServerMessage> {
        self.execute(self.request(Method::DELETE, &format!("avatars/{}", id)))
            .await
    }

    // --- Articles ---

    pub async fn active_models(&self) -> ApiResult<ActiveModels> {
        self.execute(self.request(Method::GET, "article/active_models"))
            .await
    }

    /// Issues exactly one generation call. The request must already be built
    /// and validated; free-text fields are percent-encoded into the query
    /// string here.
    pub async fn generate(&self, request: &GenerationRequest) -> ApiResult<ArticleRef> {
        log::info!(
            "Requesting article generation with model '{}' for role {}",
            request.model,
            request.avatar_id
        );
        self.execute(
            self.request(Method::GET, "article/generate")
                .query(&request.query()),
        )
        .await
    }

    pub async fn articles(&self) -> ApiResult<ArticlePage> {
        self.execute(self.request(Method::GET, "article/")).await
    }

    pub async fn article(&self, id: i64) -> ApiResult<Article> {
        self.execute(self.request(Method::GET, &format!("article/{}", id)))
            .await
    }

    pub async fn update_article(&self, id: i64, draft: &ArticleDraft) -> ApiResult<Article> {
        self.execute(self.request(Method::PUT, &format!("article/{}", id)).json(draft))
            .await
    }

    pub async fn delete_article(&self, id: i64) -> ApiResult<ServerMessage> {
        self.execute(self.request(Method::DELETE, &format!("article/{}", id)))
            .await
    }

    pub async fn analyze_text(&self, text: &str) -> ApiResult<TextAnalysis> {
        self.execute(
            self.request(Method::GET, "article/analyze_text")
                .query(&[("article_text", text)]),
        )
        .await
    }
}
