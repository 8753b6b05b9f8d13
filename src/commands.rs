// App-facing operations consumed by the CLI (or any other front end). Each
// command wraps the client core, logs, and flattens errors into user-facing
// strings.

use crate::catalog::{RoleCatalog, RoleOrigin};
use crate::generate::{GenerationInput, GenerationRequest};
use crate::models::{Article, ArticleDraft, ArticlePage, Role, RoleDraft, TextAnalysis, User};
use crate::state::AppState;
use std::sync::atomic::Ordering;
use uuid::Uuid;

// Logs in with the OAuth2 password flow and persists the returned token.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<(), String> {
    log::info!("Logging in as {}", email);
    let token = state
        .api
        .login_access_token(email, password)
        .await
        .map_err(|e| format!("Login failed: {}", e))?;
    state
        .session
        .login(&token.access_token)
        .map_err(|e| format!("Failed to persist session: {}", e))
}

pub async fn register(
    state: &AppState,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<User, String> {
    log::info!("Registering account for {}", email);
    state
        .api
        .signup(email, password, full_name)
        .await
        .map_err(|e| format!("Registration failed: {}", e))
}

pub fn logout(state: &AppState) -> Result<(), String> {
    state
        .session
        .logout()
        .map_err(|e| format!("Logout failed: {}", e))
}

pub async fn current_user(state: &AppState) -> Result<User, String> {
    state
        .api
        .me()
        .await
        .map_err(|e| format!("Failed to load profile: {}", e))
}

pub async fn load_roles(state: &AppState) -> Result<RoleCatalog, String> {
    RoleCatalog::load(&state.api)
        .await
        .map_err(|e| format!("Failed to load roles: {}", e))
}

pub async fn create_role(state: &AppState, draft: &RoleDraft) -> Result<Role, String> {
    state
        .api
        .create_role(draft)
        .await
        .map_err(|e| format!("Failed to create role: {}", e))
}

// Mutations only apply to personal roles; global presets are read-only from
// the client's point of view. The caller supplies the catalog it already
// loaded so origin is resolved from the id-set, not refetched.
fn require_personal(catalog: &RoleCatalog, id: Uuid) -> Result<(), String> {
    match catalog.origin(id) {
        Some(RoleOrigin::Personal) => Ok(()),
        Some(RoleOrigin::Global) => Err("Global roles are read-only".to_string()),
        None => Err(format!("Unknown role: {}", id)),
    }
}

pub async fn update_role(
    state: &AppState,
    catalog: &RoleCatalog,
    id: Uuid,
    draft: &RoleDraft,
) -> Result<Role, String> {
    require_personal(catalog, id)?;
    state
        .api
        .update_role(id, draft)
        .await
        .map_err(|e| format!("Failed to update role: {}", e))
}

pub async fn delete_role(state: &AppState, catalog: &RoleCatalog, id: Uuid) -> Result<(), String> {
    require_personal(catalog, id)?;
    state
        .api
        .delete_role(id)
        .await
        .map(|_| ())
        .map_err(|e| format!("Failed to delete role: {}", e))
}

pub async fn active_models(state: &AppState) -> Result<Vec<String>, String> {
    state
        .api
        .active_models()
        .await
        .map(|m| m.models)
        .map_err(|e| format!("Failed to load models: {}", e))
}

// Validates the form against the selected role's origin and issues the
// generation call. Returns the new article's id.
pub async fn generate_article(
    state: &AppState,
    catalog: &RoleCatalog,
    input: &GenerationInput,
) -> Result<i64, String> {
    let origin = match input.role_id {
        Some(id) => catalog
            .origin(id)
            .ok_or_else(|| format!("Unknown role: {}", id))?,
        None => return Err("Please select a role".to_string()),
    };
    let request = GenerationRequest::build(input, origin).map_err(|e| e.to_string())?;

    if state.generating.swap(true, Ordering::SeqCst) {
        return Err("A generation request is already pending".to_string());
    }
    let result = state.api.generate(&request).await;
    state.generating.store(false, Ordering::SeqCst);

    match result {
        Ok(article) => {
            log::info!("Generated article {}", article.id);
            Ok(article.id)
        }
        Err(e) => {
            log::error!("Generation failed: {:?}", e);
            Err(format!("Generation failed: {}", e))
        }
    }
}

pub async fn list_articles(state: &AppState) -> Result<ArticlePage, String> {
    state
        .api
        .articles()
        .await
        .map_err(|e| format!("Failed to load articles: {}", e))
}

pub async fn get_article(state: &AppState, id: i64) -> Result<Article, String> {
    state
        .api
        .article(id)
        .await
        .map_err(|e| format!("Failed to load article {}: {}", id, e))
}

pub async fn update_article(
    state: &AppState,
    id: i64,
    draft: &ArticleDraft,
) -> Result<Article, String> {
    state
        .api
        .update_article(id, draft)
        .await
        .map_err(|e| format!("Failed to update article {}: {}", id, e))
}

pub async fn delete_article(state: &AppState, id: i64) -> Result<(), String> {
    state
        .api
        .delete_article(id)
        .await
        .map(|_| ())
        .map_err(|e| format!("Failed to delete article {}: {}", id, e))
}

pub async fn analyze_text(state: &AppState, text: &str) -> Result<TextAnalysis, String> {
    state
        .api
        .analyze_text(text)
        .await
        .map_err(|e| format!("Failed to analyze text: {}", e))
}
