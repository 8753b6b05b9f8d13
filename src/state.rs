use crate::api::ApiClient;
use crate::config::Settings;
use crate::credentials::TokenStore;
use crate::session::SessionController;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

// Core application state shared by the command layer and any front end.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiClient>,
    pub session: Arc<SessionController>,
    // Observable in-flight flag for generation. The request builder does not
    // guard against concurrent submissions; front ends read this to disable
    // resubmission while a request is pending.
    pub generating: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(settings: &Settings, tokens: Arc<dyn TokenStore>) -> Self {
        let session = Arc::new(SessionController::new(tokens.clone()));
        let api = Arc::new(ApiClient::new(
            settings.base_url.clone(),
            tokens,
            session.signal(),
        ));
        Self {
            api,
            session,
            generating: Arc::new(AtomicBool::new(false)),
        }
    }
}
