use std::env;

// Base URL of the deployed backend, overridable per environment.
const BASE_URL_ENV: &str = "DRAFTLY_API_URL";
const DEFAULT_BASE_URL: &str = "http://localhost:8888/api/v1/";

#[derive(Clone, Debug)]
pub struct Settings {
    pub base_url: String,
}

impl Settings {
    /// Resolves settings from the environment, falling back to the local
    /// development backend.
    pub fn from_env() -> Self {
        let base_url = match env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => {
                log::debug!("Using backend URL from {}: {}", BASE_URL_ENV, url);
                url
            }
            _ => DEFAULT_BASE_URL.to_string(),
        };
        Self { base_url }
    }
}
