// Client core for the Draftly article-generation backend.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod generate;
pub mod models;
pub mod session;
pub mod state;

pub use api::{ApiClient, ApiError, ApiResult};
pub use catalog::{RoleCatalog, RoleOrigin};
pub use config::Settings;
pub use credentials::{KeyringTokenStore, MemoryTokenStore, TokenStore};
pub use generate::{GenerationInput, GenerationParams, GenerationRequest};
pub use session::{SessionController, SessionSignal};
pub use state::AppState;
