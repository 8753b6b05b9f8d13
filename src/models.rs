use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Represents a generation persona ("avatar" on the wire). List endpoints
// return a trimmed payload, the detail endpoint the full one, so everything
// past name/description is optional.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_words: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    // Present on the detail payload. Never used for origin decisions; the
    // catalog derives origin from which endpoint a role came back on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_global: Option<bool>,
}

// Body for creating or updating a personal role.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RolePage {
    pub data: Vec<Role>,
    pub count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

#[derive(Serialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AuthToken {
    pub access_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Article {
    pub id: i64,
    pub name: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ArticleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ArticlePage {
    pub data: Vec<Article>,
    pub count: i64,
}

// A freshly generated article; only the id matters to the client, it routes
// straight to the detail view.
#[derive(Deserialize, Clone, Debug)]
pub struct ArticleRef {
    pub id: i64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ActiveModels {
    pub models: Vec<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TextStatistics {
    pub num_characters: u64,
    pub num_words: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TextAnalysis {
    pub keywords: Vec<KeywordCount>,
    pub statistics: TextStatistics,
}

// Acknowledgement payload the backend sends for deletions.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerMessage {
    pub message: String,
}
