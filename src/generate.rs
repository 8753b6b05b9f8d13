use crate::api::ApiError;
use crate::catalog::RoleOrigin;
use uuid::Uuid;

/// Token length forced for global roles; the length field is not consulted.
pub const GLOBAL_ROLE_LENGTH: u32 = 12_000;
/// Inclusive bounds for the user-entered length with a personal role.
pub const MIN_ARTICLE_LENGTH: u32 = 4_096;
pub const MAX_ARTICLE_LENGTH: u32 = 120_000;

/// Raw form state as the user entered it. Length stays a string until
/// validation; whether it is even consulted depends on the role's origin.
#[derive(Clone, Debug, Default)]
pub struct GenerationInput {
    pub topic: String,
    pub keywords: String,
    pub role_id: Option<Uuid>,
    pub model: String,
    pub length: String,
    pub goal: String,
}

/// A validated generation request. The role-dependent fields live in a tagged
/// variant so a personal request cannot carry a goal and a global one cannot
/// carry a free-form length.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub avatar_id: Uuid,
    pub model: String,
    pub theme: String,
    pub params: GenerationParams,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GenerationParams {
    Personal { key_words: String, len_article: u32 },
    Global { goal: Option<String> },
}

impl GenerationRequest {
    /// Applies the role-dependent validation and defaulting rules. Returns a
    /// validation error without any network side effect when the input is
    /// rejected.
    pub fn build(input: &GenerationInput, origin: RoleOrigin) -> Result<Self, ApiError> {
        if input.topic.is_empty() {
            return Err(ApiError::Validation("Please enter a topic".to_string()));
        }
        if input.model.is_empty() {
            return Err(ApiError::Validation("Please select a model".to_string()));
        }
        let Some(avatar_id) = input.role_id else {
            return Err(ApiError::Validation("Please select a role".to_string()));
        };

        let params = match origin {
            // Public-figure roles pin the length and reuse the topic as the
            // keyword string; only the goal is taken as entered.
            RoleOrigin::Global => GenerationParams::Global {
                goal: (!input.goal.is_empty()).then(|| input.goal.clone()),
            },
            // Personal roles take the keyword string verbatim and a bounded
            // length; the goal field is dropped even if filled in.
            RoleOrigin::Personal => {
                let len_article: u32 = input.length.trim().parse().map_err(|_| {
                    ApiError::Validation(format!(
                        "Article length must be a number, got '{}'",
                        input.length
                    ))
                })?;
                if !(MIN_ARTICLE_LENGTH..=MAX_ARTICLE_LENGTH).contains(&len_article) {
                    return Err(ApiError::Validation(format!(
                        "Article length must be between {} and {} tokens",
                        MIN_ARTICLE_LENGTH, MAX_ARTICLE_LENGTH
                    )));
                }
                GenerationParams::Personal {
                    key_words: input.keywords.clone(),
                    len_article,
                }
            }
        };

        Ok(Self {
            avatar_id,
            model: input.model.clone(),
            theme: input.topic.clone(),
            params,
        })
    }

    /// Transport query pairs. Free-text values (theme, key_words, goal) are
    /// percent-encoded by the HTTP layer when the query string is assembled.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("avatar_id", self.avatar_id.to_string()),
            ("model", self.model.clone()),
            ("theme", self.theme.clone()),
        ];
        match &self.params {
            GenerationParams::Personal {
                key_words,
                len_article,
            } => {
                query.push(("key_words", key_words.clone()));
                query.push(("len_article", len_article.to_string()));
            }
            GenerationParams::Global { goal } => {
                query.push(("key_words", self.theme.clone()));
                query.push(("len_article", GLOBAL_ROLE_LENGTH.to_string()));
                if let Some(goal) = goal {
                    query.push(("goal", goal.clone()));
                }
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(length: &str) -> GenerationInput {
        GenerationInput {
            topic: "Binary search".to_string(),
            keywords: "algorithms, search".to_string(),
            role_id: Some(Uuid::new_v4()),
            model: "yandexgpt".to_string(),
            length: length.to_string(),
            goal: String::new(),
        }
    }

    fn pair<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn empty_topic_is_rejected_for_both_origins() {
        let mut form = input("8000");
        form.topic = String::new();
        for origin in [RoleOrigin::Global, RoleOrigin::Personal] {
            let err = GenerationRequest::build(&form, origin).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)));
        }
    }

    #[test]
    fn missing_model_or_role_is_rejected() {
        let mut form = input("8000");
        form.model = String::new();
        assert!(matches!(
            GenerationRequest::build(&form, RoleOrigin::Personal),
            Err(ApiError::Validation(_))
        ));

        let mut form = input("8000");
        form.role_id = None;
        assert!(matches!(
            GenerationRequest::build(&form, RoleOrigin::Global),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn global_role_forces_length_and_keyword() {
        let mut form = input("1");
        form.keywords = "completely ignored".to_string();
        let request = GenerationRequest::build(&form, RoleOrigin::Global).unwrap();
        let query = request.query();
        assert_eq!(pair(&query, "len_article"), Some("12000"));
        assert_eq!(pair(&query, "key_words"), Some("Binary search"));
        assert_eq!(pair(&query, "theme"), Some("Binary search"));
        assert_eq!(pair(&query, "goal"), None);
    }

    #[test]
    fn global_role_passes_goal_through() {
        let mut form = input("9999999");
        form.goal = "tech blog".to_string();
        let request = GenerationRequest::build(&form, RoleOrigin::Global).unwrap();
        assert_eq!(
            request.params,
            GenerationParams::Global {
                goal: Some("tech blog".to_string())
            }
        );
        assert_eq!(pair(&request.query(), "goal"), Some("tech blog"));
    }

    #[test]
    fn personal_role_length_bounds_are_inclusive() {
        assert!(matches!(
            GenerationRequest::build(&input("4095"), RoleOrigin::Personal),
            Err(ApiError::Validation(_))
        ));
        assert!(GenerationRequest::build(&input("4096"), RoleOrigin::Personal).is_ok());
        assert!(GenerationRequest::build(&input("120000"), RoleOrigin::Personal).is_ok());
        assert!(matches!(
            GenerationRequest::build(&input("120001"), RoleOrigin::Personal),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn personal_role_rejects_non_numeric_length() {
        assert!(matches!(
            GenerationRequest::build(&input("twelve"), RoleOrigin::Personal),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            GenerationRequest::build(&input(""), RoleOrigin::Personal),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn personal_role_keeps_keywords_and_drops_goal() {
        let mut form = input("4096");
        form.goal = "should not appear".to_string();
        let request = GenerationRequest::build(&form, RoleOrigin::Personal).unwrap();
        let query = request.query();
        assert_eq!(pair(&query, "key_words"), Some("algorithms, search"));
        assert_eq!(pair(&query, "len_article"), Some("4096"));
        assert_eq!(pair(&query, "goal"), None);
    }

    #[test]
    fn personal_role_allows_empty_keywords() {
        let mut form = input("5000");
        form.keywords = String::new();
        let request = GenerationRequest::build(&form, RoleOrigin::Personal).unwrap();
        assert_eq!(pair(&request.query(), "key_words"), Some(""));
    }
}
