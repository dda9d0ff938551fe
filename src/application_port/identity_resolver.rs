use crate::domain_model::ResolvedProfile;
use crate::domain_port::VkApiError;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("user_id and access_token are required")]
    MissingCredentials,
    #[error("VK API returned an error: {0}")]
    Upstream(Value),
    #[error("user not found in VK API response")]
    NotFound,
    #[error(transparent)]
    VkApi(#[from] VkApiError),
    #[error("{0}")]
    Malformed(String),
}

#[async_trait::async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolves the VK profile named by a parsed request body.
    ///
    /// Validation failures return before any outbound call is made.
    async fn resolve(&self, body: &Value) -> Result<ResolvedProfile, ResolveError>;
}
