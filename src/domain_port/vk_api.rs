use crate::domain_model::AccessToken;
use serde_json::Value;

/// VK API version sent with every `users.get` call.
pub const VK_API_VERSION: &str = "5.131";

/// Field selector asking VK for the 200px avatar.
pub const VK_PROFILE_FIELDS: &str = "photo_200";

#[derive(Debug, Clone, thiserror::Error)]
pub enum VkApiError {
    /// The request never produced a response body.
    #[error("{0}")]
    Transport(String),
    /// The body arrived but was not JSON.
    #[error("{0}")]
    Decode(String),
}

/// Outbound access to VK's `users.get` method.
///
/// Implementations return the parsed JSON body as-is, whatever the HTTP
/// status. Interpreting `response` and `error` is the caller's job.
#[async_trait::async_trait]
pub trait VkApi: Send + Sync {
    async fn users_get(
        &self,
        user_id: &str,
        access_token: &AccessToken,
    ) -> Result<Value, VkApiError>;
}
