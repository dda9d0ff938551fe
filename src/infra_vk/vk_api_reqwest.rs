use crate::domain_model::AccessToken;
use crate::domain_port::{VK_API_VERSION, VK_PROFILE_FIELDS, VkApi, VkApiError};
use serde_json::Value;
use std::time::Duration;

pub struct ReqwestVkApi {
    client: reqwest::Client,
    users_get_url: String,
}

impl ReqwestVkApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            users_get_url: format!("{}/method/users.get", base_url.trim_end_matches('/')),
        })
    }
}

// reqwest errors embed the request URL, which carries the access token.
fn transport_error(err: reqwest::Error) -> VkApiError {
    VkApiError::Transport(err.without_url().to_string())
}

#[async_trait::async_trait]
impl VkApi for ReqwestVkApi {
    async fn users_get(
        &self,
        user_id: &str,
        access_token: &AccessToken,
    ) -> Result<Value, VkApiError> {
        let response = self
            .client
            .get(&self.users_get_url)
            .query(&[
                ("user_ids", user_id),
                ("fields", VK_PROFILE_FIELDS),
                ("access_token", access_token.expose()),
                ("v", VK_API_VERSION),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(%status, bytes = body.len(), "VK users.get responded");

        serde_json::from_str(&body).map_err(|e| VkApiError::Decode(e.to_string()))
    }
}
