use crate::domain_model::AccessToken;
use crate::domain_port::{VkApi, VkApiError};
use serde_json::{Value, json};

/// Offline stand-in for VK, selected with `vk.backend = "fake"`.
///
/// Behaviour is keyed on the access token:
/// - `fake-token`: a profile for the requested id (user `0` is not found)
/// - `bad-token`: VK error 5
/// - `network-down`: transport failure
/// - anything else: VK error 5
#[derive(Debug, Default)]
pub struct FakeVkApi;

impl FakeVkApi {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl VkApi for FakeVkApi {
    async fn users_get(
        &self,
        user_id: &str,
        access_token: &AccessToken,
    ) -> Result<Value, VkApiError> {
        match access_token.expose() {
            "network-down" => Err(VkApiError::Transport("network down".to_string())),
            "fake-token" if user_id == "0" => Ok(json!({ "response": [] })),
            "fake-token" => Ok(json!({
                "response": [{
                    "id": user_id.parse::<i64>().unwrap_or(1),
                    "first_name": "Ivan",
                    "last_name": "Petrov",
                    "photo_200": "https://vk.com/images/camera_200.png",
                    "can_access_closed": true,
                    "is_closed": false
                }]
            })),
            _ => Ok(json!({
                "error": {
                    "error_code": 5,
                    "error_msg": "User authorization failed: invalid access_token (4)."
                }
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn outcome_follows_the_token() {
        let vk_api = FakeVkApi::default();

        let body = vk_api
            .users_get("7", &AccessToken::new("fake-token"))
            .await
            .unwrap();
        assert_eq!(body["response"][0]["id"], 7);

        let body = vk_api
            .users_get("0", &AccessToken::new("fake-token"))
            .await
            .unwrap();
        assert_eq!(body, json!({ "response": [] }));

        let body = vk_api
            .users_get("0", &AccessToken::new("bad-token"))
            .await
            .unwrap();
        assert_eq!(body["error"]["error_code"], 5);

        let err = vk_api
            .users_get("7", &AccessToken::new("network-down"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "network down");
    }
}
