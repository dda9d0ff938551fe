use crate::application_port::{IdentityResolver, ResolveError};
use crate::domain_model::{ResolveRequest, ResolvedProfile};
use crate::domain_port::VkApi;
use crate::logger::*;
use serde_json::Value;
use std::sync::Arc;

pub struct RealIdentityResolver {
    vk_api: Arc<dyn VkApi>,
}

impl RealIdentityResolver {
    pub fn new(vk_api: Arc<dyn VkApi>) -> Self {
        Self { vk_api }
    }
}

#[async_trait::async_trait]
impl IdentityResolver for RealIdentityResolver {
    async fn resolve(&self, body: &Value) -> Result<ResolvedProfile, ResolveError> {
        let request = ResolveRequest::from_body(body).ok_or(ResolveError::MissingCredentials)?;
        debug!(user_id = %request.user_id, "calling VK users.get");

        let payload = self
            .vk_api
            .users_get(&request.user_id, &request.access_token)
            .await?;

        classify_users_get(payload)
    }
}

/// Interprets a `users.get` body: `error` wins over `response`, and only the
/// first user is kept.
pub fn classify_users_get(mut payload: Value) -> Result<ResolvedProfile, ResolveError> {
    match payload.get_mut("error").map(Value::take) {
        None | Some(Value::Null) => {}
        Some(details) => return Err(ResolveError::Upstream(details)),
    }

    let first = match payload.get_mut("response").map(Value::take) {
        None | Some(Value::Null) => return Err(ResolveError::NotFound),
        Some(Value::Array(users)) => users.into_iter().next().ok_or(ResolveError::NotFound)?,
        Some(other) => {
            return Err(ResolveError::Malformed(format!(
                "unexpected VK response shape: {}",
                other
            )));
        }
    };

    serde_json::from_value(first).map_err(|e| ResolveError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_port::VkApiError;
    use crate::infra_vk::StubVkApi;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({ "user_id": "123", "access_token": "tok" })
    }

    #[tokio::test]
    async fn missing_credentials_skip_the_upstream_call() {
        let vk_api = Arc::new(StubVkApi::replying(json!({ "response": [] })));
        let resolver = RealIdentityResolver::new(vk_api.clone());

        for body in [
            json!({ "access_token": "tok" }),
            json!({ "user_id": "123" }),
            json!({}),
        ] {
            let err = resolver.resolve(&body).await.unwrap_err();
            assert!(matches!(err, ResolveError::MissingCredentials), "{err:?}");
        }
        assert_eq!(vk_api.calls(), 0);
    }

    #[tokio::test]
    async fn keeps_only_profile_fields() {
        let vk_api = Arc::new(StubVkApi::replying(json!({
            "response": [{
                "id": 123,
                "first_name": "Ivan",
                "last_name": "Petrov",
                "photo_200": "http://x/y.jpg",
                "extra_field": "z"
            }]
        })));
        let resolver = RealIdentityResolver::new(vk_api.clone());

        let profile = resolver.resolve(&valid_body()).await.unwrap();

        assert_eq!(
            profile,
            ResolvedProfile {
                id: 123,
                first_name: "Ivan".to_string(),
                last_name: "Petrov".to_string(),
                photo_200: "http://x/y.jpg".to_string(),
            }
        );
        assert_eq!(vk_api.calls(), 1);
    }

    #[tokio::test]
    async fn passes_vk_error_details_through() {
        let details = json!({ "error_code": 5, "error_msg": "bad token" });
        let vk_api = Arc::new(StubVkApi::replying(json!({ "error": details.clone() })));
        let resolver = RealIdentityResolver::new(vk_api);

        match resolver.resolve(&valid_body()).await {
            Err(ResolveError::Upstream(got)) => assert_eq!(got, details),
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn network_failure_keeps_its_message() {
        let vk_api = Arc::new(StubVkApi::failing(VkApiError::Transport(
            "network down".to_string(),
        )));
        let resolver = RealIdentityResolver::new(vk_api);

        let err = resolver.resolve(&valid_body()).await.unwrap_err();
        assert!(matches!(err, ResolveError::VkApi(_)));
        assert_eq!(err.to_string(), "network down");
    }

    #[test]
    fn empty_or_absent_response_is_not_found() {
        for payload in [
            json!({ "response": [] }),
            json!({}),
            json!({ "response": null }),
        ] {
            let err = classify_users_get(payload).unwrap_err();
            assert!(matches!(err, ResolveError::NotFound), "{err:?}");
        }
    }

    #[test]
    fn error_takes_precedence_over_response() {
        let err = classify_users_get(json!({
            "error": { "error_code": 6 },
            "response": [{ "id": 1, "first_name": "a", "last_name": "b", "photo_200": "c" }]
        }))
        .unwrap_err();
        assert!(matches!(err, ResolveError::Upstream(_)));
    }

    #[test]
    fn incomplete_user_is_malformed() {
        let err = classify_users_get(json!({
            "response": [{ "id": 1, "first_name": "Ivan" }]
        }))
        .unwrap_err();
        assert!(matches!(err, ResolveError::Malformed(_)));

        let err = classify_users_get(json!({ "response": { "id": 1 } })).unwrap_err();
        assert!(matches!(err, ResolveError::Malformed(_)));
    }
}
