use crate::domain_model::AccessToken;
use crate::domain_port::{VkApi, VkApiError};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Replies with a canned result and counts calls.
pub struct StubVkApi {
    reply: Result<Value, VkApiError>,
    calls: AtomicUsize,
}

impl StubVkApi {
    pub fn replying(body: Value) -> Self {
        Self {
            reply: Ok(body),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: VkApiError) -> Self {
        Self {
            reply: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl VkApi for StubVkApi {
    async fn users_get(
        &self,
        _user_id: &str,
        _access_token: &AccessToken,
    ) -> Result<Value, VkApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}
