use super::AccessToken;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub user_id: String,
    pub access_token: AccessToken,
}

impl ResolveRequest {
    /// Reads `user_id` and `access_token` from a parsed request body.
    ///
    /// Returns `None` when the body is not an object or either field is
    /// missing, null, empty, zero, fractional, or of a non-scalar type.
    pub fn from_body(body: &Value) -> Option<Self> {
        let user_id = required_text(body.get("user_id"))?;
        let access_token = required_text(body.get("access_token"))?;
        Some(Self {
            user_id,
            access_token: AccessToken::new(access_token),
        })
    }
}

fn required_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        // VK ids are commonly sent as JSON numbers; only whole ones make sense
        Value::Number(n) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_u64().map(|u| u.to_string()))
            .filter(|id| id != "0"),
        _ => None,
    }
}

/// The public subset of a VK user returned to the browser.
///
/// Deserializing from a VK user object drops every other field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub photo_200: String,
}
