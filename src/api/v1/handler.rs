use super::error::*;
use crate::application_port::IdentityResolver;
use crate::domain_model::ResolveRequest;
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, Span, field};
use warp::hyper::body::Bytes;
use warp::{self, reject};

pub async fn vk_user_info(
    body: Bytes,
    identity_resolver: Arc<dyn IdentityResolver>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let span = tracing::info_span!(
        "vk_user_info",
        request_id = %uuid::Uuid::new_v4(),
        user_id = field::Empty,
    );
    async move {
        let body: Value = serde_json::from_slice(&body)
            .map_err(ApiError::internal)
            .map_err(reject::custom)?;
        if let Some(user_id) = span_user_id(&body) {
            Span::current().record("user_id", field::display(user_id));
        }

        let profile = identity_resolver
            .resolve(&body)
            .await
            .map_err(ApiError::from)
            .map_err(reject::custom)?;

        tracing::info!(vk_id = profile.id, "resolved VK profile");
        Ok::<_, warp::Rejection>(warp::reply::json(&profile))
    }
    .instrument(span)
    .await
}

/// The VK user id as it will be sent upstream, if the body is valid.
fn span_user_id(body: &Value) -> Option<String> {
    ResolveRequest::from_body(body).map(|request| request.user_id)
}
