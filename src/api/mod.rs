pub mod v1;

use crate::server::Server;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;
use warp::http::Method;
use warp::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, HeaderMap, HeaderValue,
};

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Every route the service exposes, with errors already recovered into
/// JSON replies. Cross-origin headers are attached to all of them.
pub fn filters(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    // Non-OPTIONS requests fall through as "not found" so they never mask
    // a more specific rejection from the routes below.
    let preflight = warp::method().and_then(|method: Method| async move {
        if method == Method::OPTIONS {
            Ok("ok")
        } else {
            Err(warp::reject::not_found())
        }
    });

    let functions = warp::path("functions")
        .and(warp::path("v1"))
        .and(v1::routes(server));

    preflight
        .or(functions)
        .recover(v1::recover_error)
        .with(warp::reply::with::headers(cors_headers()))
        .with(warp::trace::request())
}

pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers
}
