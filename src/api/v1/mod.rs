mod error;
mod handler;
mod router;

pub use error::{ApiError, ErrorBody, recover_error};
pub use router::routes;
