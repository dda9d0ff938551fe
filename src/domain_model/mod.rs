mod access_token;
mod profile;

pub use access_token::*;
pub use profile::*;
