//! Layered service settings: a TOML file overridden by `VK_RESOLVER__*`
//! environment variables.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
