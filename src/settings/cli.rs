use super::Parser;

/// VK identity resolver service.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Path to a TOML settings file (extension optional).
    #[arg(long)]
    pub settings: Option<String>,
}
