use vk_resolver::domain_model::AccessToken;
use vk_resolver::logger::*;
use vk_resolver::settings::Log;

// $ cargo run --bin logger_demo
// The second batch should include debug lines, and no line should show the token.
fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap();
    let token = AccessToken::new("vk1.a.demo-secret");
    debug!(?token, "bootstrap debug log");
    info!(?token, "bootstrap info log");

    let log = Log {
        filter: "debug".to_string(),
    };
    logger.reload_from_settings(&log)?;
    trace!(?token, "application trace log");
    debug!(?token, "application debug log");
    info!(?token, "application info log");

    Ok(())
}
