use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use vk_resolver::api;
use vk_resolver::logger::*;
use vk_resolver::server::*;
use vk_resolver::settings::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    logger.reload_from_settings(&project_settings.log)?;

    let address: SocketAddr = project_settings.http.address.parse()?;
    let server = Arc::new(Server::try_new(&project_settings)?);
    let routes = api::filters(server);

    match project_settings.http.tls() {
        Some((cert_path, key_path)) => {
            for (what, path) in [("cert", cert_path), ("key", key_path)] {
                if !fs::metadata(path)?.is_file() {
                    return Err(anyhow::anyhow!(
                        "TLS {} is not a regular file: {:?}",
                        what,
                        path
                    ));
                }
            }
            let (bound, serving) = warp::serve(routes)
                .tls()
                .cert_path(cert_path)
                .key_path(key_path)
                .bind_with_graceful_shutdown(address, shutdown_signal());
            info!(%bound, "listening with TLS");
            serving.await;
        }
        None => {
            let (bound, serving) =
                warp::serve(routes).try_bind_with_graceful_shutdown(address, shutdown_signal())?;
            info!(%bound, "listening");
            serving.await;
        }
    }

    info!("server shutdown successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Could not register SIGINT: {}", e);
        std::future::pending::<()>().await;
    }
}
