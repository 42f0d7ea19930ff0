use echo_server::{banner::banner, logging, Config, ServerError};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    logging::init();

    let config = Config::default();
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    println!("{}", banner(&config));
    info!(%addr, "listening");

    echo_server::run_until(listener, shutdown_signal()).await?;

    println!("\n\nServer stopped.");
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("interrupt received, stopping listener"),
        Err(err) => {
            // Without a signal handler the only way out is killing the process.
            error!(%err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
