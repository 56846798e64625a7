use backend::{routes, shared, system};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let state = system::initialization::initialize(&config).await?;
    let app = routes::configure_routes(state);

    let addr = config.server.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    println!("{}", "=".repeat(60));
    println!("Furniture Pro - Система управления производством");
    println!("Сервер доступен по адресу: http://{}", addr);
    println!("{}", "=".repeat(60));

    axum::serve(listener, app).await?;

    Ok(())
}
