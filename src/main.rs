use rusty_stock_viewer::catalog::list_symbols;
use rusty_stock_viewer::config::Config;
use rusty_stock_viewer::server::{router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let symbols = list_symbols(&config.stocks_dir);
    tracing::info!(
        "serving {} symbols from {}",
        symbols.len(),
        config.stocks_dir.display()
    );

    let app = router(AppState::new(&config));

    let addr = config.addr();
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
