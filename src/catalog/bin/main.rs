use books_catalog::catalog::controller::app;
use books_catalog::catalog::factory;
use books_catalog::core::controller::AppState;
use books_catalog::core::domain::Configuration;
use books_catalog::core::library::LibraryError;
use books_catalog::utils::logs::setup_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let svc = factory::create_catalog_service(&config).await?;
    let addr = config.bind_address();
    tracing::info!(env = %config.env, store = ?config.store, %addr, "starting books service");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app(AppState::new(config, svc)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("books service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
