use anyhow::Result;
use tlsroot_server::{common::server, route_handlers};
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::oneshot;
use tracing::info;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut signal = signal(SignalKind::interrupt())?;

    let (frontend_terminate_tx, frontend_terminate_rx) = oneshot::channel::<()>();

    let frontend_fut;
    {
        let router = route_handlers::create_router();

        let bind_addr = server::bind_addr();
        let listener = tokio::net::TcpListener::bind(bind_addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        frontend_fut = async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    frontend_terminate_rx.await.ok();
                })
                .await
        };
    }

    let frontend_task = tokio::spawn(frontend_fut);

    signal.recv().await;
    info!("Received process signal.");

    frontend_terminate_tx.send(()).ok();

    frontend_task.await??;
    info!("Frontend exited.");

    Ok(())
}
