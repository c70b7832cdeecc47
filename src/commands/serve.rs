use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::{
    api::health_checks::ok, app::App, config::Config, database::setup_database,
    environment::Environment, router::router,
};

pub async fn handle_serve_command(environment: Environment, config: Config) {
    if config.jwt.secret.is_empty() {
        error!("❌ jwt.secret is not configured; refusing to start");
        return;
    }

    let port = config.server.port;

    // Answer liveness probes while migrations run
    let liveness_server_task = tokio::spawn(start_liveness_server(port));

    let (db, migration_receiver) = match setup_database(&config.database).await {
        Ok(setup) => setup,
        Err(e) => {
            error!("❌ Failed to connect to the database: {}", e);
            liveness_server_task.abort();
            return;
        }
    };

    match migration_receiver.await {
        Ok(Ok(())) => {
            info!("✅ Database is ready!");
        }
        Ok(Err(e)) => {
            error!("❌ Database setup failed: {}", e);
            liveness_server_task.abort();
            return;
        }
        Err(_) => {
            error!("❌ Database setup channel closed unexpectedly");
            liveness_server_task.abort();
            return;
        }
    }

    let app = App {
        config,
        environment,
        db,
    };

    // Free the port for the full server
    liveness_server_task.abort();
    let _ = liveness_server_task.await;

    if let Err(e) = start_server(router(app), port).await {
        error!("❌ Server error: {}", e);
    }
}

async fn start_liveness_server(port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            warn!("Liveness server could not bind {}: {}", addr, e);
            return;
        }
    };

    let migration_router = Router::new().route("/liveness", get(ok));
    if let Err(e) = axum::serve(listener, migration_router).await {
        warn!("Liveness server stopped: {}", e);
    }
}

async fn start_server(router: Router, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!("🌐 Server starting on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    info!("Shutting down");
}
