use business::domain::bootstrap::client::ClientProvider;
use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use api::security::AuthSettings;
use config::app_config::AppConfig;
use setup::{cleanup::spawn_cleanup, dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, bootstraps the document-store client, starts
/// the expired-call cleanup and runs the HTTP server.
///
/// - config/: Application configuration (server, CORS, cleanup, auth, service)
/// - setup/: Dependency injection, background cleanup and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new();

    // 5. Refuse to start without a usable document-store configuration
    let client = container.clients.get_client().await?;
    let auth = AuthSettings {
        project_id: client.project_id().to_string(),
        allowed_email_domain: config.auth.allowed_email_domain.clone(),
    };

    // 6. Start removing expired calls
    spawn_cleanup(
        container.purge_expired_use_case.clone(),
        config.cleanup.clone(),
    );

    // 7. Run server
    Server::run(config, container, auth).await?;

    Ok(())
}
