use activity_signup::modules::activities::adapters::outbound::registry_in_memory::InMemoryActivityRegistry;
use activity_signup::shell::config::Config;
use activity_signup::shell::http::router;
use activity_signup::shell::state::AppState;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let state = AppState {
        registry: Arc::new(InMemoryActivityRegistry::seeded()),
    };
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
