use pagely::{AppState, Config, database, router, services};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    tracing::info!("Loaded configuration:\n{}", config);

    let pool = database::connect(&config.database.url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    {
        let mut conn = pool.acquire().await?;

        let removed = services::sessions::cleanup_expired_sessions(&mut conn).await?;
        if removed > 0 {
            tracing::info!(removed, "Swept expired sessions");
        }

        if config.seed.enabled {
            services::users::seed_default_user(
                &mut conn,
                &config.seed.username,
                &config.seed.password,
            )
            .await?;
        }
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening");

    let state = AppState::new(pool, config);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
