use rallylink::server::{
    config::Config, error::Error, model::app::AppState, router, service::auth::JwtAuthenticator,
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let fetcher = startup::build_fetcher(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let authenticator = JwtAuthenticator::new(&config.jwt_secret);

    let app = router::routes().with_state(AppState {
        db,
        fetcher,
        authenticator,
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!(
        "Starting server on {}, scraping {}",
        config.bind_address,
        config.scrape_base_url
    );

    axum::serve(listener, app).await?;

    Ok(())
}
