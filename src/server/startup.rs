use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    service::scrape::fetch::Fetcher,
};

/// Build the catalog fetcher with the configured user agent and timeout
pub fn build_fetcher(config: &Config) -> Result<Fetcher, ConfigError> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.scrape_timeout)
        .build()
        .map_err(ConfigError::HttpClient)?;

    Ok(Fetcher::new(client, config.scrape_base_url.as_str()))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
