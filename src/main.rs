use migration::MigratorTrait;
use sea_orm::Database;

use huginn::client::ApiClient;
use huginn::config::Config;
use huginn::error::Error;
use huginn::service::import::CorpImportService;
use huginn::service::sync::AllianceSyncService;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("sync failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let db = Database::connect(&config.database_url).await?;
    migration::Migrator::up(&db, None).await?;

    let api_client = ApiClient::new(&config.api_url, &config.user_agent)?;

    let stats = AllianceSyncService::new(&db, &api_client)
        .sync_alliances()
        .await?;
    tracing::info!(
        alliances = stats.alliances,
        member_corporations = stats.member_corporations,
        cleared_memberships = stats.cleared_memberships,
        "alliance sync complete"
    );

    if config.import_corps {
        let stats = CorpImportService::new(&db, &api_client)
            .import_alliance_corporations()
            .await?;
        tracing::info!(
            alliances = stats.alliances,
            corporations = stats.corporations,
            "corporation import complete"
        );
    }

    Ok(())
}
