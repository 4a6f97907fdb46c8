use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, SeedSource},
    data::user::UserRepository,
    error::AppError,
    seed::{
        provider::{HardcodedSeedProvider, JsonSeedProvider, SeedProvider},
        seeder::Seeder,
    },
    service::admin::code::AdminCodeService,
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before anything else touches the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite database.
///
/// Sessions are stored in their own table, created on first start, and expire after
/// seven days without a request. Cookies are marked secure when the application is
/// served over https.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    let layer = SessionManagerLayer::new(store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok(layer)
}

/// Generates and logs an admin code when no admin account exists.
///
/// The code lets the first registration become admin without touching the database.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin account exists. Register at {} with admin code {} within the next 15 minutes to become admin.",
        config.app_url,
        code
    );

    Ok(())
}

/// Seeds reference data according to `SEED_SOURCE`.
pub async fn run_seed(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let provider: Box<dyn SeedProvider> = match &config.seed_source {
        SeedSource::None => return Ok(()),
        SeedSource::Hardcoded => Box::new(HardcodedSeedProvider),
        SeedSource::Json(path) => Box::new(JsonSeedProvider::new(path.clone())),
    };

    Seeder::new(db).run(provider.as_ref()).await?;

    Ok(())
}
