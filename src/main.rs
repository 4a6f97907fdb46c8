mod model;
mod server;

use axum::http::{header, HeaderValue, Method};
use tokio_cron_scheduler::JobScheduler;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    logging, router,
    scheduler::{maintenance, todo_reminders},
    service::{admin::code::AdminCodeService, email::EmailService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    logging::init_logging(config.log_file.as_deref())?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let email = EmailService::from_config(config.smtp.as_ref())?;

    let admin_code_service = AdminCodeService::new();
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    startup::run_seed(&db, &config).await?;

    let mut scheduler = JobScheduler::new().await?;
    todo_reminders::add_job(
        &scheduler,
        db.clone(),
        email.clone(),
        config.todo_reminder_lead_minutes,
    )
    .await?;
    maintenance::add_job(&scheduler, db.clone()).await?;
    scheduler.start().await?;

    let origin = config
        .app_url
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            value: config.app_url.clone(),
        })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = router::router()
        .with_state(AppState::new(
            db,
            email,
            admin_code_service,
            config.auth.clone(),
        ))
        .layer(session)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown().await?;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
