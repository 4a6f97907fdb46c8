use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::user_token::UserTokenRepository, error::AppError};

/// Adds the hourly job that purges expired confirmation and reset tokens.
pub async fn add_job(scheduler: &JobScheduler, db: DatabaseConnection) -> Result<(), AppError> {
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match UserTokenRepository::new(&db).delete_expired(Utc::now()).await {
                Ok(0) => {}
                Ok(deleted) => tracing::debug!("Purged {} expired user tokens", deleted),
                Err(e) => tracing::error!("Error purging expired user tokens: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;

    Ok(())
}
