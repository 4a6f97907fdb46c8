use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{email::EmailService, todo::TodoService},
};

/// Adds the to-do reminder job to `scheduler`.
///
/// Runs every minute and reminds users of open to-dos due within `lead_minutes`.
///
/// # Arguments
/// - `scheduler`: Scheduler the job is added to
/// - `db`: Database connection
/// - `email`: Email service used for reminder emails
/// - `lead_minutes`: How long before a to-do is due its reminder goes out
pub async fn add_job(
    scheduler: &JobScheduler,
    db: DatabaseConnection,
    email: EmailService,
    lead_minutes: i64,
) -> Result<(), AppError> {
    let lead = Duration::minutes(lead_minutes);

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let email = email.clone();

        Box::pin(async move {
            match TodoService::new(&db)
                .send_due_reminders(&email, Utc::now(), lead)
                .await
            {
                Ok(0) => {}
                Ok(sent) => tracing::info!("Sent {} to-do reminders", sent),
                Err(e) => tracing::error!("Error sending to-do reminders: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;

    Ok(())
}
