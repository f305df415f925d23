use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::{config::Config, service::share::ShareClient};

use super::config::SHARE_CRON_EXPRESSION;

/// Initialize and start the cron job scheduler
///
/// Registers the single daily share job and starts the scheduler, returning a
/// handle to it. Outside production nothing is registered and no timer exists;
/// `None` is returned. The job invokes the share client fire-and-forget: the
/// outcome is logged and dropped, with no retry or overlap guard.
pub async fn start_scheduler(
    config: &Config,
    share_client: Arc<dyn ShareClient>,
) -> Result<Option<JobScheduler>, JobSchedulerError> {
    if !config.is_production() {
        tracing::debug!("Not in production, skipping share job registration");

        return Ok(None);
    }

    let sched = JobScheduler::new().await?;

    sched
        .add(Job::new_async(SHARE_CRON_EXPRESSION, move |_, _| {
            let share_client = share_client.clone();

            Box::pin(async move {
                match share_client.share().await {
                    Ok(()) => tracing::info!("Posted daily share"),
                    Err(e) => tracing::error!("Error posting daily share: {:?}", e),
                }
            })
        })?)
        .await?;

    sched.start().await?;

    Ok(Some(sched))
}
