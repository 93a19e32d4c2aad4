use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use business::domain::student_call::use_cases::purge_expired::{
    PurgeExpiredCallsParams, PurgeExpiredCallsUseCase,
};

use crate::config::cleanup_config::CleanupConfig;

/// Spawns the periodic sweep of expired calls. The first sweep runs right
/// away. The task runs for the lifetime of the process; a failed sweep is
/// logged and retried on the next tick.
pub fn spawn_cleanup(
    use_case: Arc<dyn PurgeExpiredCallsUseCase>,
    config: CleanupConfig,
) -> JoinHandle<()> {
    tracing::info!(
        interval_secs = config.interval.as_secs(),
        max_age_minutes = config.max_age.num_minutes(),
        "Starting expired-call cleanup"
    );

    tokio::spawn(async move {
        let mut ticker = interval(config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let params = PurgeExpiredCallsParams {
                max_age: config.max_age,
            };
            match use_case.execute(params).await {
                Ok(0) => tracing::debug!("No expired calls"),
                Ok(count) => tracing::info!(count, "Expired calls removed"),
                Err(err) => tracing::warn!("Expired-call cleanup failed: {}", err),
            }
        }
    })
}
