use std::sync::Arc;

use crate::alarm::AlarmRegistry;
use crate::state::AppState;

use super::alarm::handle_alarm;

pub async fn handle_installed(state: Arc<AppState>, alarms: Arc<AlarmRegistry>) {
    tracing::info!("Vocabulary daemon installed/updated.");

    match state.scheduler.on_installed().await {
        Ok(true) => tracing::info!("Store initialised with defaults"),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to initialise store: {}", e),
    }

    let (name, delay, period) = {
        let config = state.config.read().await;
        (
            config.alarm.name.clone(),
            config.alarm.delay(),
            config.alarm.period(),
        )
    };
    alarms.create(&name, delay, period);

    handle_alarm(state).await;
}
