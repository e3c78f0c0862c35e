use std::sync::Arc;

use kanal::AsyncReceiver;
use lexi_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::alarm::AlarmRegistry;
use crate::state::AppState;

pub mod alarm;
pub mod installed;

use alarm::handle_alarm;
use installed::handle_installed;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    event_rx: AsyncReceiver<AppEvent>,
    alarms: Arc<AlarmRegistry>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("Event loop started");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = event_rx.recv() => event?,
        };

        handle_events(&state, &alarms, event).await;
    }

    tracing::info!("Event loop stopped");
    Ok(())
}

/// Dispatch one event. Handlers run as their own tasks and may overlap.
async fn handle_events(state: &Arc<AppState>, alarms: &Arc<AlarmRegistry>, event: AppEvent) {
    match event {
        AppEvent::Installed => {
            tokio::spawn(handle_installed(state.clone(), alarms.clone()));
        }
        AppEvent::Alarm { name } => {
            let word_alarm = state.config.read().await.alarm.name.clone();
            if name == word_alarm {
                tokio::spawn(handle_alarm(state.clone()));
            } else {
                tracing::debug!("Ignoring alarm {}", name);
            }
        }
    }
}
