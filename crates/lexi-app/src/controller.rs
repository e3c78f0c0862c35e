use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::alarm::AlarmRegistry;
use crate::events::event_loop;
use crate::state::AppState;

/// Application controller for task spawning and lifecycle
pub struct AppController {
    events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    state: Arc<AppState>,
    alarms: Arc<AlarmRegistry>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        let events = kanal::bounded_async(64);
        let cancel_token = CancellationToken::new();
        let alarms = Arc::new(AlarmRegistry::new(
            events.0.clone(),
            cancel_token.child_token(),
        ));

        Self {
            events,
            state,
            alarms,
            cancel_token,
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.events.1.clone(),
            self.alarms.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    /// Emit the startup event
    pub async fn install(&self) -> anyhow::Result<()> {
        self.events.0.send(AppEvent::Installed).await?;
        Ok(())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
