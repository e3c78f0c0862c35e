use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use kanal::AsyncSender;
use lexi_types::AppEvent;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Named recurring timers feeding `AppEvent::Alarm` into the event loop
pub struct AlarmRegistry {
    alarms: Mutex<HashMap<String, CancellationToken>>,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
}

impl AlarmRegistry {
    pub fn new(event_tx: AsyncSender<AppEvent>, cancel: CancellationToken) -> Self {
        Self {
            alarms: Mutex::new(HashMap::new()),
            event_tx,
            cancel,
        }
    }

    /// Start `name`, replacing any alarm already registered under it
    pub fn create(&self, name: &str, delay: Duration, period: Duration) {
        let token = self.cancel.child_token();

        let previous = self
            .alarms
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), token.clone());

        if let Some(previous) = previous {
            tracing::debug!("Replacing alarm {}", name);
            previous.cancel();
        }

        tracing::info!(
            "Alarm {} scheduled: first in {:?}, then every {:?}",
            name,
            delay,
            period
        );

        tokio::spawn(run_alarm(
            name.to_string(),
            delay,
            period,
            token,
            self.event_tx.clone(),
        ));
    }

    #[cfg(test)]
    pub fn clear(&self, name: &str) -> bool {
        let removed = self
            .alarms
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(name);

        match removed {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> Vec<String> {
        let alarms = self.alarms.lock().unwrap_or_else(|e| e.into_inner());
        let mut names: Vec<String> = alarms.keys().cloned().collect();
        names.sort();
        names
    }
}

async fn run_alarm(
    name: String,
    delay: Duration,
    period: Duration,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) {
    let mut interval = tokio::time::interval_at(Instant::now() + delay, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                tracing::debug!("Alarm {} fired", name);
                if event_tx.send(AppEvent::Alarm { name: name.clone() }).await.is_err() {
                    break;
                }
            }
        }
    }

    tracing::debug!("Alarm {} stopped", name);
}
