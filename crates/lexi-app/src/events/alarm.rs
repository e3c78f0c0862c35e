use std::sync::Arc;

use lexi_core::TickOutcome;

use crate::state::AppState;

/// Run one word tick. Failures end the tick quietly.
pub async fn handle_alarm(state: Arc<AppState>) {
    match state.scheduler.handle_alarm().await {
        Ok(TickOutcome::Presented(choice)) => {
            tracing::debug!("Tick presented {:?}", choice);
        }
        Ok(TickOutcome::FetchFailed(choice)) => {
            tracing::debug!("No definition for {}, nothing shown this cycle", choice.word);
        }
        Ok(outcome) => tracing::debug!("Tick ended: {:?}", outcome),
        Err(e) => tracing::error!("Alarm tick failed: {}", e),
    }
}
