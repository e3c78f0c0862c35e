use std::sync::Arc;

use chrono::NaiveDate;
use lexi_types::QuotaState;
use serde_json::json;

use crate::clock::Clock;
use crate::error::StoreError;
use crate::store::{self, KeyValueStore, keys};

/// A reserved daily slot. Carries the count observed at reservation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct QuotaSlot {
    shown_before: u32,
}

impl QuotaSlot {
    pub fn shown_before(&self) -> u32 {
        self.shown_before
    }
}

/// Gates presentations against the daily goal
#[derive(Clone)]
pub struct QuotaTracker {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    default_goal: u32,
}

impl QuotaTracker {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, default_goal: u32) -> Self {
        Self {
            store,
            clock,
            default_goal,
        }
    }

    pub fn default_goal(&self) -> u32 {
        self.default_goal
    }

    pub async fn load_state(&self) -> Result<QuotaState, StoreError> {
        let store = &*self.store;

        let daily_goal = store::get_as::<u32>(store, keys::DAILY_GOAL)
            .await?
            .unwrap_or(self.default_goal);
        let words_shown_today = store::get_as::<u32>(store, keys::WORDS_SHOWN_TODAY)
            .await?
            .unwrap_or(0);
        let last_shown_date = store::get_as::<NaiveDate>(store, keys::LAST_SHOWN_DATE).await?;

        Ok(QuotaState {
            daily_goal,
            words_shown_today,
            last_shown_date,
        })
    }

    pub async fn daily_goal(&self) -> Result<u32, StoreError> {
        Ok(store::get_as::<u32>(&*self.store, keys::DAILY_GOAL)
            .await?
            .unwrap_or(self.default_goal))
    }

    pub async fn set_daily_goal(&self, goal: u32) -> Result<(), StoreError> {
        self.store.set(keys::DAILY_GOAL, json!(goal)).await
    }

    /// Zero the counter when the stored date is not today. The reset is
    /// persisted immediately so it survives a failed presentation.
    pub async fn reset_if_new_day(&self) -> Result<QuotaState, StoreError> {
        let mut state = self.load_state().await?;
        let today = self.clock.today();

        if state.last_shown_date != Some(today) {
            tracing::info!("New day detected. Resetting daily word count.");
            self.store
                .set_many(vec![
                    (keys::WORDS_SHOWN_TODAY.to_string(), json!(0)),
                    (keys::LAST_SHOWN_DATE.to_string(), json!(today)),
                ])
                .await?;
            state.words_shown_today = 0;
            state.last_shown_date = Some(today);
        }

        Ok(state)
    }

    /// Reserve a slot if today's count is under the goal. Nothing is locked:
    /// overlapping callers may both observe the same count.
    pub async fn check_and_reserve_slot(&self) -> Result<Option<QuotaSlot>, StoreError> {
        let state = self.reset_if_new_day().await?;

        if state.words_shown_today < state.daily_goal {
            tracing::info!(
                "Words shown today: {}. Goal: {}.",
                state.words_shown_today,
                state.daily_goal
            );
            Ok(Some(QuotaSlot {
                shown_before: state.words_shown_today,
            }))
        } else {
            tracing::info!("Daily word goal reached. No new word will be fetched until tomorrow.");
            Ok(None)
        }
    }

    /// Count a successful presentation against the slot's snapshot
    pub async fn commit(&self, slot: QuotaSlot) -> Result<(), StoreError> {
        self.store
            .set(keys::WORDS_SHOWN_TODAY, json!(slot.shown_before + 1))
            .await
    }
}
