pub mod catalog;
pub mod clock;
pub mod error;
pub mod ledger;
pub mod notify;
pub mod quota;
pub mod scheduler;
pub mod selector;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CatalogError, StoreError};
pub use ledger::{LedgerUpdate, SeenLedger};
pub use notify::{NotificationStyle, Notifier};
pub use quota::{QuotaSlot, QuotaTracker};
pub use scheduler::{SchedulerStatus, TickOutcome, WordScheduler};
pub use selector::{SelectionPolicy, WordSelector};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
