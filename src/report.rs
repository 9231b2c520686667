// Imports all of the components needed for the daily report
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Slack webhook `Notifier`.
mod notifier;

/// The `Report` computed from a `ResultSet`.
mod total;

pub use notifier::*;
pub use total::*;
