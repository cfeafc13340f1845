use std::time::SystemTime;

use chrono::{DateTime, SubsecRound, Utc};

/// Wall-clock timestamp used for embedded-file creation and modification
/// dates. Always UTC.
pub type Timestamp = DateTime<Utc>;

/// The current time, truncated to whole seconds.
///
/// Document dates carry second precision, so sub-second noise is dropped
/// up front to keep records comparable after rendering.
pub fn now() -> Timestamp {
    truncate(Utc::now())
}

/// Convert a filesystem time into a [`Timestamp`], truncated to seconds.
pub fn from_system_time(time: SystemTime) -> Timestamp {
    truncate(DateTime::<Utc>::from(time))
}

/// Drop the sub-second component of `ts`.
pub fn truncate(ts: Timestamp) -> Timestamp {
    ts.trunc_subsecs(0)
}
