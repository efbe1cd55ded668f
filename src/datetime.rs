//! Date/time utilities for filedrop.

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::SystemTime;

/// Format a filesystem timestamp as an RFC3339 UTC string.
///
/// This is used for Web API responses where clients expect RFC3339
/// timestamps (e.g., "2024-01-15T10:30:00Z").
pub fn to_rfc3339(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Secs, true)
}
