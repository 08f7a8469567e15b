use std::time::{Duration, SystemTime};

use chrono::{DateTime, Timelike, Utc};
use fuzzy_gui::fuzzy_time::TickUnit;

/// System clock, set by SNTP.
pub fn get_time() -> DateTime<Utc> {
    DateTime::<Utc>::from(SystemTime::now())
}

/// How long to wait for the next minute (or second) to start.
pub fn until_next_tick<T: Timelike>(now: &T, unit: TickUnit) -> Duration {
    let into_second = Duration::from_nanos(now.nanosecond().min(999_999_999) as u64);
    let into_period = match unit {
        TickUnit::Minute => Duration::from_secs(now.second().min(59) as u64) + into_second,
        TickUnit::Second => into_second,
    };
    unit.period().saturating_sub(into_period)
}
