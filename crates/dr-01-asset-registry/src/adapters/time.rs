use crate::ports::outbound::TimeSource;
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;

/// Default time source using system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward.
    pub fn advance_secs(&self, secs: i64) {
        *self.now.lock() += Duration::seconds(secs);
    }
}

impl Default for ManualClock {
    /// 2024-01-01 00:00:00 UTC.
    fn default() -> Self {
        Self::new(Utc.timestamp_opt(1_704_067_200, 0).single().unwrap_or_default())
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
