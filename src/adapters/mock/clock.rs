use crate::ports::clock::Clock;
use chrono::{DateTime, Utc};

/// Mock implementation of Clock
///
/// Always returns the time it was created with.
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
