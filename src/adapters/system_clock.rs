use crate::ports::clock::Clock;
use chrono::{DateTime, Utc};

/// Wall clock implementation of Clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
