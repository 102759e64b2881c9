pub mod mock;
pub mod postgres;
pub mod system_clock;

pub use system_clock::SystemClock;
