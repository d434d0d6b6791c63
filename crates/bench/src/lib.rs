mod clock;
mod comparator;
mod harness;

pub use clock::{Clock, MonotonicClock};
pub use comparator::{compare, rank};
pub use harness::{time_engine, TimedRun};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
