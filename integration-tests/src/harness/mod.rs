mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, fixture_lines, render};
pub use self::tracing::{CapturedEvent, init_test_tracing};
