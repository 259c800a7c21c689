//! Enumerations shared by the argument records.

mod method;
mod time_unit;

pub use method::Method;
pub use time_unit::TimeUnit;
