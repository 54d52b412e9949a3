pub mod environment;
pub mod timestamps;

pub use environment::{Config, OUTPUT_DIR_ENV, SESSIONS_DIR_ENV};
pub use timestamps::{format_clock, format_day};
