//! Conversion orchestration: input selection, the per-file pipeline, and
//! the sequential batch loop.

pub mod pipeline;
pub mod selection;

pub use pipeline::{BatchSummary, Outcome, process_session, run_batch};
pub use selection::{all_sessions, sessions_for_date, yesterday};
