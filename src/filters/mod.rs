pub mod noise;

pub use noise::{SkipReason, evaluate};
