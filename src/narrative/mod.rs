pub mod extractor;

pub use extractor::{ASSISTANT_TURN_LIMIT, USER_TURN_LIMIT, extract_narrative};
