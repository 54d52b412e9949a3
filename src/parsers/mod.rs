pub mod deserializers;
pub mod session;

pub use session::parse_session_file;
