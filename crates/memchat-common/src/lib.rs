pub mod errors;
pub mod id;

pub use errors::{ConfigError, MemchatError};
pub use id::{new_id, SessionId};

pub type Result<T> = std::result::Result<T, MemchatError>;
