pub mod errors;

pub use errors::{ConfigError, PictionaiError};

pub type Result<T> = std::result::Result<T, PictionaiError>;
