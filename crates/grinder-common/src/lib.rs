pub mod errors;
pub mod types;

pub use errors::{ConfigError, GrinderError, PathSegment, ValidationError, ViolationKind};
pub use types::{Choice, ClosedSet, OnlineStatus};

pub type Result<T> = std::result::Result<T, GrinderError>;
