//! Shared value types: closed reference sets and the `Choice` wrapper
//! that keeps out-of-set values around until validation reports them.

mod closed;
mod status;

pub use closed::{Choice, ClosedSet, UnknownName};
pub use status::OnlineStatus;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
