//! API request handlers.

mod credential;
mod format;
mod session;

pub use credential::*;
pub use format::*;
pub use session::*;
