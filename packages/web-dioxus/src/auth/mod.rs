//! Session state for the route gate

mod context;
mod session;

pub use context::*;
pub use session::*;
