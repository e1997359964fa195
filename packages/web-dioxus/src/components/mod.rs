//! Reusable UI components

mod gate;
mod header;
mod loading;
mod toasts;

pub use gate::*;
pub use header::*;
pub use loading::*;
pub use toasts::*;
