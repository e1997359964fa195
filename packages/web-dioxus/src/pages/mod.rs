//! Page components, one per route table

pub mod anonymous;
pub mod authenticated;

pub use anonymous::*;
pub use authenticated::*;
