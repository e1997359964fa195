//! GraphQL client for communicating with the API server

mod client;

pub use client::*;
