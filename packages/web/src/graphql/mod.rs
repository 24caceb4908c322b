//! GraphQL client for communicating with the API server

mod client;
mod mutations;

pub use client::*;
pub use mutations::*;
