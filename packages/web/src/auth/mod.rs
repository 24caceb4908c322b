//! Authentication scope: context provider, server functions and token claims

mod claims;
mod context;
mod server_fns;

pub use claims::*;
pub use context::*;
pub use server_fns::*;
