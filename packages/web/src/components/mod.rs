//! Persistent chrome and shared UI components

mod footer;
mod frame;
mod loading;
mod navbar;

pub use footer::*;
pub use frame::*;
pub use loading::*;
pub use navbar::*;
