//! Page views mounted by the router

mod about;
mod account;
mod blog;
mod dashboards;
mod home;
mod jobs;
mod unmatched;

pub use about::*;
pub use account::*;
pub use blog::*;
pub use dashboards::*;
pub use home::*;
pub use jobs::*;
pub use unmatched::*;
