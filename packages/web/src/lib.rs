//! Job Board - Dioxus Fullstack Web Application
//!
//! The crate root exposes the application shell and the pieces it composes:
//! theme, authentication scope, route table, persistent chrome and pages.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod graphql;
pub mod pages;
pub mod routes;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod theme;
pub mod types;

pub use app::App;
