//! Dunes Backend Library
//!
//! Core library modules shared by the `appstore` and `cms` binaries.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod seed;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::{CmsState, StoreState};

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
