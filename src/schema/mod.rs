//! Diesel table definitions, one schema per service database.

pub mod cms;
pub mod store;
