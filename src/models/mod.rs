//! Database models, one module per service plus the dashboard query rows.

pub mod cms;
pub mod dashboard;
pub mod store;
