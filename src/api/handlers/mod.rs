//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.
//! Store handlers build `OpenApiRouter<StoreState>` routers, CMS handlers
//! build `OpenApiRouter<CmsState>` routers.

pub mod apps;
pub mod athletes;
pub mod auth;
pub mod clubs;
pub mod coaches;
pub mod health;
pub mod managers;
pub mod store_auth;
pub mod versions;
