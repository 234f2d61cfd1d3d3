//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `auth` - CMS authentication request/response DTOs
//! - `dashboard` - CMS dashboard/profile response envelopes
//! - `error` - Common error response DTOs
//! - `health` - Health check and service index DTOs
//! - `store` - App store catalog and version DTOs

mod auth;
mod dashboard;
mod error;
mod health;
mod store;

pub use auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, MeResponse, MessageResponse,
    RegisterRequest, RegisterResponse, UserDetail, UserInfo, VerifyTokenRequest,
    VerifyTokenResponse,
};
pub use dashboard::{
    AthleteDashboardResponse, AthleteProfileResponse, ClubDashboardResponse, ClubInfo,
    ClubInfoResponse, CoachDashboardResponse, CoachProfileResponse, ManagerDashboardResponse,
    ManagerProfileResponse,
};
pub use error::ErrorResponse;
pub use health::{ApiIndexResponse, CmsHealthResponse, StoreHealthResponse};
pub use store::{AppResponse, LatestVersionQuery, TokenResponse, VersionInfo};
