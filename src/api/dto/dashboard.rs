//! Dashboard and profile response envelopes for the CMS API.
//!
//! Each envelope carries `success: true` plus the aggregated result sets
//! its service counterpart composed; the row structs serialize as-is.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::cms::Club;
use crate::models::dashboard::{
    AthleteGameRow, AthleteProfile, CareerStats, ClubCoachRow, ClubPlayerRow, CoachAthleteRow,
    CoachProfile, ManagerCoachRow, ManagerPlayerRow, ManagerProfile, NewsItem,
};
use crate::services::{AthleteDashboard, ClubDashboard, CoachDashboard, ManagerDashboard};

/// One club row as exposed by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClubInfo {
    pub club_id: i32,
    #[schema(example = "Phoenix Vipers")]
    pub name: String,
    #[schema(example = "Phoenix, AZ")]
    pub location: String,
    pub founded_year: Option<i32>,
    pub contact_email: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub logo_url: Option<String>,
}

impl From<Club> for ClubInfo {
    fn from(club: Club) -> Self {
        Self {
            club_id: club.club_id,
            name: club.name,
            location: club.location,
            founded_year: club.founded_year,
            contact_email: club.contact_email,
            website: club.website,
            bio: club.bio,
            logo_url: club.logo_url,
        }
    }
}

/// Athlete dashboard payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct AthleteDashboardResponse {
    pub success: bool,
    pub athlete: AthleteProfile,
    pub statistics: CareerStats,
    pub club: Option<ClubInfo>,
    pub news: Vec<NewsItem>,
    pub recent_games: Vec<AthleteGameRow>,
}

impl From<AthleteDashboard> for AthleteDashboardResponse {
    fn from(dashboard: AthleteDashboard) -> Self {
        Self {
            success: true,
            athlete: dashboard.athlete,
            statistics: dashboard.statistics,
            club: dashboard.club.map(ClubInfo::from),
            news: dashboard.news,
            recent_games: dashboard.recent_games,
        }
    }
}

/// Athlete profile payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct AthleteProfileResponse {
    pub success: bool,
    pub athlete: AthleteProfile,
}

impl From<AthleteProfile> for AthleteProfileResponse {
    fn from(athlete: AthleteProfile) -> Self {
        Self {
            success: true,
            athlete,
        }
    }
}

/// Coach dashboard payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoachDashboardResponse {
    pub success: bool,
    pub coach: CoachProfile,
    pub club: Option<ClubInfo>,
    pub athletes: Vec<CoachAthleteRow>,
    pub news: Vec<NewsItem>,
}

impl From<CoachDashboard> for CoachDashboardResponse {
    fn from(dashboard: CoachDashboard) -> Self {
        Self {
            success: true,
            coach: dashboard.coach,
            club: dashboard.club.map(ClubInfo::from),
            athletes: dashboard.athletes,
            news: dashboard.news,
        }
    }
}

/// Coach profile payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoachProfileResponse {
    pub success: bool,
    pub coach: CoachProfile,
}

impl From<CoachProfile> for CoachProfileResponse {
    fn from(coach: CoachProfile) -> Self {
        Self {
            success: true,
            coach,
        }
    }
}

/// Club dashboard payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClubDashboardResponse {
    pub success: bool,
    pub club: ClubInfo,
    pub coaches: Vec<ClubCoachRow>,
    pub players: Vec<ClubPlayerRow>,
    pub news: Vec<NewsItem>,
}

impl From<ClubDashboard> for ClubDashboardResponse {
    fn from(dashboard: ClubDashboard) -> Self {
        Self {
            success: true,
            club: dashboard.club.into(),
            coaches: dashboard.coaches,
            players: dashboard.players,
            news: dashboard.news,
        }
    }
}

/// Single-club info payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClubInfoResponse {
    pub success: bool,
    pub club: ClubInfo,
}

impl From<Club> for ClubInfoResponse {
    fn from(club: Club) -> Self {
        Self {
            success: true,
            club: club.into(),
        }
    }
}

/// Manager dashboard payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ManagerDashboardResponse {
    pub success: bool,
    pub manager: ManagerProfile,
    pub club: Option<ClubInfo>,
    pub coaches: Vec<ManagerCoachRow>,
    pub players: Vec<ManagerPlayerRow>,
    pub news: Vec<NewsItem>,
}

impl From<ManagerDashboard> for ManagerDashboardResponse {
    fn from(dashboard: ManagerDashboard) -> Self {
        Self {
            success: true,
            manager: dashboard.manager,
            club: dashboard.club.map(ClubInfo::from),
            coaches: dashboard.coaches,
            players: dashboard.players,
            news: dashboard.news,
        }
    }
}

/// Manager profile payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ManagerProfileResponse {
    pub success: bool,
    pub manager: ManagerProfile,
}

impl From<ManagerProfile> for ManagerProfileResponse {
    fn from(manager: ManagerProfile) -> Self {
        Self {
            success: true,
            manager,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_club() -> Club {
        Club {
            club_id: 2,
            name: "Miami Heat Squad".to_string(),
            location: "Miami, FL".to_string(),
            founded_year: Some(2020),
            contact_email: Some("info@miamiheatsquad.com".to_string()),
            website: Some("www.miamiheatsquad.com".to_string()),
            bio: None,
            logo_url: None,
        }
    }

    #[test]
    fn test_club_info_keeps_all_columns() {
        let json = serde_json::to_value(ClubInfo::from(sample_club())).unwrap();
        assert_eq!(json["club_id"], 2);
        assert_eq!(json["name"], "Miami Heat Squad");
        assert_eq!(json["founded_year"], 2020);
        assert_eq!(json["logo_url"], serde_json::Value::Null);
    }

    #[test]
    fn test_club_info_response_sets_success() {
        let json = serde_json::to_value(ClubInfoResponse::from(sample_club())).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["club"]["location"], "Miami, FL");
    }
}
