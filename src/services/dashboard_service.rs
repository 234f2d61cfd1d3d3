//! Dashboard service composing the aggregated read models for each role.
//!
//! Every dashboard resolves its primary entity first and fails with 404
//! when it is absent; the remaining result sets are fetched sequentially.

use crate::error::{AppError, AppResult};
use crate::models::cms::Club;
use crate::models::dashboard::{
    AthleteGameRow, AthleteProfile, CareerStats, ClubCoachRow, ClubPlayerRow, CoachAthleteRow,
    CoachProfile, ManagerCoachRow, ManagerPlayerRow, ManagerProfile, NewsItem,
};
use crate::repositories::{
    AthleteRepository, ClubRepository, CoachRepository, ManagerRepository, NewsRepository,
};

/// Aggregated athlete dashboard data.
#[derive(Debug, Clone)]
pub struct AthleteDashboard {
    pub athlete: AthleteProfile,
    pub statistics: CareerStats,
    pub club: Option<Club>,
    pub news: Vec<NewsItem>,
    pub recent_games: Vec<AthleteGameRow>,
}

/// Aggregated coach dashboard data.
#[derive(Debug, Clone)]
pub struct CoachDashboard {
    pub coach: CoachProfile,
    pub club: Option<Club>,
    pub athletes: Vec<CoachAthleteRow>,
    pub news: Vec<NewsItem>,
}

/// Aggregated club dashboard data.
#[derive(Debug, Clone)]
pub struct ClubDashboard {
    pub club: Club,
    pub coaches: Vec<ClubCoachRow>,
    pub players: Vec<ClubPlayerRow>,
    pub news: Vec<NewsItem>,
}

/// Aggregated manager dashboard data.
#[derive(Debug, Clone)]
pub struct ManagerDashboard {
    pub manager: ManagerProfile,
    pub club: Option<Club>,
    pub coaches: Vec<ManagerCoachRow>,
    pub players: Vec<ManagerPlayerRow>,
    pub news: Vec<NewsItem>,
}

/// Dashboard service holding the read-side repositories.
#[derive(Clone)]
pub struct DashboardService {
    athletes: AthleteRepository,
    coaches: CoachRepository,
    clubs: ClubRepository,
    managers: ManagerRepository,
    news: NewsRepository,
}

impl DashboardService {
    /// Creates a new DashboardService with the given repositories.
    pub fn new(
        athletes: AthleteRepository,
        coaches: CoachRepository,
        clubs: ClubRepository,
        managers: ManagerRepository,
        news: NewsRepository,
    ) -> Self {
        Self {
            athletes,
            coaches,
            clubs,
            managers,
            news,
        }
    }

    /// Composes the athlete dashboard for a user.
    pub async fn athlete_dashboard(&self, user_id: i32) -> AppResult<AthleteDashboard> {
        let athlete = self
            .athletes
            .find_dashboard_profile(user_id)
            .await?
            .ok_or_else(|| athlete_not_found(user_id))?;

        let statistics = self.athletes.career_stats(athlete.athlete_id).await?;
        let club = self.athletes.find_club(athlete.athlete_id).await?;
        let news = self.news.latest_published().await?;
        let recent_games = self.athletes.recent_games(athlete.athlete_id).await?;

        Ok(AthleteDashboard {
            athlete,
            statistics,
            club,
            news,
            recent_games,
        })
    }

    /// Gets the athlete profile for a user.
    pub async fn athlete_profile(&self, user_id: i32) -> AppResult<AthleteProfile> {
        self.athletes
            .find_profile(user_id)
            .await?
            .ok_or_else(|| athlete_not_found(user_id))
    }

    /// Composes the coach dashboard for a user.
    pub async fn coach_dashboard(&self, user_id: i32) -> AppResult<CoachDashboard> {
        let coach = self
            .coaches
            .find_dashboard_profile(user_id)
            .await?
            .ok_or_else(|| coach_not_found(user_id))?;

        let club = self.coaches.find_club(coach.coach_id).await?;
        let athletes = self.coaches.list_athletes(coach.coach_id).await?;
        let news = self.news.latest_published().await?;

        Ok(CoachDashboard {
            coach,
            club,
            athletes,
            news,
        })
    }

    /// Gets the coach profile for a user.
    pub async fn coach_profile(&self, user_id: i32) -> AppResult<CoachProfile> {
        self.coaches
            .find_profile(user_id)
            .await?
            .ok_or_else(|| coach_not_found(user_id))
    }

    /// Composes the club dashboard.
    pub async fn club_dashboard(&self, club_id: i32) -> AppResult<ClubDashboard> {
        let club = self
            .clubs
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| club_not_found(club_id))?;

        let coaches = self.clubs.list_coaches(club_id).await?;
        let players = self.clubs.list_players(club_id).await?;
        let news = self.news.latest_published().await?;

        Ok(ClubDashboard {
            club,
            coaches,
            players,
            news,
        })
    }

    /// Gets one club's information row.
    pub async fn club_info(&self, club_id: i32) -> AppResult<Club> {
        self.clubs
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| club_not_found(club_id))
    }

    /// Composes the manager dashboard for a user.
    pub async fn manager_dashboard(&self, user_id: i32) -> AppResult<ManagerDashboard> {
        let manager = self
            .managers
            .find_dashboard_profile(user_id)
            .await?
            .ok_or_else(|| manager_not_found(user_id))?;

        let club = self.managers.find_club(manager.manager_id).await?;
        let coaches = self.managers.list_coaches(manager.manager_id).await?;
        let players = self.managers.list_players(manager.manager_id).await?;
        let news = self.news.latest_published().await?;

        Ok(ManagerDashboard {
            manager,
            club,
            coaches,
            players,
            news,
        })
    }

    /// Gets the manager profile for a user.
    pub async fn manager_profile(&self, user_id: i32) -> AppResult<ManagerProfile> {
        self.managers
            .find_profile(user_id)
            .await?
            .ok_or_else(|| manager_not_found(user_id))
    }
}

fn athlete_not_found(user_id: i32) -> AppError {
    AppError::NotFound {
        entity: "Athlete".to_string(),
        field: "user_id".to_string(),
        value: user_id.to_string(),
    }
}

fn coach_not_found(user_id: i32) -> AppError {
    AppError::NotFound {
        entity: "Coach".to_string(),
        field: "user_id".to_string(),
        value: user_id.to_string(),
    }
}

fn club_not_found(club_id: i32) -> AppError {
    AppError::NotFound {
        entity: "Club".to_string(),
        field: "club_id".to_string(),
        value: club_id.to_string(),
    }
}

fn manager_not_found(user_id: i32) -> AppError {
    AppError::NotFound {
        entity: "Manager".to_string(),
        field: "user_id".to_string(),
        value: user_id.to_string(),
    }
}
