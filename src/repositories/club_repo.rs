//! Club repository: club lookups plus the coach and player aggregations.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Integer;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::cms::Club;
use crate::models::dashboard::{ClubCoachRow, ClubPlayerRow};

/// Club repository holding an async connection pool.
#[derive(Clone)]
pub struct ClubRepository {
    pool: AsyncDbPool,
}

impl ClubRepository {
    /// Creates a new ClubRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Finds a club by its ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Club>, AppError> {
        use crate::schema::cms::clubs::dsl::*;
        let mut conn = self.pool.get().await?;

        clubs
            .filter(club_id.eq(id))
            .select(Club::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Coaches of a club with managed-athlete and coached-game counts,
    /// ranked by athletes managed.
    pub async fn list_coaches(&self, club_id: i32) -> Result<Vec<ClubCoachRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                c.coach_id, u.user_id, u.first_name, u.last_name, u.photo_url,
                c.specialization, c.years_experience,
                COUNT(DISTINCT ac.athlete_id)::BIGINT AS athletes_managed,
                COUNT(DISTINCT s.game_id)::BIGINT AS total_games_coached
            FROM coaches c
            JOIN users u ON c.user_id = u.user_id
            LEFT JOIN athlete_coach ac ON c.coach_id = ac.coach_id
            LEFT JOIN games g ON (g.home_club_id = c.club_id OR g.away_club_id = c.club_id)
                AND g.status = 'completed'
            LEFT JOIN statistics s ON g.game_id = s.game_id
            WHERE c.club_id = $1
            GROUP BY c.coach_id, u.user_id, u.first_name, u.last_name, u.photo_url,
                     c.specialization, c.years_experience
            ORDER BY COUNT(DISTINCT ac.athlete_id) DESC
            "#,
        )
        .bind::<Integer, _>(club_id)
        .load(&mut conn)
        .await
        .map_err(AppError::from)
    }

    /// Players of a club with per-athlete stat aggregates, ranked by total
    /// points.
    pub async fn list_players(&self, club_id: i32) -> Result<Vec<ClubPlayerRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                a.athlete_id, u.user_id, u.first_name, u.last_name, u.photo_url,
                a.position, a.jersey_number,
                COUNT(DISTINCT s.game_id)::BIGINT AS games_played,
                COALESCE(AVG(s.points), 0)::FLOAT8 AS avg_points,
                COALESCE(SUM(s.points), 0)::BIGINT AS total_points,
                COALESCE(AVG(s.rebounds), 0)::FLOAT8 AS avg_rebounds,
                COALESCE(AVG(s.assists), 0)::FLOAT8 AS avg_assists
            FROM athletes a
            JOIN users u ON a.user_id = u.user_id
            LEFT JOIN statistics s ON a.athlete_id = s.athlete_id
            WHERE a.club_id = $1
            GROUP BY a.athlete_id, u.user_id, u.first_name, u.last_name, u.photo_url,
                     a.position, a.jersey_number
            ORDER BY COALESCE(SUM(s.points), 0) DESC
            "#,
        )
        .bind::<Integer, _>(club_id)
        .load(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
