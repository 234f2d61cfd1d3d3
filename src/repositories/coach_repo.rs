//! Coach repository: profile lookups and the assigned-athlete aggregation.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Integer;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::cms::Club;
use crate::models::dashboard::{CoachAthleteRow, CoachProfile};

/// Coach repository holding an async connection pool.
#[derive(Clone)]
pub struct CoachRepository {
    pool: AsyncDbPool,
}

impl CoachRepository {
    /// Creates a new CoachRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Finds the coach profile for a user, requiring the coach role.
    pub async fn find_dashboard_profile(
        &self,
        user_id: i32,
    ) -> Result<Option<CoachProfile>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                u.user_id, u.email, u.first_name, u.last_name, u.photo_url,
                c.coach_id, c.specialization, c.certification_level, c.years_experience,
                c.bio, c.photo_url AS coach_photo
            FROM users u
            JOIN coaches c ON u.user_id = c.user_id
            WHERE u.user_id = $1 AND u.role = 'coach'
            "#,
        )
        .bind::<Integer, _>(user_id)
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    /// Finds the coach profile for a user regardless of role.
    pub async fn find_profile(&self, user_id: i32) -> Result<Option<CoachProfile>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                u.user_id, u.email, u.first_name, u.last_name, u.photo_url,
                c.coach_id, c.specialization, c.certification_level, c.years_experience,
                c.bio, c.photo_url AS coach_photo
            FROM users u
            JOIN coaches c ON u.user_id = c.user_id
            WHERE u.user_id = $1
            "#,
        )
        .bind::<Integer, _>(user_id)
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    /// Finds the club a coach is attached to, if any.
    pub async fn find_club(&self, target_coach_id: i32) -> Result<Option<Club>, AppError> {
        use crate::schema::cms::{clubs, coaches};
        let mut conn = self.pool.get().await?;

        let club_id: Option<Option<i32>> = coaches::table
            .filter(coaches::coach_id.eq(target_coach_id))
            .select(coaches::club_id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)?;

        let Some(Some(club_id)) = club_id else {
            return Ok(None);
        };

        clubs::table
            .filter(clubs::club_id.eq(club_id))
            .select(Club::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Athletes assigned to a coach with per-athlete stat aggregates,
    /// ranked by total points.
    pub async fn list_athletes(&self, coach_id: i32) -> Result<Vec<CoachAthleteRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                a.athlete_id, u.user_id, u.first_name, u.last_name, u.photo_url,
                a.position, a.jersey_number, a.height, a.weight,
                COUNT(DISTINCT s.game_id)::BIGINT AS games_played,
                COALESCE(AVG(s.points), 0)::FLOAT8 AS avg_points,
                COALESCE(AVG(s.rebounds), 0)::FLOAT8 AS avg_rebounds,
                COALESCE(AVG(s.assists), 0)::FLOAT8 AS avg_assists,
                COALESCE(SUM(s.points), 0)::BIGINT AS total_points,
                COALESCE(SUM(s.rebounds), 0)::BIGINT AS total_rebounds,
                COALESCE(SUM(s.assists), 0)::BIGINT AS total_assists
            FROM athletes a
            JOIN users u ON a.user_id = u.user_id
            JOIN athlete_coach ac ON a.athlete_id = ac.athlete_id
            LEFT JOIN statistics s ON a.athlete_id = s.athlete_id
            WHERE ac.coach_id = $1
            GROUP BY a.athlete_id, u.user_id, u.first_name, u.last_name, u.photo_url,
                     a.position, a.jersey_number, a.height, a.weight
            ORDER BY COALESCE(SUM(s.points), 0) DESC
            "#,
        )
        .bind::<Integer, _>(coach_id)
        .load(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
