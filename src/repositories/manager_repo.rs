//! Manager repository: profile lookups and the club oversight aggregations.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Integer;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::cms::Club;
use crate::models::dashboard::{ManagerCoachRow, ManagerPlayerRow, ManagerProfile};

/// Manager repository holding an async connection pool.
#[derive(Clone)]
pub struct ManagerRepository {
    pool: AsyncDbPool,
}

impl ManagerRepository {
    /// Creates a new ManagerRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Finds the manager profile for a user, requiring the manager role.
    pub async fn find_dashboard_profile(
        &self,
        user_id: i32,
    ) -> Result<Option<ManagerProfile>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                u.user_id, u.email, u.first_name, u.last_name, u.photo_url,
                m.manager_id, m.specialization, m.experience_years, m.bio,
                m.photo_url AS mgr_photo
            FROM users u
            JOIN managers m ON u.user_id = m.user_id
            WHERE u.user_id = $1 AND u.role = 'manager'
            "#,
        )
        .bind::<Integer, _>(user_id)
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    /// Finds the manager profile for a user regardless of role.
    pub async fn find_profile(&self, user_id: i32) -> Result<Option<ManagerProfile>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                u.user_id, u.email, u.first_name, u.last_name, u.photo_url,
                m.manager_id, m.specialization, m.experience_years, m.bio,
                m.photo_url AS mgr_photo
            FROM users u
            JOIN managers m ON u.user_id = m.user_id
            WHERE u.user_id = $1
            "#,
        )
        .bind::<Integer, _>(user_id)
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    /// Finds the club a manager is attached to, if any.
    pub async fn find_club(&self, target_manager_id: i32) -> Result<Option<Club>, AppError> {
        use crate::schema::cms::{clubs, managers};
        let mut conn = self.pool.get().await?;

        let club_id: Option<Option<i32>> = managers::table
            .filter(managers::manager_id.eq(target_manager_id))
            .select(managers::club_id)
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

    /// Coaches of the manager's club with managed-athlete counts and the
    /// league-wide completed-game scoring average.
    pub async fn list_coaches(&self, manager_id: i32) -> Result<Vec<ManagerCoachRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                c.coach_id, u.user_id, u.first_name, u.last_name, u.photo_url,
                c.specialization, c.years_experience, c.certification_level,
                COUNT(DISTINCT ac.athlete_id)::BIGINT AS athletes_managed,
                AVG(
                    COALESCE((
                        SELECT AVG(s.points)
                        FROM statistics s
                        JOIN games g ON s.game_id = g.game_id
                        WHERE g.status = 'completed'
                    ), 0)
                )::FLOAT8 AS avg_team_points
            FROM coaches c
            JOIN users u ON c.user_id = u.user_id
            LEFT JOIN athlete_coach ac ON c.coach_id = ac.coach_id
            WHERE c.club_id = (SELECT club_id FROM managers WHERE manager_id = $1)
            GROUP BY c.coach_id, u.user_id, u.first_name, u.last_name, u.photo_url,
                     c.specialization, c.years_experience, c.certification_level
            ORDER BY COUNT(DISTINCT ac.athlete_id) DESC
            "#,
        )
        .bind::<Integer, _>(manager_id)
        .load(&mut conn)
        .await
        .map_err(AppError::from)
    }

    /// Players of the manager's club with per-athlete stat aggregates,
    /// ranked by total points.
    pub async fn list_players(&self, manager_id: i32) -> Result<Vec<ManagerPlayerRow>, AppError> {
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
                COALESCE(AVG(s.assists), 0)::FLOAT8 AS avg_assists,
                COALESCE(SUM(s.rebounds), 0)::BIGINT AS total_rebounds
            FROM athletes a
            JOIN users u ON a.user_id = u.user_id
            LEFT JOIN statistics s ON a.athlete_id = s.athlete_id
            WHERE a.club_id = (SELECT club_id FROM managers WHERE manager_id = $1)
            GROUP BY a.athlete_id, u.user_id, u.first_name, u.last_name, u.photo_url,
                     a.position, a.jersey_number
            ORDER BY COALESCE(SUM(s.points), 0) DESC
            "#,
        )
        .bind::<Integer, _>(manager_id)
        .load(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
