//! Athlete repository: profile lookups and the dashboard aggregation queries.
//!
//! The aggregations run as raw parameterized SQL. Simple single-table reads
//! go through the diesel DSL.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Integer;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::cms::Club;
use crate::models::dashboard::{AthleteGameRow, AthleteProfile, CareerStats};

/// Athlete repository holding an async connection pool.
#[derive(Clone)]
pub struct AthleteRepository {
    pool: AsyncDbPool,
}

impl AthleteRepository {
    /// Creates a new AthleteRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Finds the athlete profile for a user, requiring the athlete role.
    pub async fn find_dashboard_profile(
        &self,
        user_id: i32,
    ) -> Result<Option<AthleteProfile>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                u.user_id, u.email, u.first_name, u.last_name,
                a.athlete_id, a.position, a.height, a.weight, a.birthdate,
                a.jersey_number, a.bio
            FROM users u
            JOIN athletes a ON u.user_id = a.user_id
            WHERE u.user_id = $1 AND u.role = 'athlete'
            "#,
        )
        .bind::<Integer, _>(user_id)
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    /// Finds the athlete profile for a user regardless of role.
    pub async fn find_profile(&self, user_id: i32) -> Result<Option<AthleteProfile>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                u.user_id, u.email, u.first_name, u.last_name,
                a.athlete_id, a.position, a.height, a.weight, a.birthdate,
                a.jersey_number, a.bio
            FROM users u
            JOIN athletes a ON u.user_id = a.user_id
            WHERE u.user_id = $1
            "#,
        )
        .bind::<Integer, _>(user_id)
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    /// Aggregates career totals and averages over every stat line of one
    /// athlete. Always yields a row; counts and sums are zero without stats.
    pub async fn career_stats(&self, athlete_id: i32) -> Result<CareerStats, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                COUNT(DISTINCT s.game_id)::BIGINT AS games_played,
                COALESCE(AVG(s.points), 0)::FLOAT8 AS avg_points,
                COALESCE(AVG(s.rebounds), 0)::FLOAT8 AS avg_rebounds,
                COALESCE(AVG(s.assists), 0)::FLOAT8 AS avg_assists,
                COALESCE(AVG(s.steals), 0)::FLOAT8 AS avg_steals,
                COALESCE(AVG(s.blocks), 0)::FLOAT8 AS avg_blocks,
                COALESCE(SUM(s.points), 0)::BIGINT AS total_points,
                COALESCE(SUM(s.rebounds), 0)::BIGINT AS total_rebounds,
                COALESCE(SUM(s.assists), 0)::BIGINT AS total_assists
            FROM statistics s
            WHERE s.athlete_id = $1
            "#,
        )
        .bind::<Integer, _>(athlete_id)
        .get_result(&mut conn)
        .await
        .map_err(AppError::from)
    }

    /// Finds the club an athlete belongs to, if any.
    pub async fn find_club(&self, target_athlete_id: i32) -> Result<Option<Club>, AppError> {
        use crate::schema::cms::{athletes, clubs};
        let mut conn = self.pool.get().await?;

        clubs::table
            .inner_join(athletes::table)
            .filter(athletes::athlete_id.eq(target_athlete_id))
            .select(Club::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Latest five games carrying a stat line for the athlete, newest first.
    pub async fn recent_games(&self, athlete_id: i32) -> Result<Vec<AthleteGameRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            r#"
            SELECT
                g.game_id, g.game_date, g.location, g.status,
                g.home_score, g.away_score,
                hc.name AS home_team, ac.name AS away_team,
                s.points, s.rebounds, s.assists, s.minutes_played
            FROM games g
            LEFT JOIN clubs hc ON g.home_club_id = hc.club_id
            LEFT JOIN clubs ac ON g.away_club_id = ac.club_id
            LEFT JOIN statistics s ON g.game_id = s.game_id AND s.athlete_id = $1
            WHERE s.athlete_id = $2
            ORDER BY g.game_date DESC
            LIMIT 5
            "#,
        )
        .bind::<Integer, _>(athlete_id)
        .bind::<Integer, _>(athlete_id)
        .load(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
