//! Row types for the raw dashboard aggregation queries.
//!
//! Each struct mirrors the column list of one `sql_query` statement in the
//! dashboard repositories. Averages are cast to `FLOAT8` and sums/counts to
//! `BIGINT` on the SQL side so the mappings here stay exact.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Date, Double, Integer, Nullable, Text};
use serde::Serialize;
use utoipa::ToSchema;

/// Athlete identity row joined from `users` and `athletes`.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct AthleteProfile {
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub email: String,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Integer)]
    pub athlete_id: i32,
    #[diesel(sql_type = Nullable<Text>)]
    pub position: Option<String>,
    #[diesel(sql_type = Nullable<Double>)]
    pub height: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    pub weight: Option<f64>,
    #[diesel(sql_type = Nullable<Date>)]
    pub birthdate: Option<NaiveDate>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub jersey_number: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    pub bio: Option<String>,
}

/// Career totals and per-game averages over every stat line of one athlete.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct CareerStats {
    #[diesel(sql_type = BigInt)]
    pub games_played: i64,
    #[diesel(sql_type = Double)]
    pub avg_points: f64,
    #[diesel(sql_type = Double)]
    pub avg_rebounds: f64,
    #[diesel(sql_type = Double)]
    pub avg_assists: f64,
    #[diesel(sql_type = Double)]
    pub avg_steals: f64,
    #[diesel(sql_type = Double)]
    pub avg_blocks: f64,
    #[diesel(sql_type = BigInt)]
    pub total_points: i64,
    #[diesel(sql_type = BigInt)]
    pub total_rebounds: i64,
    #[diesel(sql_type = BigInt)]
    pub total_assists: i64,
}

/// Published news item, selected newest-first.
///
/// Maps positionally from the column tuple the news repository selects.
#[derive(Debug, Queryable, Serialize, ToSchema, Clone)]
pub struct NewsItem {
    pub news_id: i32,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub created_at: NaiveDateTime,
    pub is_published: bool,
}

/// Game row with the athlete's own stat line and both club names.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct AthleteGameRow {
    #[diesel(sql_type = Integer)]
    pub game_id: i32,
    #[diesel(sql_type = Date)]
    pub game_date: NaiveDate,
    #[diesel(sql_type = Nullable<Text>)]
    pub location: Option<String>,
    #[diesel(sql_type = Text)]
    pub status: String,
    #[diesel(sql_type = Nullable<Integer>)]
    pub home_score: Option<i32>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub away_score: Option<i32>,
    #[diesel(sql_type = Text)]
    pub home_team: String,
    #[diesel(sql_type = Text)]
    pub away_team: String,
    #[diesel(sql_type = Integer)]
    pub points: i32,
    #[diesel(sql_type = Integer)]
    pub rebounds: i32,
    #[diesel(sql_type = Integer)]
    pub assists: i32,
    #[diesel(sql_type = Nullable<Integer>)]
    pub minutes_played: Option<i32>,
}

/// Coach identity row joined from `users` and `coaches`.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct CoachProfile {
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub email: String,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub photo_url: Option<String>,
    #[diesel(sql_type = Integer)]
    pub coach_id: i32,
    #[diesel(sql_type = Nullable<Text>)]
    pub specialization: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub certification_level: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub years_experience: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    pub bio: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub coach_photo: Option<String>,
}

/// Athlete assigned to a coach, with aggregated stats.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct CoachAthleteRow {
    #[diesel(sql_type = Integer)]
    pub athlete_id: i32,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub photo_url: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub position: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub jersey_number: Option<i32>,
    #[diesel(sql_type = Nullable<Double>)]
    pub height: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    pub weight: Option<f64>,
    #[diesel(sql_type = BigInt)]
    pub games_played: i64,
    #[diesel(sql_type = Double)]
    pub avg_points: f64,
    #[diesel(sql_type = Double)]
    pub avg_rebounds: f64,
    #[diesel(sql_type = Double)]
    pub avg_assists: f64,
    #[diesel(sql_type = BigInt)]
    pub total_points: i64,
    #[diesel(sql_type = BigInt)]
    pub total_rebounds: i64,
    #[diesel(sql_type = BigInt)]
    pub total_assists: i64,
}

/// Coach of a club with managed-athlete and coached-game counts.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct ClubCoachRow {
    #[diesel(sql_type = Integer)]
    pub coach_id: i32,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub photo_url: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub specialization: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub years_experience: Option<i32>,
    #[diesel(sql_type = BigInt)]
    pub athletes_managed: i64,
    #[diesel(sql_type = BigInt)]
    pub total_games_coached: i64,
}

/// Player of a club with aggregated stats.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct ClubPlayerRow {
    #[diesel(sql_type = Integer)]
    pub athlete_id: i32,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub photo_url: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub position: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub jersey_number: Option<i32>,
    #[diesel(sql_type = BigInt)]
    pub games_played: i64,
    #[diesel(sql_type = Double)]
    pub avg_points: f64,
    #[diesel(sql_type = BigInt)]
    pub total_points: i64,
    #[diesel(sql_type = Double)]
    pub avg_rebounds: f64,
    #[diesel(sql_type = Double)]
    pub avg_assists: f64,
}

/// Manager identity row joined from `users` and `managers`.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct ManagerProfile {
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub email: String,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub photo_url: Option<String>,
    #[diesel(sql_type = Integer)]
    pub manager_id: i32,
    #[diesel(sql_type = Nullable<Text>)]
    pub specialization: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub experience_years: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    pub bio: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub mgr_photo: Option<String>,
}

/// Coach of the manager's club with league-wide scoring context.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct ManagerCoachRow {
    #[diesel(sql_type = Integer)]
    pub coach_id: i32,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub photo_url: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub specialization: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub years_experience: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    pub certification_level: Option<String>,
    #[diesel(sql_type = BigInt)]
    pub athletes_managed: i64,
    #[diesel(sql_type = Double)]
    pub avg_team_points: f64,
}

/// Player of the manager's club with aggregated stats.
#[derive(Debug, QueryableByName, Serialize, ToSchema, Clone)]
pub struct ManagerPlayerRow {
    #[diesel(sql_type = Integer)]
    pub athlete_id: i32,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub photo_url: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub position: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub jersey_number: Option<i32>,
    #[diesel(sql_type = BigInt)]
    pub games_played: i64,
    #[diesel(sql_type = Double)]
    pub avg_points: f64,
    #[diesel(sql_type = BigInt)]
    pub total_points: i64,
    #[diesel(sql_type = Double)]
    pub avg_rebounds: f64,
    #[diesel(sql_type = Double)]
    pub avg_assists: f64,
    #[diesel(sql_type = BigInt)]
    pub total_rebounds: i64,
}
