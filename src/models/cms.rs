use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

/// Account role stored in the `user_role` PostgreSQL enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum)]
#[db_enum(existing_type_path = "crate::schema::cms::sql_types::UserRole")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Athlete,
    Coach,
    Club,
    Manager,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Athlete => write!(f, "athlete"),
            UserRole::Coach => write!(f, "coach"),
            UserRole::Club => write!(f, "club"),
            UserRole::Manager => write!(f, "manager"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "athlete" => Ok(UserRole::Athlete),
            "coach" => Ok(UserRole::Coach),
            "club" => Ok(UserRole::Club),
            "manager" => Ok(UserRole::Manager),
            _ => Err(()),
        }
    }
}

/// User model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::cms::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub user_id: i32,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub photo_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// NewUser model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cms::users)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// Club model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::cms::clubs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Club {
    pub club_id: i32,
    pub name: String,
    pub location: String,
    pub founded_year: Option<i32>,
    pub contact_email: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub logo_url: Option<String>,
}

/// NewClub model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cms::clubs)]
pub struct NewClub {
    pub name: String,
    pub location: String,
    pub founded_year: Option<i32>,
    pub contact_email: Option<String>,
    pub website: Option<String>,
}

/// NewAthlete model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cms::athletes)]
pub struct NewAthlete {
    pub user_id: i32,
    pub club_id: Option<i32>,
    pub position: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub bio: Option<String>,
}

/// NewCoach model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cms::coaches)]
pub struct NewCoach {
    pub user_id: i32,
    pub club_id: Option<i32>,
    pub specialization: Option<String>,
    pub certification_level: Option<String>,
    pub bio: Option<String>,
}

/// NewManager model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cms::managers)]
pub struct NewManager {
    pub user_id: i32,
    pub club_id: Option<i32>,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
}

/// Athlete-coach assignment for inserting new records
#[derive(Debug, Insertable, Clone, Copy)]
#[diesel(table_name = crate::schema::cms::athlete_coach)]
pub struct NewAthleteCoach {
    pub athlete_id: i32,
    pub coach_id: i32,
}

/// NewGame model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cms::games)]
pub struct NewGame {
    pub home_club_id: i32,
    pub away_club_id: i32,
    pub game_date: NaiveDate,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

/// NewStatistic model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cms::statistics)]
pub struct NewStatistic {
    pub athlete_id: i32,
    pub game_id: i32,
    pub points: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub steals: i32,
    pub blocks: i32,
}

/// NewTraining model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cms::training)]
pub struct NewTraining {
    pub athlete_id: i32,
    pub coach_id: i32,
    pub training_date: NaiveDate,
    pub duration: Option<i32>,
    #[diesel(column_name = type_)]
    pub type_: Option<String>,
    pub notes: Option<String>,
}

/// NewNews model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cms::news)]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub created_by_user_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Athlete.to_string(), "athlete");
        assert_eq!(UserRole::Coach.to_string(), "coach");
        assert_eq!(UserRole::Club.to_string(), "club");
        assert_eq!(UserRole::Manager.to_string(), "manager");
    }

    #[test]
    fn test_user_role_from_str() {
        assert_eq!(UserRole::from_str("athlete"), Ok(UserRole::Athlete));
        assert_eq!(UserRole::from_str("manager"), Ok(UserRole::Manager));
        assert!(UserRole::from_str("admin").is_err());
        assert!(UserRole::from_str("Athlete").is_err());
    }

    #[test]
    fn test_user_role_serialization() {
        assert_eq!(
            serde_json::to_string(&UserRole::Coach).unwrap(),
            "\"coach\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"club\"").unwrap(),
            UserRole::Club
        );
    }
}
