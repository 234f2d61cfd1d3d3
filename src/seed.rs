//! Demo data seeding for the CMS database.
//!
//! Creates 4 clubs, each with 2 managers, 4 coaches, and 10 athletes, plus
//! completed games with per-athlete statistics, training sessions, and news.
//! Every generated user shares [`DEMO_PASSWORD`].

use chrono::{Duration, NaiveDate, Utc};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::cms::{
    NewAthlete, NewAthleteCoach, NewClub, NewCoach, NewGame, NewManager, NewNews, NewStatistic,
    NewTraining, NewUser, UserRole,
};
use crate::schema::cms::{
    athlete_coach, athletes, clubs, coaches, games, managers, news, statistics, training, users,
};
use crate::utils::password;

/// Password shared by all seeded demo users.
pub const DEMO_PASSWORD: &str = "StrongPass123!";

const FIRST_NAMES: &[&str] = &[
    "James", "Michael", "David", "Robert", "William", "Richard", "Joseph", "Thomas", "Charles",
    "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven", "Paul", "Andrew",
    "Joshua", "Kenneth", "Kevin", "Brian", "George", "Edward", "Ronald", "Timothy", "Jason",
    "Jeffrey", "Ryan", "Jacob", "Gary", "Nicholas",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Sanchez", "Clark",
    "Ramirez", "Lewis", "Robinson", "Young", "Allen",
];

const CLUB_NAMES: &[&str] = &[
    "Phoenix Vipers",
    "Miami Heat Squad",
    "Los Angeles Lakers Elite",
    "Boston Celtics Pride",
];

const CLUB_CITIES: &[&str] = &["Phoenix, AZ", "Miami, FL", "Los Angeles, CA", "Boston, MA"];

const POSITIONS: &[&str] = &[
    "Point Guard",
    "Shooting Guard",
    "Small Forward",
    "Power Forward",
    "Center",
];

const CERTIFICATIONS: &[&str] = &[
    "Level 1",
    "Level 2",
    "Level 3",
    "National Coach",
    "FIBA Certified",
];

const TRAINING_TYPES: &[&str] = &[
    "Conditioning",
    "Shooting",
    "Ball Handling",
    "Defense",
    "Strength",
];

const NEWS_TITLES: &[&str] = &[
    "Outstanding Performance in Recent Game",
    "New Training Program Launched",
    "Player Achievement Recognition",
    "Team Victory Celebration",
    "Athlete Selected for Regional Tournament",
    "Coach Milestone Celebration",
    "Club Championship Victory",
    "New Recruitment Campaign",
    "Player Development Success",
    "Regional Rankings Update",
];

const NEWS_CONTENT: &[&str] = &[
    "Fantastic performance by our athletes this week!",
    "New training initiatives show promising results.",
    "Our team continues to excel in regional competitions.",
    "Great news from the coaching staff on player development.",
    "Excited to announce upcoming championship matches.",
    "Club infrastructure improvements completed.",
    "Player stats show significant improvement.",
    "Community engagement events scheduled.",
];

/// Row counts produced by a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub clubs: usize,
    pub users: usize,
    pub games: usize,
    pub statistics: usize,
    pub training_sessions: usize,
    pub news_items: usize,
}

/// Populates the CMS database with demo data.
///
/// Refuses to run against a database that already has users, so repeated
/// invocations cannot pile up duplicate demo accounts.
///
/// # Errors
/// - `AppError::Validation` - If the database already contains users
/// - Database errors from any failed insert
pub async fn seed_demo_data(pool: &AsyncDbPool) -> AppResult<SeedSummary> {
    let mut conn = pool.get().await?;
    let mut rng = StdRng::from_os_rng();

    let existing: i64 = users::table.count().get_result(&mut conn).await?;
    if existing > 0 {
        return Err(AppError::Validation {
            field: "database".to_string(),
            reason: format!(
                "CMS database already contains {} user(s); seeding requires an empty database",
                existing
            ),
        });
    }

    // Hash once and share across all demo users.
    let password_hash = password::hash_password(DEMO_PASSWORD)?;

    let mut summary = SeedSummary::default();
    let today = Utc::now().date_naive();

    let mut club_ids = Vec::with_capacity(CLUB_NAMES.len());
    for (name, city) in CLUB_NAMES.iter().zip(CLUB_CITIES) {
        club_ids.push(insert_club(&mut conn, name, city).await?);
        summary.clubs += 1;
        tracing::info!(club = name, "Seeded club");
    }

    for (club_index, &club_id) in club_ids.iter().enumerate() {
        let club_name = CLUB_NAMES[club_index];

        let mut manager_user_ids = Vec::with_capacity(2);
        for m in 0..2 {
            let email = demo_email(&mut rng, "manager", m, club_name);
            let user_id = insert_user(
                &mut conn,
                email,
                &password_hash,
                pick(&mut rng, FIRST_NAMES),
                pick(&mut rng, LAST_NAMES),
                UserRole::Manager,
            )
            .await?;
            insert_manager(&mut conn, user_id, club_id).await?;
            manager_user_ids.push(user_id);
            summary.users += 1;
        }

        let mut coach_ids = Vec::with_capacity(4);
        for c in 0..4 {
            let email = demo_email(&mut rng, "coach", c, club_name);
            let user_id = insert_user(
                &mut conn,
                email,
                &password_hash,
                pick(&mut rng, FIRST_NAMES),
                pick(&mut rng, LAST_NAMES),
                UserRole::Coach,
            )
            .await?;
            let specialization = pick(&mut rng, POSITIONS);
            let certification = pick(&mut rng, CERTIFICATIONS);
            coach_ids
                .push(insert_coach(&mut conn, user_id, club_id, specialization, certification).await?);
            summary.users += 1;
        }

        let mut athlete_ids = Vec::with_capacity(10);
        for a in 0..10 {
            let email = demo_email(&mut rng, "player", a, club_name);
            let user_id = insert_user(
                &mut conn,
                email,
                &password_hash,
                pick(&mut rng, FIRST_NAMES),
                pick(&mut rng, LAST_NAMES),
                UserRole::Athlete,
            )
            .await?;
            let position = pick(&mut rng, POSITIONS);
            let height = f64::from(rng.random_range(180..=220));
            let weight = f64::from(rng.random_range(80..=130));
            let athlete_id =
                insert_athlete(&mut conn, user_id, club_id, position, height, weight).await?;

            let assigned: Vec<i32> = coach_ids.choose_multiple(&mut rng, 2).copied().collect();
            for coach_id in assigned {
                insert_athlete_coach(&mut conn, athlete_id, coach_id).await?;
            }

            athlete_ids.push(athlete_id);
            summary.users += 1;
        }

        // Each club hosts three completed games against one random opponent.
        let opponents: Vec<i32> = club_ids.iter().copied().filter(|&c| c != club_id).collect();
        let away_club_id = opponents[rng.random_range(0..opponents.len())];
        for _ in 0..3 {
            let game_date = today - Duration::days(rng.random_range(1..=30));
            let game_id = insert_game(
                &mut conn,
                club_id,
                away_club_id,
                game_date,
                rng.random_range(70..=120),
                rng.random_range(70..=120),
            )
            .await?;
            summary.games += 1;

            let lineup: Vec<i32> = athlete_ids.choose_multiple(&mut rng, 5).copied().collect();
            for athlete_id in lineup {
                let stat = NewStatistic {
                    athlete_id,
                    game_id,
                    points: rng.random_range(5..=35),
                    rebounds: rng.random_range(1..=15),
                    assists: rng.random_range(1..=10),
                    steals: rng.random_range(0..=5),
                    blocks: rng.random_range(0..=5),
                };
                diesel::insert_into(statistics::table)
                    .values(&stat)
                    .execute(&mut conn)
                    .await?;
                summary.statistics += 1;
            }
        }

        for _ in 0..5 {
            let session = NewTraining {
                athlete_id: athlete_ids[rng.random_range(0..athlete_ids.len())],
                coach_id: coach_ids[rng.random_range(0..coach_ids.len())],
                training_date: today - Duration::days(rng.random_range(1..=60)),
                duration: Some(rng.random_range(60..=180)),
                type_: Some(pick(&mut rng, TRAINING_TYPES).to_string()),
                notes: Some(format!(
                    "Training session for {} development.",
                    pick(&mut rng, TRAINING_TYPES)
                )),
            };
            diesel::insert_into(training::table)
                .values(&session)
                .execute(&mut conn)
                .await?;
            summary.training_sessions += 1;
        }

        for _ in 0..3 {
            let item = NewNews {
                title: pick(&mut rng, NEWS_TITLES).to_string(),
                content: pick(&mut rng, NEWS_CONTENT).to_string(),
                category: Some("update".to_string()),
                created_by_user_id: Some(manager_user_ids[rng.random_range(0..manager_user_ids.len())]),
            };
            diesel::insert_into(news::table)
                .values(&item)
                .execute(&mut conn)
                .await?;
            summary.news_items += 1;
        }

        tracing::info!(club = club_name, "Seeded club roster and activity");
    }

    Ok(summary)
}

fn pick<R: Rng>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}

/// Builds a demo login like `player3_phoenixvipers412@dunes.com`.
fn demo_email<R: Rng>(rng: &mut R, prefix: &str, index: usize, club_name: &str) -> String {
    format!(
        "{}{}_{}{}@dunes.com",
        prefix,
        index + 1,
        club_slug(club_name),
        rng.random_range(100..=999)
    )
}

fn club_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

async fn insert_club(conn: &mut AsyncPgConnection, name: &str, city: &str) -> AppResult<i32> {
    let slug = club_slug(name);
    let club = NewClub {
        name: name.to_string(),
        location: city.to_string(),
        founded_year: Some(2020),
        contact_email: Some(format!("info@{}.com", slug)),
        website: Some(format!("www.{}.com", slug)),
    };
    diesel::insert_into(clubs::table)
        .values(&club)
        .returning(clubs::club_id)
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

async fn insert_user(
    conn: &mut AsyncPgConnection,
    email: String,
    password_hash: &str,
    first_name: &str,
    last_name: &str,
    role: UserRole,
) -> AppResult<i32> {
    let user = NewUser {
        email,
        password_hash: password_hash.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        role,
    };
    diesel::insert_into(users::table)
        .values(&user)
        .returning(users::user_id)
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

async fn insert_manager(conn: &mut AsyncPgConnection, user_id: i32, club_id: i32) -> AppResult<i32> {
    let manager = NewManager {
        user_id,
        club_id: Some(club_id),
        specialization: None,
        experience_years: None,
    };
    diesel::insert_into(managers::table)
        .values(&manager)
        .returning(managers::manager_id)
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

async fn insert_coach(
    conn: &mut AsyncPgConnection,
    user_id: i32,
    club_id: i32,
    specialization: &str,
    certification_level: &str,
) -> AppResult<i32> {
    let coach = NewCoach {
        user_id,
        club_id: Some(club_id),
        specialization: Some(specialization.to_string()),
        certification_level: Some(certification_level.to_string()),
        bio: Some(format!(
            "Experienced coach with expertise in {}.",
            specialization
        )),
    };
    diesel::insert_into(coaches::table)
        .values(&coach)
        .returning(coaches::coach_id)
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

async fn insert_athlete(
    conn: &mut AsyncPgConnection,
    user_id: i32,
    club_id: i32,
    position: &str,
    height: f64,
    weight: f64,
) -> AppResult<i32> {
    let athlete = NewAthlete {
        user_id,
        club_id: Some(club_id),
        position: Some(position.to_string()),
        height: Some(height),
        weight: Some(weight),
        bio: Some(format!(
            "Professional basketball player specializing in {}.",
            position
        )),
    };
    diesel::insert_into(athletes::table)
        .values(&athlete)
        .returning(athletes::athlete_id)
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

async fn insert_athlete_coach(
    conn: &mut AsyncPgConnection,
    athlete_id: i32,
    coach_id: i32,
) -> AppResult<()> {
    let assignment = NewAthleteCoach {
        athlete_id,
        coach_id,
    };
    diesel::insert_into(athlete_coach::table)
        .values(&assignment)
        .execute(conn)
        .await?;
    Ok(())
}

async fn insert_game(
    conn: &mut AsyncPgConnection,
    home_club_id: i32,
    away_club_id: i32,
    game_date: NaiveDate,
    home_score: i32,
    away_score: i32,
) -> AppResult<i32> {
    let game = NewGame {
        home_club_id,
        away_club_id,
        game_date,
        status: "completed".to_string(),
        home_score: Some(home_score),
        away_score: Some(away_score),
    };
    diesel::insert_into(games::table)
        .values(&game)
        .returning(games::game_id)
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_slug() {
        assert_eq!(club_slug("Phoenix Vipers"), "phoenixvipers");
        assert_eq!(club_slug("Los Angeles Lakers Elite"), "losangeleslakerselite");
    }

    #[test]
    fn test_demo_email_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let email = demo_email(&mut rng, "player", 2, "Miami Heat Squad");

        assert!(email.starts_with("player3_miamiheatsquad"));
        assert!(email.ends_with("@dunes.com"));

        let suffix: String = email
            .chars()
            .skip("player3_miamiheatsquad".len())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        assert_eq!(suffix.len(), 3);
    }

    #[test]
    fn test_pick_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let position = pick(&mut rng, POSITIONS);
            assert!(POSITIONS.contains(&position));
        }
    }

    #[test]
    fn test_name_pools_are_full_rosters() {
        assert_eq!(FIRST_NAMES.len(), 32);
        assert_eq!(LAST_NAMES.len(), 32);
        assert_eq!(CLUB_NAMES.len(), CLUB_CITIES.len());
    }
}
