use diesel::prelude::*;

/// App model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::store::apps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct App {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub developer_id: i32,
}

/// Version model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::store::versions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Version {
    pub id: i32,
    pub app_id: i32,
    pub semver: String,
    pub platform: String,
    pub file_url: String,
    pub file_sha256: String,
    pub release_notes: Option<String>,
    pub published: bool,
}
