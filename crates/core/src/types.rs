/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC, assigned by the database.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
