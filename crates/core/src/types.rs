/// Catalog primary keys are PostgreSQL SERIAL columns.
pub type DbId = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
