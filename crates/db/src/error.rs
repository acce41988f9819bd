use catalog_core::types::DbId;

/// Errors raised by catalog stores.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// An update or delete targeted a row that does not exist (anymore).
    #[error("{entity} with id {id} does not exist")]
    MissingRow { entity: &'static str, id: DbId },

    /// A staged change references a parent row that does not exist.
    #[error("Referenced {entity} with id {id} does not exist")]
    ForeignKey { entity: &'static str, id: DbId },
}

pub type DbResult<T> = Result<T, DbError>;
