use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Fold SQLite constraint failures into their own variants so the web
    /// layer can answer 400/409 instead of 500.
    ///
    /// 787 is SQLITE_CONSTRAINT_FOREIGNKEY; 2067 and 1555 are the unique and
    /// primary key constraint codes.
    pub fn from_sqlx(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &error {
            let code = db_error.code();
            let code = code.as_deref();
            if code == Some("787") || db_error.message().contains("FOREIGN KEY constraint") {
                return Self::ForeignKeyViolation(db_error.message().to_string());
            }
            if code == Some("2067") || code == Some("1555") {
                return Self::ConstraintViolation(db_error.message().to_string());
            }
        }
        Self::Database(error)
    }
}
