use shared_types::AppError;

/// Convert a sqlx::Error into an AppError.
pub fn sqlx_to_app_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::not_found("Ressource non trouvée"),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL check constraint violation (error code 23514)
            if db_err.code().as_deref() == Some("23514") {
                return AppError::bad_request("Valeur non autorisée");
            }
            tracing::error!(error = %err, "database error");
            AppError::database(err.to_string())
        }
        _ => {
            tracing::error!(error = %err, "database error");
            AppError::database(err.to_string())
        }
    }
}

/// Extension trait providing `.into_app_error()` on sqlx::Error.
pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        sqlx_to_app_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
