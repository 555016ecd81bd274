use crate::error_handler::AppError;

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
