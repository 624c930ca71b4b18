use axum::extract::{Extension, Path};

use crate::database::models::Table;
use crate::database::Repository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, DbPool};

/// GET /api/v1/{table} - every row, ordered by id
pub async fn list<T: Table>(Extension(DbPool(pool)): Extension<DbPool>) -> ApiResult<Vec<T>> {
    let rows = Repository::<T>::new(pool).select_all().await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/v1/{table}/:id - a one-element array, or 404
pub async fn show<T: Table>(
    Path(id): Path<String>,
    Extension(DbPool(pool)): Extension<DbPool>,
) -> ApiResult<Vec<T>> {
    let id = parse_record_id::<T>(&id)?;
    let row = Repository::<T>::new(pool).select_404(id).await?;
    Ok(ApiResponse::success(vec![row]))
}

/// Ids are INTEGER columns; anything that cannot be one names no row
pub fn parse_record_id<T: Table>(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::not_found(format!("{} {} not found", T::LABEL, raw)))
}
