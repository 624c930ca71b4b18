use axum::extract::{rejection::JsonRejection, Extension, Json};

use crate::api::SchoolPayload;
use crate::database::models::School;
use crate::database::Repository;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, DbPool};

/// POST /api/v1/schools - create a school under an existing district
pub async fn create(
    Extension(DbPool(pool)): Extension<DbPool>,
    Extension(auth_user): Extension<AuthUser>,
    payload: Result<Json<SchoolPayload>, JsonRejection>,
) -> ApiResult<School> {
    let Json(payload) = payload?;
    let new_school = payload.validate()?;

    let school = Repository::<School>::new(pool).create(&new_school).await?;

    tracing::info!("{} created school {} ({})", auth_user.email, school.id, school.name);
    Ok(ApiResponse::created(school))
}
