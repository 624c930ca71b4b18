use axum::extract::{rejection::JsonRejection, Extension, Json};

use crate::api::DistrictPayload;
use crate::database::models::District;
use crate::database::Repository;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, DbPool};

/// POST /api/v1/districts - create a district under an existing county
pub async fn create(
    Extension(DbPool(pool)): Extension<DbPool>,
    Extension(auth_user): Extension<AuthUser>,
    payload: Result<Json<DistrictPayload>, JsonRejection>,
) -> ApiResult<District> {
    let Json(payload) = payload?;
    let new_district = payload.validate()?;

    let district = Repository::<District>::new(pool).create(&new_district).await?;

    tracing::info!("{} created district {} ({})", auth_user.email, district.id, district.name);
    Ok(ApiResponse::created(district))
}
