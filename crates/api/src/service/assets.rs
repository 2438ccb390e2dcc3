//! Asset write-path orchestration: validate, normalize, persist.
//!
//! Uniqueness is checked here against current store state on the normalized
//! code, so two inputs differing only in case or surrounding whitespace
//! collide. The check is defense-in-depth: the `uq_assets_asset_code`
//! constraint remains the atomic guarantee, and a lost race surfaces as a
//! conflict through the sqlx error classifier.

use sqlx::PgPool;

use railasset_core::error::CoreError;
use railasset_core::normalize::{normalize_code, normalize_code_opt};
use railasset_core::types::DbId;
use railasset_db::models::asset::{Asset, AssetInput};
use railasset_db::repositories::AssetRepo;

use crate::error::AppResult;

/// Normalize the code-like fields of a candidate in place.
fn normalize(input: &mut AssetInput) {
    input.asset_code = normalize_code(&input.asset_code);
    input.status = normalize_code(&input.status);
    normalize_code_opt(&mut input.location_code);
}

/// Fail with `Conflict` if another asset (not `current_id`) holds `code`.
async fn validate_unique_code(
    pool: &PgPool,
    code: &str,
    current_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(existing) = AssetRepo::find_by_code(pool, code).await? {
        if current_id != Some(existing.id) {
            return Err(CoreError::Conflict(format!("Asset code already exists: {code}")).into());
        }
    }
    Ok(())
}

/// Create a new asset. Returns the persisted row with store-assigned id and
/// audit fields.
pub async fn create(pool: &PgPool, mut input: AssetInput, actor: &str) -> AppResult<Asset> {
    normalize(&mut input);
    validate_unique_code(pool, &input.asset_code, None).await?;
    Ok(AssetRepo::insert(pool, &input, actor).await?)
}

/// Replace every mutable field of an existing asset.
///
/// An asset keeping its own code is not a conflict.
pub async fn update(pool: &PgPool, id: DbId, mut input: AssetInput, actor: &str) -> AppResult<Asset> {
    if AssetRepo::find_by_id(pool, id).await?.is_none() {
        return Err(CoreError::not_found("Asset", id).into());
    }

    normalize(&mut input);
    validate_unique_code(pool, &input.asset_code, Some(id)).await?;

    AssetRepo::update(pool, id, &input, actor)
        .await?
        .ok_or_else(|| CoreError::not_found("Asset", id).into())
}

/// Permanently remove an asset.
pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !AssetRepo::delete(pool, id).await? {
        return Err(CoreError::not_found("Asset", id).into());
    }
    Ok(())
}

pub async fn find_by_id(pool: &PgPool, id: DbId) -> AppResult<Asset> {
    AssetRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Asset", id).into())
}

/// Exact lookup on the stored (already-normalized) code.
pub async fn find_by_code(pool: &PgPool, code: &str) -> AppResult<Asset> {
    AssetRepo::find_by_code(pool, code)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Asset",
                key: code.to_string(),
            }
            .into()
        })
}

pub async fn list_by_category_status(
    pool: &PgPool,
    category: &str,
    status: &str,
) -> AppResult<Vec<Asset>> {
    Ok(AssetRepo::list_by_category_status(pool, category, status).await?)
}

pub async fn list_by_location(pool: &PgPool, location_code: &str) -> AppResult<Vec<Asset>> {
    Ok(AssetRepo::list_by_location(pool, location_code).await?)
}

pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Asset>> {
    Ok(AssetRepo::list_all(pool).await?)
}
