//! Handlers for the asset registry.
//!
//! Maps HTTP verbs to service operations and service outcomes to status
//! codes. Authentication and role checks happen in the RBAC middleware
//! before any of these run; handlers only read the attached [`AuthUser`]
//! for audit fields.

use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use railasset_core::types::DbId;
use railasset_db::models::asset::{AssetInput, AssetListParams};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::service::assets as asset_service;
use crate::state::AppState;

/// POST /api/assets
///
/// Create an asset. Returns 201 with a Location header pointing at the new
/// resource. 409 when the code collides with another asset.
pub async fn create_asset(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AssetInput>,
) -> AppResult<impl IntoResponse> {
    let created = asset_service::create(&state.pool, input, &user.username).await?;

    tracing::info!(
        asset_id = created.id,
        asset_code = %created.asset_code,
        user = %user.username,
        "Asset created",
    );

    let location = format!("/api/assets/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(created),
    ))
}

/// PUT /api/assets/{id}
///
/// Full replacement of all mutable fields. 404 when the asset is missing,
/// 409 when the new code collides with another asset.
pub async fn update_asset(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssetInput>,
) -> AppResult<impl IntoResponse> {
    let updated = asset_service::update(&state.pool, id, input, &user.username).await?;

    tracing::info!(asset_id = id, user = %user.username, "Asset updated");

    Ok(Json(updated))
}

/// DELETE /api/assets/{id}
///
/// Hard delete. 404 when the asset is missing.
pub async fn delete_asset(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    asset_service::delete(&state.pool, id).await?;

    tracing::info!(asset_id = id, user = %user.username, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = asset_service::find_by_id(&state.pool, id).await?;
    Ok(Json(asset))
}

/// GET /api/assets/code/{code}
///
/// Exact match on the stored (normalized) code.
pub async fn get_asset_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let asset = asset_service::find_by_code(&state.pool, &code).await?;
    Ok(Json(asset))
}

/// GET /api/assets
///
/// Filters are mutually exclusive in priority order: category+status
/// together take precedence over location; with neither, every asset is
/// returned.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(params): Query<AssetListParams>,
) -> AppResult<impl IntoResponse> {
    let assets = match (&params.category, &params.status, &params.location) {
        (Some(category), Some(status), _) => {
            asset_service::list_by_category_status(&state.pool, category, status).await?
        }
        (_, _, Some(location)) => asset_service::list_by_location(&state.pool, location).await?,
        _ => asset_service::list_all(&state.pool).await?,
    };

    Ok(Json(assets))
}
