//! Repository for the `assets` table.
//!
//! All write operations take the acting user's name and populate the audit
//! columns from it; timestamps come from `now()` in SQL. Callers are expected
//! to hand in already-normalized code/status/location values.

use sqlx::PgPool;

use railasset_core::types::DbId;

use crate::models::asset::{Asset, AssetInput};

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "\
    id, asset_code, name, category, sub_category, \
    manufacturer, model_number, serial_number, install_date, \
    status, location_code, maintenance_cycle_days, last_inspection_date, \
    depreciation_rate, acquisition_cost, notes, \
    created_by, last_modified_by, created_at, updated_at";

/// Provides CRUD operations for the asset registry.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset. `created_by` is set from `actor`.
    pub async fn insert(
        pool: &PgPool,
        input: &AssetInput,
        actor: &str,
    ) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (\
                asset_code, name, category, sub_category, \
                manufacturer, model_number, serial_number, install_date, \
                status, location_code, maintenance_cycle_days, last_inspection_date, \
                depreciation_rate, acquisition_cost, notes, created_by\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.asset_code)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.sub_category.as_deref())
            .bind(input.manufacturer.as_deref())
            .bind(input.model_number.as_deref())
            .bind(input.serial_number.as_deref())
            .bind(input.install_date)
            .bind(&input.status)
            .bind(input.location_code.as_deref())
            .bind(input.maintenance_cycle_days)
            .bind(input.last_inspection_date)
            .bind(input.depreciation_rate)
            .bind(input.acquisition_cost)
            .bind(input.notes.as_deref())
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable column of an existing asset.
    ///
    /// `id`, `created_by`, and `created_at` are never touched;
    /// `last_modified_by` is set from `actor` and `updated_at` from `now()`.
    /// Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AssetInput,
        actor: &str,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                asset_code = $2, name = $3, category = $4, sub_category = $5, \
                manufacturer = $6, model_number = $7, serial_number = $8, install_date = $9, \
                status = $10, location_code = $11, maintenance_cycle_days = $12, \
                last_inspection_date = $13, depreciation_rate = $14, acquisition_cost = $15, \
                notes = $16, last_modified_by = $17, updated_at = now() \
             WHERE id = $1 \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.asset_code)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.sub_category.as_deref())
            .bind(input.manufacturer.as_deref())
            .bind(input.model_number.as_deref())
            .bind(input.serial_number.as_deref())
            .bind(input.install_date)
            .bind(&input.status)
            .bind(input.location_code.as_deref())
            .bind(input.maintenance_cycle_days)
            .bind(input.last_inspection_date)
            .bind(input.depreciation_rate)
            .bind(input.acquisition_cost)
            .bind(input.notes.as_deref())
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an asset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an asset by its stored (normalized) code. Exact match.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE asset_code = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List assets matching both category and status exactly.
    pub async fn list_by_category_status(
        pool: &PgPool,
        category: &str,
        status: &str,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE category = $1 AND status = $2 ORDER BY id"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(category)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// List assets at the given location code.
    pub async fn list_by_location(
        pool: &PgPool,
        location_code: &str,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE location_code = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(location_code)
            .fetch_all(pool)
            .await
    }

    /// List every asset.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets ORDER BY id");
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }
}
