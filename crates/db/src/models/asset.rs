//! Asset registry models and DTOs.
//!
//! Wire types use camelCase field names to match the public JSON contract.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use railasset_core::types::{DbId, Timestamp};

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: DbId,
    /// Unique code, stored trimmed and upper-cased.
    pub asset_code: String,
    pub name: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub manufacturer: Option<String>,
    pub model_number: Option<String>,
    pub serial_number: Option<String>,
    pub install_date: Option<NaiveDate>,
    /// Free-text operational state, stored trimmed and upper-cased.
    pub status: String,
    /// Optional location code, stored trimmed and upper-cased.
    pub location_code: Option<String>,
    pub maintenance_cycle_days: Option<i32>,
    pub last_inspection_date: Option<NaiveDate>,
    pub depreciation_rate: Option<Decimal>,
    pub acquisition_cost: Option<Decimal>,
    pub notes: Option<String>,
    /// Audit: set on insert, never updated.
    pub created_by: String,
    /// Audit: set on every update.
    pub last_modified_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request payload for creating or fully replacing an asset.
///
/// Update is full replacement: every mutable column takes the value given
/// here, including `None` for omitted optional fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInput {
    pub asset_code: String,
    pub name: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub manufacturer: Option<String>,
    pub model_number: Option<String>,
    pub serial_number: Option<String>,
    pub install_date: Option<NaiveDate>,
    pub status: String,
    pub location_code: Option<String>,
    pub maintenance_cycle_days: Option<i32>,
    pub last_inspection_date: Option<NaiveDate>,
    pub depreciation_rate: Option<Decimal>,
    pub acquisition_cost: Option<Decimal>,
    pub notes: Option<String>,
}

/// Query parameters for filtered asset listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetListParams {
    pub category: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
}
