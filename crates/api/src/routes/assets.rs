//! Route definitions for the asset registry, mounted at `/api/assets`.
//!
//! ```text
//! POST   /                 -> create_asset        (ADMIN, MANAGER)
//! GET    /                 -> list_assets         (any role; ?category=&status= or ?location=)
//! GET    /{id}             -> get_asset           (any role)
//! PUT    /{id}             -> update_asset        (ADMIN, MANAGER)
//! DELETE /{id}             -> delete_asset        (ADMIN)
//! GET    /code/{code}      -> get_asset_by_code   (any role)
//! ```
//!
//! Role requirements are enforced by the RBAC middleware layered on in the
//! router builder, not here.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route(
            "/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route("/code/{code}", get(assets::get_asset_by_code))
}
