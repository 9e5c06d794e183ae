// src/team_update.rs

use actix_web::{web, HttpResponse};
use log::{debug, info};
use serde_json::json;

use crate::app_state::AppState;
use crate::error::StoreError;
use crate::models::{CreateUpdateRequest, UpdateQuery};

/// POST /api/updates
/// New posts go to the top of the feed.
pub async fn create_update(
    data: web::Data<AppState>,
    payload: web::Json<CreateUpdateRequest>,
) -> Result<HttpResponse, StoreError> {
    let update = data.store.create_update(payload.into_inner())?;
    info!("Update posted: {} ({})", update.id, update.update_type);

    Ok(HttpResponse::Created().json(json!({ "success": true, "update": update })))
}

/// GET /api/updates?teamName=..&limit=..
pub async fn list_updates(
    data: web::Data<AppState>,
    query: web::Query<UpdateQuery>,
) -> Result<HttpResponse, StoreError> {
    let limit = query.limit_or(data.config.updates_limit);
    debug!("Listing updates for {:?}, limit {}", query.team_name(), limit);
    let updates = data.store.list_updates(query.team_name(), limit)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": updates.len(),
        "updates": updates,
    })))
}

/// DELETE /api/updates/{update_id}
pub async fn delete_update(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let update_id = path.into_inner();
    data.store.delete_update(&update_id)?;
    info!("Update deleted: {}", update_id);

    Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Update deleted" })))
}
