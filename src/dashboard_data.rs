// src/dashboard_data.rs

use actix_web::{web, HttpResponse};
use log::{debug, warn};
use serde_json::json;

use crate::app_state::AppState;
use crate::error::StoreError;

/// GET /api/stats
/// Totals plus per-status and per-priority task counts for the dashboard.
pub async fn get_stats(data: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let stats = data.store.compute_stats()?;
    debug!(
        "{} of {} tasks carry a known status",
        stats.tasks_by_status.total(),
        stats.total_tasks
    );

    Ok(HttpResponse::Ok().json(json!({ "success": true, "stats": stats })))
}

/// DELETE /api/clear-all
pub async fn clear_all(data: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    data.store.clear_all()?;
    warn!("All teams, tasks and updates cleared");

    Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "All data cleared" })))
}
