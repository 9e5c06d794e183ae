// team_management.rs

use actix_web::{web, HttpResponse};
use log::info;
use serde_json::json;

use crate::app_state::AppState;
use crate::error::StoreError;
use crate::models::CreateTeamRequest;

// POST /api/teams
// Registers a team. Only `teamName` is required.
pub async fn create_team(
    data: web::Data<AppState>,
    payload: web::Json<CreateTeamRequest>,
) -> Result<HttpResponse, StoreError> {
    let team = data.store.create_team(payload.into_inner())?;
    info!("Team created: {} ({})", team.team_name, team.id);

    Ok(HttpResponse::Created().json(json!({ "success": true, "team": team })))
}

// GET /api/teams
// All teams in registration order.
pub async fn list_teams(data: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let teams = data.store.list_teams()?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": teams.len(),
        "teams": teams,
    })))
}
