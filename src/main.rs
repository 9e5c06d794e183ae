// src/main.rs

mod app_state;
mod config;
mod dashboard_data;
mod error;
mod models;
mod store;
mod task;
mod team_management;
mod team_update;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use crate::app_state::AppState;
use crate::config::Config;
use crate::dashboard_data::{clear_all, get_stats};
use crate::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::task::{create_task, delete_task, list_tasks, update_task_status};
use crate::team_management::{create_team, list_teams};
use crate::team_update::{create_update, delete_update, list_updates};

/// Registers every `/api` route plus the extractor configs that turn bad
/// input into the JSON failure envelope.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                // TEAMS
                .service(
                    web::scope("/teams")
                        .route("", web::post().to(create_team))
                        .route("", web::get().to(list_teams)),
                )
                // TASKS
                .service(
                    web::scope("/tasks")
                        .route("", web::post().to(create_task))
                        .route("", web::get().to(list_tasks))
                        .route("/{task_id}", web::patch().to(update_task_status))
                        .route("/{task_id}", web::delete().to(delete_task)),
                )
                // UPDATES
                .service(
                    web::scope("/updates")
                        .route("", web::post().to(create_update))
                        .route("", web::get().to(list_updates))
                        .route("/{update_id}", web::delete().to(delete_update)),
                )
                // DASHBOARD
                .route("/stats", web::get().to(get_stats))
                .route("/clear-all", web::delete().to(clear_all)),
        );
}

fn cors(config: &Config) -> Cors {
    let cors = match &config.frontend_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::ACCEPT])
        .max_age(3600)
}

#[cfg(test)]
pub(crate) fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(Config::default()))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    // Built once so every worker shares the same store.
    let state = web::Data::new(AppState::new(config.clone()));

    info!("Server running at http://{}:{}", config.host, config.port);
    match &config.frontend_origin {
        Some(origin) => info!("Allowed CORS Origin: {}", origin),
        None => info!("Allowed CORS Origin: any"),
    }

    let bind_address = config.bind_address();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&config))
            .app_data(state.clone())
            .configure(configure_api)
    })
    .bind(bind_address)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn cors_preflight_allows_patch() {
        let app = test::init_service(
            App::new()
                .wrap(cors(&Config::default()))
                .app_data(test_state())
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::default()
            .method(http::Method::OPTIONS)
            .uri("/api/tasks/abc")
            .insert_header(("Origin", "http://localhost:5500"))
            .insert_header(("Access-Control-Request-Method", "PATCH"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(http::header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn unknown_routes_are_not_found() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure_api)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
