use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod menu_items;

const SERVICE_NAME: &str = "menu-service";

/// Shared per-request state: the store pool plus the environment tag
/// reported by the health endpoint. No other cross-request state exists.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub environment: String,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok".into(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.into(),
        version: env!("CARGO_PKG_VERSION").into(),
        environment: state.environment.clone(),
    })
}

/// Build the full application router for the menu item resource.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let items = Router::new()
        .route("/items", get(menu_items::list).post(menu_items::create))
        .route("/items/health", get(health))
        .route("/items/price-range", get(menu_items::by_price_range))
        .route("/items/search/:name", get(menu_items::search_by_name))
        .route("/items/category/:category", get(menu_items::by_category))
        .route("/items/dietary/:tag", get(menu_items::by_dietary_tag))
        .route(
            "/items/:id",
            get(menu_items::get)
                .put(menu_items::update)
                .delete(menu_items::delete),
        );

    items
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
