use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use models::menu_item::{MenuItemInput, Model, UpdateMenuItem};
use service::menu_item_service;

use crate::errors::JsonApiError;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Model>>, JsonApiError> {
    let items = menu_item_service::list_items(&state.db).await?;
    info!(count = items.len(), "list menu items");
    Ok(Json(items))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Model>, JsonApiError> {
    match menu_item_service::get_item(&state.db, id).await? {
        Some(item) => Ok(Json(item)),
        None => Err(JsonApiError::not_found()),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MenuItemInput>,
) -> Result<impl IntoResponse, JsonApiError> {
    let created = menu_item_service::create_item(&state.db, &input).await?;
    info!(id = created.id, name = %created.name, category = %created.category, "created menu item");
    let location = format!("/items/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateMenuItem>,
) -> Result<StatusCode, JsonApiError> {
    menu_item_service::update_item(&state.db, id, &input).await?;
    info!(id, "updated menu item");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    if menu_item_service::delete_item(&state.db, id).await? {
        info!(id, "deleted menu item");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found())
    }
}

pub async fn search_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Model>>, JsonApiError> {
    let items = menu_item_service::search_by_name(&state.db, &name).await?;
    info!(term = %name, count = items.len(), "search menu items by name");
    Ok(Json(items))
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Model>>, JsonApiError> {
    let items = menu_item_service::filter_by_category(&state.db, &category).await?;
    Ok(Json(items))
}

pub async fn by_dietary_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<Model>>, JsonApiError> {
    let items = menu_item_service::filter_by_dietary_tag(&state.db, &tag).await?;
    Ok(Json(items))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeQuery {
    pub min_price: f64,
    pub max_price: f64,
}

pub async fn by_price_range(
    State(state): State<AppState>,
    Query(q): Query<PriceRangeQuery>,
) -> Result<Json<Vec<Model>>, JsonApiError> {
    let items = menu_item_service::filter_by_price_range(&state.db, q.min_price, q.max_price).await?;
    Ok(Json(items))
}
