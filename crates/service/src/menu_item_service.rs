use models::menu_item::{self, Column, Entity as MenuItemEntity, Model, MenuItemInput, UpdateMenuItem};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::ServiceError;

/// List every menu item; an empty list is a valid result.
pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    let rows = MenuItemEntity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Get a menu item by id.
pub async fn get_item(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ServiceError> {
    let found = MenuItemEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Create a menu item after validation; the store assigns the id.
pub async fn create_item(db: &DatabaseConnection, input: &MenuItemInput) -> Result<Model, ServiceError> {
    // validations are in models::menu_item
    let created = menu_item::create(db, input).await?;
    Ok(created)
}

/// Replace a menu item in full. The payload id must match the addressed
/// id. The write is filtered on the id and checked via `rows_affected`,
/// so a record deleted between the existence check and the write surfaces
/// as a conflict instead of a false success.
pub async fn update_item(db: &DatabaseConnection, id: i32, input: &UpdateMenuItem) -> Result<(), ServiceError> {
    if input.id != id {
        return Err(ServiceError::Validation(vec![
            "id in the payload must match the id in the path".to_string(),
        ]));
    }
    menu_item::validate_input(&input.fields)?;

    let existing = MenuItemEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_none() {
        return Err(ServiceError::not_found("menu item"));
    }

    let res = MenuItemEntity::update_many()
        .col_expr(Column::Name, Expr::value(input.fields.name.clone()))
        .col_expr(Column::Description, Expr::value(input.fields.description.clone()))
        .col_expr(Column::Price, Expr::value(input.fields.price))
        .col_expr(Column::Category, Expr::value(input.fields.category.clone()))
        .col_expr(Column::DietaryTag, Expr::value(input.fields.dietary_tag.clone()))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::Conflict("menu item was removed concurrently".to_string()));
    }
    Ok(())
}

/// Delete a menu item; returns true if deleted.
pub async fn delete_item(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = MenuItemEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// Case-insensitive substring search over item names.
pub async fn search_by_name(db: &DatabaseConnection, term: &str) -> Result<Vec<Model>, ServiceError> {
    let term = non_empty(term, "search term")?;
    let pattern = contains_pattern(term);
    let rows = MenuItemEntity::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).like(pattern))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Exact category match, case-insensitive.
pub async fn filter_by_category(db: &DatabaseConnection, category: &str) -> Result<Vec<Model>, ServiceError> {
    let category = non_empty(category, "category")?;
    let rows = MenuItemEntity::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Category))).eq(category.to_lowercase()))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Case-insensitive substring match over dietary tags; untagged items
/// never match.
pub async fn filter_by_dietary_tag(db: &DatabaseConnection, tag: &str) -> Result<Vec<Model>, ServiceError> {
    let tag = non_empty(tag, "dietary tag")?;
    let pattern = contains_pattern(tag);
    let rows = MenuItemEntity::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::DietaryTag))).like(pattern))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Items with price in [min, max] inclusive, cheapest first.
pub async fn filter_by_price_range(db: &DatabaseConnection, min: f64, max: f64) -> Result<Vec<Model>, ServiceError> {
    let mut violations = Vec::new();
    if !(min >= 0.0) {
        violations.push("minPrice must be zero or greater".to_string());
    }
    if !(max >= 0.0) {
        violations.push("maxPrice must be zero or greater".to_string());
    }
    if violations.is_empty() && min > max {
        violations.push("minPrice must not exceed maxPrice".to_string());
    }
    if !violations.is_empty() {
        return Err(ServiceError::Validation(violations));
    }
    let rows = MenuItemEntity::find()
        .filter(Column::Price.between(min, max))
        .order_by_asc(Column::Price)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Validation(vec![format!("{what} must not be empty")]));
    }
    Ok(trimmed)
}

fn contains_pattern(term: &str) -> String {
    format!("%{}%", term.to_lowercase())
}
