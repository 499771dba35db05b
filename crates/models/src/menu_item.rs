use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const CATEGORY_MAX_CHARS: usize = 50;
pub const DIETARY_TAG_MAX_CHARS: usize = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_item")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub dietary_tag: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Client-supplied fields of a menu item; the id is store-assigned.
/// Every field is tolerated as absent so that a missing required field is
/// reported by validation, with the field named, instead of failing at
/// the JSON layer.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItemInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub dietary_tag: Option<String>,
}

/// Full-replace payload for updates; `id` must match the addressed record.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateMenuItem {
    #[serde(default)]
    pub id: i32,
    #[serde(flatten)]
    pub fields: MenuItemInput,
}

/// Validate client-supplied fields against the data-model constraints,
/// collecting every violation rather than stopping at the first.
pub fn validate_input(input: &MenuItemInput) -> Result<(), ModelError> {
    let mut violations = Vec::new();
    if input.name.trim().is_empty() {
        violations.push("name is required and must not be empty".to_string());
    } else if input.name.chars().count() > NAME_MAX_CHARS {
        violations.push(format!("name must be at most {NAME_MAX_CHARS} characters"));
    }
    if let Some(desc) = &input.description {
        if desc.chars().count() > DESCRIPTION_MAX_CHARS {
            violations.push(format!("description must be at most {DESCRIPTION_MAX_CHARS} characters"));
        }
    }
    if !(input.price > 0.0) {
        violations.push("price is required and must be greater than zero".to_string());
    }
    if input.category.trim().is_empty() {
        violations.push("category is required and must not be empty".to_string());
    } else if input.category.chars().count() > CATEGORY_MAX_CHARS {
        violations.push(format!("category must be at most {CATEGORY_MAX_CHARS} characters"));
    }
    if let Some(tag) = &input.dietary_tag {
        if tag.chars().count() > DIETARY_TAG_MAX_CHARS {
            violations.push(format!("dietaryTag must be at most {DIETARY_TAG_MAX_CHARS} characters"));
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ModelError::Validation(violations))
    }
}

/// Insert a new menu item after validation; the store assigns the id.
pub async fn create(db: &DatabaseConnection, input: &MenuItemInput) -> Result<Model, ModelError> {
    validate_input(input)?;
    let am = ActiveModel {
        name: Set(input.name.clone()),
        description: Set(input.description.clone()),
        price: Set(input.price),
        category: Set(input.category.clone()),
        dietary_tag: Set(input.dietary_tag.clone()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
