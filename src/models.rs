use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::products::Model as ProductModel;

/// Canonical product category.
///
/// Stored and serialized as the lowercase ASCII slug. Parsing is ASCII
/// case-insensitive and also accepts the accented spelling of `electrónica`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[sea_orm(string_value = "electronica")]
    #[strum(to_string = "electronica", serialize = "electrónica")]
    Electronica,
    #[sea_orm(string_value = "ropa")]
    #[strum(to_string = "ropa")]
    Ropa,
    #[sea_orm(string_value = "hogar")]
    #[strum(to_string = "hogar")]
    Hogar,
    #[sea_orm(string_value = "herramienta")]
    #[strum(to_string = "herramienta")]
    Herramienta,
    #[sea_orm(string_value = "plomeria")]
    #[strum(to_string = "plomeria", serialize = "plomería")]
    Plomeria,
    #[sea_orm(string_value = "bombillos")]
    #[strum(to_string = "bombillos")]
    Bombillos,
}

impl TryFrom<String> for Category {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub category: Category,
    pub sales: i32,
    pub provider: String,
    pub image: String,
    pub date_added: DateTime<Utc>,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            quantity: model.quantity,
            category: model.category,
            sales: model.sales,
            provider: model.provider,
            image: model.image,
            date_added: model.date_added,
        }
    }
}
