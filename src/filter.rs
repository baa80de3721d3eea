//! Translation of listing query parameters into a store condition.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ColumnTrait, Condition, sea_query::Expr};

use crate::{
    entity::products::Column,
    error::{AppError, AppResult},
    models::Category,
    routes::params::ProductQuery,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Is(Category),
    /// A value outside the enumeration. Matches no stored product.
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    From(DateTime<Utc>),
    Until(DateTime<Utc>),
}

/// Field-level conditions, ANDed together.
///
/// Each field holds at most one condition. When `dateAdded` carries both a
/// start and an end, the end replaces the start and the start is never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<CategoryFilter>,
    pub date_added: Option<DateBound>,
    pub min_quantity: Option<i32>,
}

impl ProductFilter {
    pub fn from_query(query: &ProductQuery) -> AppResult<Self> {
        let mut filter = ProductFilter::default();

        if let Some(category) = non_empty(query.category.as_deref()) {
            filter.category = Some(match category.parse::<Category>() {
                Ok(category) => CategoryFilter::Is(category),
                Err(_) => CategoryFilter::Unknown(category.to_string()),
            });
        }

        if let Some(range) = non_empty(query.date_added.as_deref()) {
            let mut parts = range.split(',');
            let start = parts.next().and_then(|s| non_empty(Some(s)));
            let end = parts.next().and_then(|s| non_empty(Some(s)));
            filter.date_added = match (start, end) {
                (_, Some(end)) => Some(DateBound::Until(parse_date(end)?)),
                (Some(start), None) => Some(DateBound::From(parse_date(start)?)),
                (None, None) => None,
            };
        }

        if let Some(stock) = non_empty(query.stock.as_deref()) {
            let min = stock
                .parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("invalid stock value `{stock}`")))?;
            filter.min_quantity = Some(min);
        }

        Ok(filter)
    }

    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        match &self.category {
            Some(CategoryFilter::Is(category)) => {
                condition = condition.add(Column::Category.eq(*category));
            }
            Some(CategoryFilter::Unknown(_)) => {
                condition = condition.add(Expr::val(1).eq(0));
            }
            None => {}
        }

        match self.date_added {
            Some(DateBound::From(start)) => condition = condition.add(Column::DateAdded.gte(start)),
            Some(DateBound::Until(end)) => condition = condition.add(Column::DateAdded.lte(end)),
            None => {}
        }

        if let Some(min) = self.min_quantity {
            condition = condition.add(Column::Quantity.gte(min));
        }

        condition
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Accepts RFC 3339, a bare date-time (read as UTC) or a bare date (midnight UTC).
pub fn parse_date(value: &str) -> AppResult<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }
    Err(AppError::BadRequest(format!("invalid date `{value}`")))
}
