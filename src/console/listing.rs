use chrono::{DateTime, Utc};

use crate::models::Product;

/// Products below this quantity are flagged on their card.
pub const LOW_STOCK_BELOW: i32 = 5;

/// Role string held by the client. Only toggles control availability; the
/// service does not check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: String,
}

impl Session {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// In-memory date window applied on top of whatever the service returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if self.start.is_some_and(|start| at < start) {
            return false;
        }
        if self.end.is_some_and(|end| at > end) {
            return false;
        }
        true
    }
}

/// What one rendered product card needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard<'a> {
    pub product: &'a Product,
    pub low_stock: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

pub fn cards<'a>(products: &'a [Product], window: &DateWindow, session: &Session) -> Vec<ProductCard<'a>> {
    let admin = session.is_admin();
    products
        .iter()
        .filter(|product| window.contains(product.date_added))
        .map(|product| ProductCard {
            product,
            low_stock: product.quantity < LOW_STOCK_BELOW,
            can_edit: admin,
            can_delete: admin,
        })
        .collect()
}
