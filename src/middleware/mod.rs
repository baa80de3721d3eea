pub mod payload;
pub mod product_id;
