pub mod catalog;
pub mod filter;
pub mod pagination;
pub mod price;

pub use crate::domain::model::{CatalogItem, Page, ProductItem, SortOption};
pub use crate::domain::ports::{CatalogSource, Listing};
pub use crate::utils::error::Result;
