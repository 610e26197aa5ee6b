pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{BrowseArgs, ServeArgs};

pub use adapters::{MemorySource, OdooClient, ProxyClient};
pub use config::ProxyConfig;
pub use core::filter::{filter_items, FilterOptions, Filters};
pub use core::pagination::InfiniteCatalog;
pub use core::price::format_price;
pub use utils::error::{CatalogError, Result};
