use crate::domain::model::{CatalogItem, Page, ProductItem};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 分頁資料來源：Odoo、Proxy 或記憶體中的範例資料
#[async_trait]
pub trait CatalogSource: Send + Sync {
    type Item: Send;

    async fn fetch_page(&self, offset: u64, limit: usize) -> Result<Page<Self::Item>>;
}

/// Connection settings for the ERP JSON-RPC endpoint.
pub trait ConfigProvider: Send + Sync {
    fn odoo_url(&self) -> &str;
    fn database(&self) -> &str;
    fn username(&self) -> &str;
    fn api_key(&self) -> &str;
    fn product_model(&self) -> &str;
}

/// Common read-only view over the two card variants.
pub trait Listing {
    fn key(&self) -> String;
    fn title(&self) -> &str;
    fn price(&self) -> f64;
    fn original_price(&self) -> Option<f64>;
}

impl Listing for CatalogItem {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn original_price(&self) -> Option<f64> {
        self.original_price
    }
}

impl Listing for ProductItem {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn original_price(&self) -> Option<f64> {
        self.original_price
    }
}
