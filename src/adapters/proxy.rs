use crate::core::{CatalogSource, Page, ProductItem};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// 前端呼叫 proxy 的客戶端：`GET {endpoint}?limit=&offset=`
#[derive(Debug, Clone)]
pub struct ProxyClient {
    endpoint: String,
    client: Client,
}

impl ProxyClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for ProxyClient {
    type Item = ProductItem;

    async fn fetch_page(&self, offset: u64, limit: usize) -> Result<Page<ProductItem>> {
        tracing::debug!("GET {} limit={} offset={}", self.endpoint, limit, offset);
        let page = self
            .client
            .get(&self.endpoint)
            .query(&[("limit", limit as u64), ("offset", offset)])
            .send()
            .await?
            .error_for_status()?
            .json::<Page<ProductItem>>()
            .await?;
        Ok(page)
    }
}
