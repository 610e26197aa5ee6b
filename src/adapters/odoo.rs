use crate::core::pagination::next_offset;
use crate::core::{CatalogSource, Page, ProductItem};
use crate::domain::model::OdooProduct;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_price;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Fields the proxy reads from `product.template`.
pub const PRODUCT_FIELDS: [&str; 5] = [
    "id",
    "name",
    "list_price",
    "compare_list_price",
    "x_studio_catalogofoto2",
];

/// 完整商品列表多抓網頁連結欄位
pub const PRODUCT_DETAIL_FIELDS: [&str; 6] = [
    "id",
    "name",
    "list_price",
    "compare_list_price",
    "x_studio_catalogofoto2",
    "x_studio_enlace_web",
];

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    params: RpcParams<'a>,
    id: u32,
}

#[derive(Debug, Serialize)]
struct RpcParams<'a> {
    service: &'a str,
    method: &'a str,
    args: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct SearchRead<'a> {
    pub model: &'a str,
    pub fields: &'a [&'a str],
    pub limit: Option<usize>,
    pub offset: u64,
}

pub struct OdooClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> OdooClient<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    fn endpoint(&self) -> String {
        format!("{}/jsonrpc", self.config.odoo_url().trim_end_matches('/'))
    }

    /// 送出一次 JSON-RPC 呼叫；回應帶 `error` 時直接把原始內容往上丟
    async fn call<T: DeserializeOwned>(
        &self,
        service: &str,
        method: &str,
        args: Value,
        id: u32,
    ) -> Result<T> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method: "call",
            params: RpcParams {
                service,
                method,
                args,
            },
            id,
        };

        tracing::debug!("JSON-RPC {}.{} -> {}", service, method, self.endpoint());
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: RpcResponse = response.json().await?;
        if let Some(error) = body.error {
            return Err(CatalogError::RpcError {
                message: error.to_string(),
            });
        }

        Ok(serde_json::from_value(body.result.unwrap_or(Value::Null))?)
    }

    /// `common.login`，成功時回傳 uid
    pub async fn login(&self) -> Result<i64> {
        let result: Value = self
            .call(
                "common",
                "login",
                json!([
                    self.config.database(),
                    self.config.username(),
                    self.config.api_key()
                ]),
                1,
            )
            .await?;

        result.as_i64().ok_or_else(|| CatalogError::RpcError {
            message: format!("login rejected for user '{}'", self.config.username()),
        })
    }

    pub async fn search_read<T: DeserializeOwned>(
        &self,
        uid: i64,
        query: &SearchRead<'_>,
    ) -> Result<Vec<T>> {
        let mut kwargs = json!({
            "fields": query.fields,
            "offset": query.offset,
        });
        if let Some(limit) = query.limit {
            kwargs["limit"] = json!(limit);
        }

        self.call(
            "object",
            "execute_kw",
            json!([
                self.config.database(),
                uid,
                self.config.api_key(),
                query.model,
                "search_read",
                [[]],
                kwargs
            ]),
            2,
        )
        .await
    }

    /// Login + one page of `search_read`, reshaped for the UI.
    pub async fn fetch_products(&self, limit: usize, offset: u64) -> Result<Page<ProductItem>> {
        let uid = self.login().await?;
        let products: Vec<OdooProduct> = self
            .search_read(
                uid,
                &SearchRead {
                    model: self.config.product_model(),
                    fields: &PRODUCT_FIELDS,
                    limit: Some(limit),
                    offset,
                },
            )
            .await?;

        let items = products
            .into_iter()
            .map(|product| {
                validate_price("list_price", product.list_price)?;
                Ok(ProductItem::from(product))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Page {
            next_offset: next_offset(offset, limit, items.len()),
            items,
        })
    }

    /// 不分頁，一次取回全部商品（含網頁連結）
    pub async fn fetch_all_products(&self) -> Result<Vec<OdooProduct>> {
        let uid = self.login().await?;
        self.search_read(
            uid,
            &SearchRead {
                model: self.config.product_model(),
                fields: &PRODUCT_DETAIL_FIELDS,
                limit: None,
                offset: 0,
            },
        )
        .await
    }
}

#[async_trait]
impl<C: ConfigProvider> CatalogSource for OdooClient<C> {
    type Item = ProductItem;

    async fn fetch_page(&self, offset: u64, limit: usize) -> Result<Page<ProductItem>> {
        self.fetch_products(limit, offset).await
    }
}
