#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use odoo_catalog::config::{OdooSettings, ProxyConfig};
#[cfg(feature = "lambda")]
use odoo_catalog::core::{Page, ProductItem};
#[cfg(feature = "lambda")]
use odoo_catalog::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use odoo_catalog::{CatalogError, OdooClient};
#[cfg(feature = "lambda")]
use serde::Deserialize;

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    pub limit: Option<usize>,
    pub offset: Option<u64>,
}

#[cfg(feature = "lambda")]
async fn function_handler(
    odoo: &OdooClient<OdooSettings>,
    default_limit: usize,
    event: LambdaEvent<Request>,
) -> Result<Page<ProductItem>, Error> {
    let limit = event.payload.limit.unwrap_or(default_limit);
    let offset = event.payload.offset.unwrap_or(0);
    if limit == 0 {
        return Err(Box::new(CatalogError::InvalidQueryError {
            param: "limit".to_string(),
            value: "0".to_string(),
        }));
    }

    tracing::info!("Fetching products limit={} offset={}", limit, offset);
    let page = odoo.fetch_products(limit, offset).await?;
    tracing::info!("Returning {} items", page.items.len());
    Ok(page)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 設定只讀一次，client 在多次呼叫間共用
    let config = ProxyConfig::from_env()?;
    config.validate()?;

    let default_limit = config.catalog.page_size;
    let odoo = OdooClient::new(config.odoo);
    let odoo_ref = &odoo;

    run(service_fn(move |event: LambdaEvent<Request>| async move {
        function_handler(odoo_ref, default_limit, event).await
    }))
    .await
}
