use anyhow::Result;
use httpmock::prelude::*;
use odoo_catalog::adapters::sample_travels;
use odoo_catalog::config::{CatalogSettings, OdooSettings, ProxyConfig, ServerSettings};
use odoo_catalog::core::catalog::favorites;
use odoo_catalog::core::filter::{search_by_title, FilterKind};
use odoo_catalog::core::pagination::FetchStatus;
use odoo_catalog::core::{ProductItem, SortOption};
use odoo_catalog::server::{router, AppState, PRODUCTS_PATH};
use odoo_catalog::{filter_items, Filters, InfiniteCatalog, MemorySource, ProxyClient};
use serde_json::{json, Value};
use tokio::net::TcpListener;

fn odoo_products(range: std::ops::Range<i64>) -> Vec<Value> {
    range
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Expedición {}", id),
                "list_price": 100.0 * id as f64,
                "compare_list_price": if id % 2 == 0 { json!(150.0 * id as f64) } else { json!(false) },
                "x_studio_catalogofoto2": false
            })
        })
        .collect()
}

async fn spawn_proxy(odoo_url: String) -> Result<String> {
    let config = ProxyConfig {
        odoo: OdooSettings {
            url: odoo_url,
            db: "b4experience".to_string(),
            user: "api@b4experience.com".to_string(),
            api_key: "test-key".to_string(),
            model: "product.template".to_string(),
        },
        server: ServerSettings::default(),
        catalog: CatalogSettings::default(),
    };
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    let app = router(AppState::new(&config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok(format!("http://{}{}", address, PRODUCTS_PATH))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_infinite_scroll_through_proxy() -> Result<()> {
    let odoo = MockServer::start();
    odoo.mock(|when, then| {
        when.method(POST).path("/jsonrpc").body_contains("\"login\"");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": 7}));
    });
    let first = odoo.mock(|when, then| {
        when.method(POST)
            .path("/jsonrpc")
            .body_contains("\"search_read\"")
            .body_contains("\"offset\":0");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 2, "result": odoo_products(1..9)}));
    });
    let second = odoo.mock(|when, then| {
        when.method(POST)
            .path("/jsonrpc")
            .body_contains("\"search_read\"")
            .body_contains("\"offset\":8");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 2, "result": odoo_products(9..12)}));
    });

    let endpoint = spawn_proxy(odoo.base_url()).await?;
    let mut catalog = InfiniteCatalog::new(ProxyClient::new(endpoint));

    assert!(catalog.on_sentinel_visible().await?);
    assert_eq!(catalog.len(), 8);
    assert!(catalog.has_next_page());

    assert!(catalog.on_sentinel_visible().await?);
    assert_eq!(catalog.len(), 11);
    assert_eq!(catalog.status(), FetchStatus::Exhausted);

    // 沒有下一頁時不再發出請求
    assert!(!catalog.on_sentinel_visible().await?);
    first.assert_hits(1);
    second.assert_hits(1);

    let products: Vec<ProductItem> = catalog.items().cloned().collect();
    assert_eq!(products[1].original_price, Some(300.0));
    assert_eq!(products[0].original_price, None);
    assert_eq!(products[0].img_url, "");

    let found = search_by_title(&products, "expedición 1");
    let ids: Vec<i64> = found.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 10, 11]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_page_keeps_loaded_items() -> Result<()> {
    let odoo = MockServer::start();
    odoo.mock(|when, then| {
        when.method(POST).path("/jsonrpc").body_contains("\"login\"");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": 7}));
    });
    odoo.mock(|when, then| {
        when.method(POST)
            .path("/jsonrpc")
            .body_contains("\"search_read\"")
            .body_contains("\"offset\":0");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 2, "result": odoo_products(1..9)}));
    });
    let failing = odoo.mock(|when, then| {
        when.method(POST)
            .path("/jsonrpc")
            .body_contains("\"search_read\"")
            .body_contains("\"offset\":8");
        then.status(200).json_body(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "error": {"code": 200, "message": "Odoo Server Error"}
        }));
    });

    let endpoint = spawn_proxy(odoo.base_url()).await?;
    let mut catalog = InfiniteCatalog::new(ProxyClient::new(endpoint));

    catalog.on_sentinel_visible().await?;
    let error = catalog.on_sentinel_visible().await;
    assert!(error.is_err());
    assert_eq!(catalog.status(), FetchStatus::Failed);
    assert_eq!(catalog.len(), 8);
    assert!(catalog.has_next_page());

    // 重試同一個 offset
    assert!(catalog.on_sentinel_visible().await.is_err());
    failing.assert_hits(2);
    Ok(())
}

#[tokio::test]
async fn test_browse_sample_catalog() -> Result<()> {
    let source = MemorySource::new(sample_travels())?;
    let mut catalog = InfiniteCatalog::new(source);

    assert!(catalog.on_sentinel_visible().await?);
    assert_eq!(catalog.len(), 8);
    assert_eq!(catalog.fetch_all().await?, 12);
    assert!(!catalog.has_next_page());

    assert_eq!(catalog.toggle_like("9"), Some(true));
    assert_eq!(catalog.toggle_like("404"), None);

    let items: Vec<_> = catalog.items().cloned().collect();
    let liked: Vec<&str> = favorites(&items).map(|item| item.id.as_str()).collect();
    assert_eq!(liked, vec!["9"]);

    let mut filters = Filters::default();
    filters.toggle(FilterKind::Location, "Norway", true);
    filters.sort = Some(SortOption::LowestPrice);

    let visible = filter_items(&items, "", &filters);
    let ids: Vec<&str> = visible.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "6"]);

    // 搜尋同時比對標題與地點
    let by_location = filter_items(&items, "TOKYO", &Filters::default());
    assert_eq!(by_location.len(), 1);
    assert_eq!(by_location[0].id, "2");

    filters.clear();
    filters.toggle(FilterKind::Activity, "cultural", true);
    filters.sort = Some(SortOption::HighestPrice);
    let cultural: Vec<&str> = filter_items(&items, "", &filters)
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(cultural, vec!["2", "10"]);
    Ok(())
}
