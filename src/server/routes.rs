use super::{error::AppError, state::AppState};
use crate::core::{Page, ProductItem};
use crate::utils::error::CatalogError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

/// `GET /api/odooProducts?limit=&offset=`
pub async fn products_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Page<ProductItem>>, AppError> {
    let limit = parse_param(&params, "limit", state.default_limit)?;
    let offset = parse_param(&params, "offset", 0u64)?;
    if limit == 0 {
        return Err(CatalogError::InvalidQueryError {
            param: "limit".to_string(),
            value: "0".to_string(),
        }
        .into());
    }

    let page = state.odoo.fetch_products(limit, offset).await?;
    tracing::info!(
        "Proxied search_read limit={} offset={} -> {} items (next {:?})",
        limit,
        offset,
        page.items.len(),
        page.next_offset
    );

    Ok(Json(page))
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// 缺少參數時用預設值，無法解析則回 400
fn parse_param<T: std::str::FromStr>(
    params: &HashMap<String, String>,
    name: &str,
    default: T,
) -> Result<T, CatalogError> {
    match params.get(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CatalogError::InvalidQueryError {
                param: name.to_string(),
                value: raw.clone(),
            }),
    }
}
