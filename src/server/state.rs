use crate::adapters::OdooClient;
use crate::config::{OdooSettings, ProxyConfig};
use std::sync::Arc;

pub struct AppState {
    pub odoo: OdooClient<OdooSettings>,
    pub default_limit: usize,
}

impl AppState {
    pub fn new(config: &ProxyConfig) -> Arc<Self> {
        Arc::new(Self {
            odoo: OdooClient::new(config.odoo.clone()),
            default_limit: config.catalog.page_size,
        })
    }
}
