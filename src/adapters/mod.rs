// Adapters layer: concrete catalog sources (Odoo JSON-RPC, proxy HTTP, in-memory).

pub mod memory;
pub mod odoo;
pub mod proxy;

pub use memory::{sample_travels, MemorySource};
pub use odoo::OdooClient;
pub use proxy::ProxyClient;
