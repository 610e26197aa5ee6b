use crate::config::ProxyConfig;
use crate::core::filter::{FilterKind, Filters};
use crate::core::pagination::ITEMS_PER_PAGE;
use crate::core::SortOption;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-proxy")]
#[command(about = "JSON-RPC proxy exposing the Odoo product catalog as paginated JSON")]
pub struct ServeArgs {
    /// Path to a TOML configuration file (defaults to ODOO_* environment variables)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServeArgs {
    /// 讀取設定檔或環境變數，再套用命令列覆蓋
    pub fn load_config(&self) -> Result<ProxyConfig> {
        let mut config = match &self.config {
            Some(path) => ProxyConfig::from_file(path)?,
            None => ProxyConfig::from_env()?,
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Built-in travel packages
    Sample,
    /// Products served by a running catalog proxy
    Proxy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    BestRated,
    LowestPrice,
    HighestPrice,
}

impl From<SortArg> for SortOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::BestRated => SortOption::BestRated,
            SortArg::LowestPrice => SortOption::LowestPrice,
            SortArg::HighestPrice => SortOption::HighestPrice,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-browse")]
#[command(about = "Search, filter and page through the catalog from the terminal")]
pub struct BrowseArgs {
    #[arg(long, value_enum, default_value = "sample")]
    pub source: SourceKind,

    /// Proxy endpoint used with `--source proxy`
    #[arg(long, default_value = "http://localhost:3000/api/odooProducts")]
    pub endpoint: String,

    /// Case-insensitive text matched against title (and location for travels)
    #[arg(short, long, default_value = "")]
    pub search: String,

    #[arg(long, value_delimiter = ',')]
    pub activity: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub location: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub duration: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub group_size: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub category: Vec<String>,

    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    #[arg(long, default_value_t = ITEMS_PER_PAGE)]
    pub page_size: usize,

    /// Number of pages to load (all pages when omitted)
    #[arg(long)]
    pub pages: Option<usize>,

    /// Toggle the favorite flag of these item ids
    #[arg(long, value_delimiter = ',')]
    pub like: Vec<String>,

    /// Show the detail view of one item
    #[arg(long)]
    pub detail: Option<String>,

    /// List the available filter values and exit
    #[arg(long)]
    pub options: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl BrowseArgs {
    pub fn filters(&self) -> Filters {
        let mut filters = Filters::default();
        let selections = [
            (FilterKind::Activity, &self.activity),
            (FilterKind::Location, &self.location),
            (FilterKind::Duration, &self.duration),
            (FilterKind::GroupSize, &self.group_size),
            (FilterKind::Category, &self.category),
        ];
        for (kind, values) in selections {
            for value in values {
                filters.toggle(kind, value, true);
            }
        }
        filters.sort = self.sort.map(SortOption::from);
        filters
    }
}
