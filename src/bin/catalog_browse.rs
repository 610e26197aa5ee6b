use clap::Parser;
use odoo_catalog::adapters::{sample_travels, MemorySource, ProxyClient};
use odoo_catalog::config::cli::SourceKind;
use odoo_catalog::core::catalog::find_item;
use odoo_catalog::core::filter::{filter_items, search_by_title, FilterOptions};
use odoo_catalog::core::pagination::InfiniteCatalog;
use odoo_catalog::core::price::{discount_percent, format_price, savings};
use odoo_catalog::core::{CatalogItem, CatalogSource, Listing, ProductItem};
use odoo_catalog::{BrowseArgs, CatalogError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = BrowseArgs::parse();

    odoo_catalog::utils::logger::init_cli_logger(args.verbose);
    tracing::info!("Starting catalog browser ({:?} source)", args.source);

    let result = match args.source {
        SourceKind::Sample => browse_travels(&args).await,
        SourceKind::Proxy => browse_products(&args).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Browsing failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code().max(1));
    }

    Ok(())
}

/// 依 `--pages` 載入頁面；未指定時載入全部
async fn load_pages<S: CatalogSource>(
    catalog: &mut InfiniteCatalog<S>,
    pages: Option<usize>,
) -> Result<(), CatalogError> {
    match pages {
        Some(count) => {
            for _ in 0..count {
                if !catalog.on_sentinel_visible().await? {
                    break;
                }
            }
        }
        None => {
            catalog.fetch_all().await?;
        }
    }
    tracing::debug!(
        "Loaded {} items in {} pages (more available: {})",
        catalog.len(),
        catalog.page_count(),
        catalog.has_next_page()
    );
    Ok(())
}

async fn browse_travels(args: &BrowseArgs) -> Result<(), CatalogError> {
    let source = MemorySource::new(sample_travels())?;
    let mut catalog = InfiniteCatalog::with_page_size(source, args.page_size);
    load_pages(&mut catalog, args.pages).await?;

    for id in &args.like {
        match catalog.toggle_like(id) {
            Some(true) => println!("♥ Added {} to favorites", id),
            Some(false) => println!("♡ Removed {} from favorites", id),
            None => tracing::warn!("No item with id {}", id),
        }
    }

    let items: Vec<CatalogItem> = catalog.items().cloned().collect();

    if args.options {
        print_options(&FilterOptions::from_items(&items));
        return Ok(());
    }

    if let Some(id) = &args.detail {
        match find_item(&items, id) {
            Some(item) => print_travel_detail(item),
            None => println!("No travels found"),
        }
        return Ok(());
    }

    let filters = args.filters();
    let visible = filter_items(&items, &args.search, &filters);

    println!("{} travels found", visible.len());
    if visible.is_empty() {
        println!("No travels found");
    }
    for item in visible {
        print_travel_card(item);
    }
    if catalog.has_next_page() {
        println!("… more travels available (use --pages)");
    }
    Ok(())
}

async fn browse_products(args: &BrowseArgs) -> Result<(), CatalogError> {
    if args.filters().has_active() || !args.like.is_empty() {
        tracing::warn!("Filters, sort and favorites only apply to the travel catalog");
    }

    let source = ProxyClient::new(args.endpoint.clone());
    let mut catalog = InfiniteCatalog::with_page_size(source, args.page_size);
    load_pages(&mut catalog, args.pages).await?;

    let products: Vec<ProductItem> = catalog.items().cloned().collect();

    if let Some(id) = &args.detail {
        match find_item(&products, id) {
            Some(product) => print_product(product, true),
            None => println!("No products found"),
        }
        return Ok(());
    }

    let visible = search_by_title(&products, &args.search);
    println!("{} productos encontrados", visible.len());
    for product in visible {
        print_product(product, false);
    }
    Ok(())
}

fn price_line<T: Listing>(item: &T) -> String {
    let mut line = format_price(item.price());
    if let Some(original) = item.original_price().filter(|o| *o > item.price()) {
        line.push_str(&format!("  (was {})", format_price(original)));
    }
    line
}

fn print_travel_card(item: &CatalogItem) {
    let tag = item
        .category
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| item.activity.clone());
    let heart = if item.is_liked { "♥" } else { "♡" };

    println!();
    println!("[{}] {} · {}", item.id, item.title, item.location);
    println!("    {} ({} reviews) · {}", item.rating, item.review_count, tag);
    println!("    {}    {} {}", price_line(item), heart, item.likes);
}

fn print_travel_detail(item: &CatalogItem) {
    print_travel_card(item);
    println!("    Duration: {}", item.duration);
    println!("    Group size: {}", item.group_size);
    println!("    Price per person: {}", format_price(item.price));
    if let Some(percent) = discount_percent(item.price, item.original_price) {
        println!("    {}% off", percent);
    }
    println!("    Image: {}", item.img_url);
}

fn print_product(product: &ProductItem, detail: bool) {
    println!();
    println!("[{}] {}", product.id, product.title);
    println!("    {}", price_line(product));
    if detail {
        if let Some(saved) = savings(product.price, product.original_price) {
            println!("    You save {}", format_price(saved));
        }
        if product.img_url.is_empty() {
            println!("    Sin imagen");
        } else {
            println!("    Image: {}", product.img_url);
        }
    }
}

fn print_options(options: &FilterOptions) {
    let sections = [
        ("Activity", &options.activities),
        ("Location", &options.locations),
        ("Duration", &options.durations),
        ("Group Size", &options.group_sizes),
        ("Category", &options.categories),
    ];
    for (label, values) in sections {
        println!("{}: {}", label, values.join(", "));
    }
    let sorts: Vec<&str> = odoo_catalog::core::SortOption::ALL
        .iter()
        .map(|s| s.label())
        .collect();
    println!("Sort by: {}", sorts.join(", "));
}
