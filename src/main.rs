use clap::Parser;
use odoo_catalog::server;
use odoo_catalog::utils::{logger, validation::Validate};
use odoo_catalog::ServeArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServeArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting catalog proxy");

    // 載入並驗證配置
    let config = match args.load_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if args.verbose {
        tracing::debug!("Proxy config: {:?}", config);
    }
    tracing::info!(
        "📡 Forwarding to {} (db {}, model {})",
        config.odoo.url,
        config.odoo.db,
        config.odoo.model
    );

    if let Err(e) = server::start_server(&config).await {
        tracing::error!(
            "❌ Proxy stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code().max(1));
    }

    Ok(())
}
