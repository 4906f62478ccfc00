//! Vitrine CLI - drive the storefront screens from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! vitrine catalog --category t-shirts --sort price-asc
//!
//! # Product detail with related products
//! vitrine product 1
//!
//! # Replay a scripted shopping session and check out
//! vitrine session demos/session.json --checkout
//! ```
//!
//! # Commands
//!
//! - `catalog` - List and filter products
//! - `product` - Show one product
//! - `session` - Apply cart intents from a script, optionally placing the order

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_storefront::{AppError, Catalog, SortOrder, StorefrontConfig};

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine storefront demo")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Only products offering this size
        #[arg(long)]
        size: Option<String>,

        /// Only products offering this color
        #[arg(long)]
        color: Option<String>,

        /// Hide out-of-stock products
        #[arg(long)]
        in_stock: bool,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// featured, price-asc, price-desc, rating, or name
        #[arg(long, default_value = "featured")]
        sort: SortOrder,
    },
    /// Show one product with related items
    Product {
        /// Product id
        id: String,
    },
    /// Replay a scripted shopping session
    Session {
        /// Path to the session script (JSON)
        script: PathBuf,

        /// Place the order after the steps run
        #[arg(long)]
        checkout: bool,

        /// Dispatch adds without size/color validation
        #[arg(long)]
        skip_validation: bool,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Install the tracing subscriber. Logs go to stderr so stdout stays clean for output.
fn init_tracing(config: &StorefrontConfig) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_storefront=info,vitrine=info".into());

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter));

    if config.log_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Failed to load configuration: {e}");
            }
            std::process::exit(2);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);
    init_tracing(&config);

    if let Err(e) = run(cli, config).await {
        e.report();
        #[allow(clippy::print_stderr)]
        {
            eprintln!("error: {}", e.user_message());
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<(), AppError> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_path(path)?,
        None => Catalog::seeded(),
    };
    let ctx = commands::Context {
        config,
        catalog,
        json: cli.json,
    };

    match cli.command {
        Commands::Catalog {
            category,
            min_price,
            max_price,
            size,
            color,
            in_stock,
            search,
            sort,
        } => {
            let query = vitrine_storefront::CatalogQuery {
                category,
                min_price,
                max_price,
                size,
                color,
                in_stock_only: in_stock,
                text: search,
                sort,
            };
            commands::catalog::list(&ctx, &query)
        }
        Commands::Product { id } => commands::product::show(&ctx, &id.into()),
        Commands::Session {
            script,
            checkout,
            skip_validation,
        } => {
            let options = commands::session::SessionOptions {
                checkout,
                validate: !skip_validation,
            };
            commands::session::run(&ctx, &script, options).await
        }
    }
}
