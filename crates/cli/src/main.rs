//! Corner Shop CLI - Browse the catalog and fill a basket.
//!
//! # Usage
//!
//! ```bash
//! # List the first page of products
//! corner-shop products
//!
//! # Search, sorted by price, second page
//! corner-shop products --search phone --sort price --order desc --page 2
//!
//! # Browse one category
//! corner-shop products --category laptops
//!
//! # List categories / show one product
//! corner-shop categories
//! corner-shop product 12
//!
//! # Interactive session with a basket
//! corner-shop shell
//! ```
//!
//! # Commands
//!
//! - `products` - Show one listing page
//! - `categories` - Show the category list
//! - `product` - Show a product's details
//! - `shell` - Interactive session (search, paginate, add to basket)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use corner_shop_core::{ProductId, SortOrder};
use corner_shop_storefront::config::StorefrontConfig;
use corner_shop_storefront::error::Result;
use corner_shop_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

use commands::browse::ListingOptions;

#[derive(Parser)]
#[command(name = "corner-shop")]
#[command(author, version, about = "Corner Shop storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of products
    Products {
        /// Full-text search (takes precedence over --category)
        #[arg(short, long)]
        search: Option<String>,

        /// Category slug to filter by
        #[arg(short, long)]
        category: Option<String>,

        /// Product field to sort by (e.g. price, title, rating)
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction (asc or desc)
        #[arg(long, default_value = "asc")]
        order: SortOrder,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// List product categories
    Categories,
    /// Show a product's details
    Product {
        /// Product ID
        id: ProductId,
    },
    /// Start an interactive shopping session
    Shell,
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

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration from environment (needed for Sentry init)
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = writeln!(io::stderr(), "corner-shop: {e}");
            std::process::exit(2);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let sentry_guard = init_sentry(&config);

    // Logs go to stderr so they never mix with command output.
    // Defaults to warn level so fetch failures show up without noise.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "corner_shop_storefront=warn,corner_shop_cli=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if let Err(e) = run(cli, config).await {
        if e.is_user_error() {
            let _ = writeln!(io::stderr(), "corner-shop: {e}");
        } else {
            tracing::error!("Command failed: {e}");
        }
        // Flush pending Sentry events before exiting
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<()> {
    let state = AppState::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Products {
            search,
            category,
            sort,
            order,
            page,
        } => {
            let options = ListingOptions {
                search,
                category,
                sort,
                order,
                page,
            };
            commands::browse::products(&state, options, &mut out).await?;
        }
        Commands::Categories => commands::browse::categories(&state, &mut out).await?,
        Commands::Product { id } => commands::browse::product(&state, id, &mut out).await?,
        Commands::Shell => {
            let input = BufReader::new(tokio::io::stdin());
            commands::shell::run(&state, input, &mut out).await?;
        }
    }

    out.flush()?;
    Ok(())
}
