mod build;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_catalog::CatalogClient;
use storefront_core::ProductPaths;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront static generation command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the route of every product detail page
    Paths,
    /// Print the catalog page props as JSON
    Catalog,
    /// Print one product's detail props as JSON
    Product {
        /// Backend product id
        id: String,
    },
    /// Generate every page payload into a directory
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        /// Concurrent product fetches (defaults to `STOREFRONT_BUILD_CONCURRENCY`)
        #[arg(long)]
        concurrency: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = CatalogClient::from_config(&config)?;

    match cli.command {
        Commands::Paths => {
            let ids = client.enumerate_product_ids().await?;
            for path in ProductPaths::from_ids(&ids).paths {
                println!("{path}");
            }
        }
        Commands::Catalog => {
            let props = client.fetch_catalog_page_props().await?;
            println!("{}", serde_json::to_string_pretty(&props)?);
        }
        Commands::Product { id } => {
            let product = client.fetch_product(&id).await?;
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
        Commands::Build { out, concurrency } => {
            let concurrency = concurrency.unwrap_or(config.build_concurrency);
            let summary = build::run_build(&client, &out, concurrency).await?;
            println!(
                "built catalog page and {} product pages into {}",
                summary.product_pages,
                out.display()
            );
        }
    }

    Ok(())
}
