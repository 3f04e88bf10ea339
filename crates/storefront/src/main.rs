//! # Storefront demo
//!
//! Runs one session in-process and prints what the pages would show.
//!
//! ```bash
//! storefront catalog --category Sports
//! storefront catalog --query chaus --max-price 90
//! RUST_LOG=info storefront order 2=3 13=1 --first-name Camille
//! storefront dashboard
//! ```

use actor_framework::tracing::setup_tracing;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use storefront::catalog::{CategorySelector, PriceRange};
use storefront::config::StorefrontConfig;
use storefront::format::format_eur;
use storefront::lifecycle::StorefrontSystem;
use storefront::model::ProductId;
use storefront::stats::DashboardStats;
use storefront::views::{CatalogView, Dashboard, OrderForm};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "In-memory storefront session")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the catalog.
    Catalog {
        /// Exact category, or "All".
        #[arg(long, default_value = "All")]
        category: String,
        /// Text searched in names and categories.
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, value_parser = parse_price)]
        min_price: Option<f64>,
        #[arg(long, value_parser = parse_price)]
        max_price: Option<f64>,
    },
    /// Place one order, then show the confirmation and the dashboard.
    Order {
        /// `product=quantity` pairs, e.g. `2=3` or `product_2=3`.
        #[arg(required = true)]
        lines: Vec<String>,
        #[arg(long, default_value = "Camille")]
        first_name: String,
        #[arg(long, default_value = "Durand")]
        last_name: String,
        #[arg(long, default_value = "camille@example.com")]
        email: String,
    },
    /// Show the dashboard of a fresh session.
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let config = StorefrontConfig::load().context("loading configuration")?;
    info!(?config, "Starting storefront");
    let system = StorefrontSystem::start(config).await?;

    let outcome = run(&system, cli.command).await;
    system.shutdown().await?;
    outcome
}

async fn run(system: &StorefrontSystem, command: Command) -> Result<()> {
    match command {
        Command::Catalog {
            category,
            query,
            min_price,
            max_price,
        } => {
            let mut view = CatalogView::open(system.store()).await?;
            view.set_category(CategorySelector::parse(&category));
            view.set_query(query);
            view.set_price_range(PriceRange {
                min: min_price,
                max: max_price,
            });

            let options: Vec<String> = view.categories().iter().map(|c| c.to_string()).collect();
            println!("Categories: {}", options.join(", "));
            let rows = view.rows();
            for row in &rows {
                println!(
                    "{:>3}  {:<22} {:<13} {:>12}  stock {:>3}{}",
                    row.id.0,
                    row.name,
                    row.category,
                    row.price_label,
                    row.quantity,
                    if row.low_stock { "  (low)" } else { "" }
                );
            }
            println!("{} product(s)", rows.len());
        }
        Command::Order {
            lines,
            first_name,
            last_name,
            email,
        } => {
            let mut form = OrderForm::open(system.store()).await?;
            form.customer.first_name = first_name;
            form.customer.last_name = last_name;
            form.customer.email = email;

            for line in &lines {
                let Some((id, qty)) = line.split_once('=') else {
                    bail!("expected product=quantity, got {line:?}");
                };
                let id: ProductId = id
                    .parse()
                    .with_context(|| format!("bad product id in {line:?}"))?;
                match form.set_quantity(id, qty) {
                    Some(kept) if kept.to_string() != qty.trim() => {
                        warn!(%id, requested = qty, kept, "Quantity adjusted");
                    }
                    Some(_) => {}
                    None => warn!(%id, "Unknown product ignored"),
                }
            }

            form.submit()?;
            let confirmation = form.confirm().await?;
            println!(
                "Merci {} {}, commande {} enregistrée. Confirmation envoyée à {}.",
                confirmation.customer.first_name,
                confirmation.customer.last_name,
                confirmation.order.id,
                confirmation.customer.email
            );
            for line in &confirmation.order.lines {
                println!(
                    "  {:<22} {:>3} x {:>12} = {:>12}",
                    line.name,
                    line.qty,
                    format_eur(line.price),
                    format_eur(line.subtotal)
                );
            }
            println!(
                "  {} article(s), total {}",
                confirmation.total_items(),
                format_eur(confirmation.total_price())
            );

            drop(form);
            print_dashboard(&Dashboard::new(system.store()).refresh().await?);
        }
        Command::Dashboard => {
            print_dashboard(&Dashboard::new(system.store()).refresh().await?);
        }
    }
    Ok(())
}

/// Price bound from the command line; must be a finite number.
fn parse_price(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        Ok(_) => Err(format!("{raw:?} is not a finite price")),
        Err(e) => Err(e.to_string()),
    }
}

fn print_dashboard(stats: &DashboardStats) {
    println!("Produits enregistrés: {}", stats.product_count);
    println!("Stock moyen:          {}", stats.average_stock);
    println!("Commandes passées:    {}", stats.orders_count);
    println!("Chiffre d'affaires:   {}", format_eur(stats.total_revenue));
    println!("Catégories:           {}", stats.categories.join(", "));
    if stats.top_sellers.is_empty() {
        println!("Aucune commande passée pour le moment.");
    }
    for (rank, top) in stats.top_sellers.iter().enumerate() {
        println!("  #{} {} ({})", rank + 1, top.name, top.qty);
    }
}
