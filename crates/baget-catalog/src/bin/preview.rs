//! # Quote Preview
//!
//! Computes one quote against a catalog file, for development and for
//! sanity-checking price changes before they go live.
//!
//! ## Usage
//! ```bash
//! # First profile in the catalog, 500×700mm
//! cargo run -p baget-catalog --bin preview -- --catalog ./catalog.json
//!
//! # Specific profile and size, with price overrides
//! cargo run -p baget-catalog --bin preview -- \
//!     --catalog ./catalog.json --prices ./prices.toml \
//!     --article OAK-30 --width 400 --height 600
//! ```

use std::env;

use baget_catalog::{load_prices_or_default, Catalog};
use baget_core::availability::required_perimeter;
use baget_core::quote::compute_quote_with;
use baget_core::types::QuoteInput;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut catalog_path = String::from("./catalog.json");
    let mut prices_path = String::from("./prices.toml");
    let mut article: Option<String> = None;
    let mut width_mm: f64 = 500.0;
    let mut height_mm: f64 = 700.0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "-c" => {
                if i + 1 < args.len() {
                    catalog_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--prices" | "-p" => {
                if i + 1 < args.len() {
                    prices_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--article" | "-a" => {
                if i + 1 < args.len() {
                    article = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    width_mm = args[i + 1].parse().unwrap_or(f64::NAN);
                    i += 1;
                }
            }
            "--height" | "-H" => {
                if i + 1 < args.len() {
                    height_mm = args[i + 1].parse().unwrap_or(f64::NAN);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Baget Quote Preview");
                println!();
                println!("Usage: preview [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --catalog <PATH>  Catalog export (default: ./catalog.json)");
                println!("  -p, --prices <PATH>   Price overrides (default: ./prices.toml)");
                println!("  -a, --article <CODE>  Profile article (default: first in catalog)");
                println!("  -w, --width <MM>      Work width (default: 500)");
                println!("  -H, --height <MM>     Work height (default: 700)");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let catalog = Catalog::load(&catalog_path)?;
    let prices = load_prices_or_default(&prices_path)?;

    let profile = match &article {
        Some(code) => catalog
            .by_article(code)
            .ok_or_else(|| format!("no profile with article '{}' in {}", code, catalog_path))?,
        None => &catalog.profiles()[0],
    };

    println!("🖼  Baget Quote Preview");
    println!("======================");
    println!("Profile:  {} ({})", profile.name, profile.article);
    println!("Work:     {} × {} mm", width_mm, height_mm);
    println!(
        "Plain perimeter: {} mm",
        required_perimeter(width_mm, height_mm)
    );
    println!();

    let input = QuoteInput {
        width_mm,
        height_mm,
        profile: Some(profile.clone()),
        ..QuoteInput::default()
    };
    let result = compute_quote_with(&input, &prices);

    for warning in &result.warnings {
        println!("⚠  {}", warning);
    }
    for item in &result.items {
        println!("{:<40} {:>8}", item.title, item.total);
    }
    println!("{:<40} {:>8}", "TOTAL", result.total);
    println!(
        "(effective size {} × {} mm, {:.3} m² / {:.2} m of molding)",
        result.effective_width_mm,
        result.effective_height_mm,
        result.breakdown.area_m2,
        result.breakdown.baget_length_m
    );

    Ok(())
}
