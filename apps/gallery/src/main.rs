//! # Atelier CLI
//!
//! Headless gallery view: loads the catalog, applies filters from the
//! command line and prints the resulting grid.
//!
//! ```text
//! atelier --search oil --sort price-asc
//! atelier --material canvas --min 100 --max 180 --lang nl
//! atelier --artwork 3 --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use atelier_gallery::commands::{catalog, filter, preferences};
use atelier_gallery::error::ApiError;
use atelier_gallery::state::GalleryConfig;
use atelier_gallery::{init_tracing, Gallery};

#[derive(Debug, Parser)]
#[command(name = "atelier", about = "Browse the Atelier gallery catalog")]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Case-insensitive search over title, artist and descriptions
    #[arg(long, short)]
    search: Option<String>,

    /// Minimum price in whole euros
    #[arg(long)]
    min: Option<i64>,

    /// Maximum price in whole euros
    #[arg(long)]
    max: Option<i64>,

    /// Material filter; repeat for several (any may match)
    #[arg(long = "material")]
    materials: Vec<String>,

    /// Exact dimension label; repeat for several (any may match)
    #[arg(long = "dimension")]
    dimensions: Vec<String>,

    /// title, artist, price-asc or price-desc
    #[arg(long)]
    sort: Option<String>,

    /// Switch and store the display language (en, nl)
    #[arg(long)]
    lang: Option<String>,

    /// Show a single artwork instead of the grid
    #[arg(long)]
    artwork: Option<i64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let config = match GalleryConfig::load(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let gallery = match Gallery::start(config).await {
        Ok(gallery) => gallery,
        Err(e) => {
            error!("Failed to start gallery: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&gallery, &args).await;
    gallery.db.close().await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(gallery: &Gallery, args: &Args) -> Result<(), ApiError> {
    if let Some(code) = &args.lang {
        preferences::set_language(code, &gallery.translations, &gallery.preferences).await?;
    }

    if let Some(id) = args.artwork {
        let detail = catalog::get_artwork(id, &gallery.catalog, &gallery.config, &gallery.translations)?;
        if args.json {
            print_json(&detail)?;
        } else {
            println!("{} - {}", detail.card.title, detail.card.artist);
            println!("{} · {}", detail.card.material, detail.card.dimensions);
            println!("{}", detail.card.price_label);
            println!();
            println!("{}", detail.description);
        }
        return Ok(());
    }

    apply_filters(gallery, args)?;

    let page = catalog::list_artworks(&gallery.engine, &gallery.config, &gallery.translations)?;
    if args.json {
        return print_json(&page);
    }

    println!("{}", gallery.config.gallery_name);
    for card in &page.items {
        println!(
            "{:>4}  {:<24} {:<20} {:<12} {}",
            card.id, card.title, card.material, card.dimensions, card.price_label
        );
    }
    println!("{} / {}", page.items.len(), page.total);
    Ok(())
}

fn apply_filters(gallery: &Gallery, args: &Args) -> Result<(), ApiError> {
    let store = &gallery.criteria;

    if let Some(term) = &args.search {
        filter::set_search_term(store, term);
    }

    if args.min.is_some() || args.max.is_some() {
        let bounds = catalog::get_facets(&gallery.engine)?.price_bounds.whole_units();
        let min = args.min.unwrap_or(bounds.min.major());
        let max = args.max.unwrap_or(bounds.max.major());
        filter::set_price_range(&gallery.engine, min, max)?;
    }

    for material in &args.materials {
        filter::toggle_material(store, material, true);
    }
    for dimension in &args.dimensions {
        filter::toggle_dimension(store, dimension, true);
    }

    if let Some(sort) = &args.sort {
        filter::set_sort_by(store, sort)?;
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), ApiError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| ApiError::internal(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
