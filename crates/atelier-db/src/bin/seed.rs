//! # Catalog Seeder
//!
//! Loads a catalog into the database.
//!
//! ## Usage
//! ```bash
//! # Seed the three built-in sample works
//! cargo run -p atelier-db --bin seed
//!
//! # Seed from a catalog file
//! cargo run -p atelier-db --bin seed -- --from assets/data/artworks.json
//!
//! # Replace whatever is already there
//! cargo run -p atelier-db --bin seed -- --db ./atelier_dev.db --force
//! ```

use std::path::PathBuf;

use atelier_core::catalog::fallback_catalog;
use atelier_core::Artwork;
use atelier_db::{Database, DbConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "seed", about = "Atelier catalog seeder")]
struct Args {
    /// Database file path
    #[arg(short, long, default_value = "./atelier_dev.db")]
    db: PathBuf,

    /// Catalog JSON file; the built-in sample works when omitted
    #[arg(short, long)]
    from: Option<PathBuf>,

    /// Replace an existing catalog
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("🌱 Atelier Catalog Seeder");
    println!("=========================");
    println!("Database: {}", args.db.display());

    let catalog: Vec<Artwork> = match &args.from {
        Some(path) => {
            println!("Source:   {}", path.display());
            let json = tokio::fs::read_to_string(path).await?;
            serde_json::from_str(&json)?
        }
        None => {
            println!("Source:   built-in sample works");
            fallback_catalog()
        }
    };
    println!("Artworks: {}", catalog.len());
    println!();

    let db = Database::new(DbConfig::new(&args.db)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.artworks().count().await?;
    if existing > 0 && !args.force {
        println!("⚠ Database already has {} artworks", existing);
        println!("  Skipping seed. Pass --force to replace them.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    db.artworks().replace_all(&catalog).await?;

    println!("✓ Stored {} artworks in {:?}", catalog.len(), start.elapsed());

    db.close().await;
    Ok(())
}
