use std::path::Path;
use std::time::Duration;

use atelier_core::catalog::fallback_catalog;
use atelier_core::{FilteredView, Language, SortKey};
use atelier_db::{Database, DbConfig};
use atelier_gallery::commands::{catalog, filter, preferences};
use atelier_gallery::state::{CatalogOrigin, CatalogSourceKind, GalleryConfig, ViewSubscription};
use atelier_gallery::Gallery;
use tokio::time::timeout;

async fn write_assets(dir: &Path) {
    let i18n = dir.join("i18n");
    tokio::fs::create_dir_all(&i18n).await.unwrap();
    tokio::fs::write(
        i18n.join("en.json"),
        r#"{"artwork": {"sold": "Sold", "notForSale": "Not for sale"}}"#,
    )
    .await
    .unwrap();
    tokio::fs::write(
        i18n.join("nl.json"),
        r#"{"artwork": {"sold": "Verkocht", "notForSale": "Niet te koop"}}"#,
    )
    .await
    .unwrap();

    let json = serde_json::to_string(&fallback_catalog()).unwrap();
    tokio::fs::write(dir.join("artworks.json"), json).await.unwrap();
}

fn config(dir: &Path) -> GalleryConfig {
    GalleryConfig {
        catalog_path: dir.join("artworks.json"),
        i18n_dir: dir.join("i18n"),
        whatsapp_number: Some("31612345678".to_string()),
        ..Default::default()
    }
}

async fn next(views: &mut ViewSubscription) -> FilteredView {
    timeout(Duration::from_secs(1), views.next())
        .await
        .unwrap()
        .unwrap()
}

async fn database() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

#[tokio::test]
async fn file_catalog_is_primary() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path()).await;

    let gallery = Gallery::open(config(dir.path()), database().await).await.unwrap();
    assert_eq!(catalog::catalog_origin(&gallery.catalog).unwrap(), CatalogOrigin::Primary);

    let page = catalog::list_artworks(&gallery.engine, &gallery.config, &gallery.translations).unwrap();
    let labels: Vec<&str> = page.items.iter().map(|c| c.price_label.as_str()).collect();
    assert_eq!(labels, vec!["€150.00", "Not for sale", "Sold"]);
}

#[tokio::test]
async fn missing_catalog_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    config.catalog_path = dir.path().join("nowhere.json");

    let gallery = Gallery::open(config, database().await).await.unwrap();
    assert_eq!(catalog::catalog_origin(&gallery.catalog).unwrap(), CatalogOrigin::Fallback);
    assert_eq!(gallery.engine.current().unwrap().ids(), vec![1, 2, 3]);

    // No translation files either: keys are echoed.
    let page = catalog::list_artworks(&gallery.engine, &gallery.config, &gallery.translations).unwrap();
    assert_eq!(page.items[2].price_label, "artwork.sold");
}

#[tokio::test]
async fn database_catalog_source() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path()).await;

    let db = database().await;
    let mut seeded = fallback_catalog();
    seeded.reverse();
    db.artworks().replace_all(&seeded).await.unwrap();

    let config = GalleryConfig {
        catalog_source: CatalogSourceKind::Database,
        ..config(dir.path())
    };
    let gallery = Gallery::open(config, db).await.unwrap();
    assert_eq!(gallery.engine.current().unwrap().ids(), vec![3, 2, 1]);
}

#[tokio::test]
async fn stored_language_wins_over_default() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path()).await;

    let db = database().await;
    let gallery = Gallery::open(config(dir.path()), db.clone()).await.unwrap();
    preferences::set_language("nl", &gallery.translations, &gallery.preferences)
        .await
        .unwrap();

    let reopened = Gallery::open(config(dir.path()), db).await.unwrap();
    assert_eq!(reopened.translations.language(), Language::Nl);
    assert_eq!(reopened.translations.translate("artwork.sold"), "Verkocht");
}

#[tokio::test]
async fn subscription_follows_filter_commands() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path()).await;
    let gallery = Gallery::open(config(dir.path()), database().await).await.unwrap();

    let mut views = gallery.engine.subscribe();

    assert_eq!(next(&mut views).await.ids(), vec![1, 2, 3]);

    filter::toggle_material(&gallery.criteria, "canvas", true);
    assert_eq!(next(&mut views).await.ids(), vec![1, 3]);

    filter::set_sort_by(&gallery.criteria, "price-desc").unwrap();
    assert_eq!(next(&mut views).await.ids(), vec![3, 1]);
    assert_eq!(gallery.criteria.snapshot().sort_by, SortKey::PriceDesc);

    filter::reset_filters(&gallery.criteria);
    assert_eq!(next(&mut views).await.ids(), vec![1, 2, 3]);
}

#[test]
fn shipped_catalog_matches_built_in() {
    let shipped: Vec<atelier_core::Artwork> =
        serde_json::from_str(include_str!("../../../assets/data/artworks.json")).unwrap();
    assert_eq!(shipped, fallback_catalog());
}

#[test]
fn shipped_translations_cover_ui_keys() {
    use atelier_core::i18n::Translations;

    let keys = [
        "artwork.sold",
        "artwork.notForSale",
        "modal.errors.name.required",
        "modal.errors.name.minLength",
        "modal.errors.email.required",
        "modal.errors.email.invalid",
        "modal.errors.address.required",
        "modal.errors.address.minLength",
    ];
    for file in [
        include_str!("../../../assets/i18n/en.json"),
        include_str!("../../../assets/i18n/nl.json"),
    ] {
        let table = Translations::from_json_str(file).unwrap();
        for key in keys {
            assert!(table.get(key).is_some(), "missing {}", key);
        }
    }
}
