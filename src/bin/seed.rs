use std::path::PathBuf;

use catalog_view::{
    config::DEFAULT_PAGE_SIZE,
    fixture::{FixtureFile, demo_payloads},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CATALOG_FIXTURE").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fixtures/catalog.json"));
    let page_size = std::env::var("CATALOG_PAGE_SIZE")
        .ok()
        .and_then(|size| size.parse::<usize>().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE);

    let file = FixtureFile {
        pages: demo_payloads(page_size),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, serde_json::to_string_pretty(&file)?).await?;

    println!(
        "Seeded {} catalog pages into {}",
        file.pages.len(),
        path.display()
    );
    Ok(())
}
