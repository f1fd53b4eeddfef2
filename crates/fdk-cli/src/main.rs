//! fontdeck - Main Entry Point
//!
//! `fontdeck` lists catalog category sizes.
//! `fontdeck FAMILY...` loads the named families and prints their weights.

mod config;

use anyhow::Context;
use fdk_catalog::{api, find_family, normalize_catalog, CategorizedCatalog, CategoryKey};
use fdk_loader::{ExplorerFont, Session};
use fdk_net::{DiskCache, FontFetcher, HttpFetcher};
use fdk_text::FontSet;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let families: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env()?;

    smol::block_on(run(config, families))
}

async fn run(config: Config, families: Vec<String>) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(&config.fetcher)?;
    let catalog = load_catalog(&config, &fetcher).await?;

    if families.is_empty() {
        for key in CategoryKey::ALL {
            println!("{:<12} {}", key.as_str(), catalog.fonts(key).len());
        }
        return Ok(());
    }

    let selected = families
        .iter()
        .map(|name| find_family(&catalog, name).map(|font| ExplorerFont::from(font.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    let target = FontSet::new().with_quoted_family_names(config.quote_family_names);
    let session = Session::new(DiskCache::new(config.cache_dir.clone()), fetcher, target);

    let loaded = session.load_fonts(selected).await;
    if loaded.is_empty() {
        anyhow::bail!("could not load fonts, please retry");
    }

    for font in &loaded {
        let weights: Vec<&str> = font.loaded_weights.iter().map(|w| w.label()).collect();
        println!("{}: {}", font.family, weights.join(", "));
    }

    let stats = session.stats();
    tracing::info!(
        fetched = stats.fetched,
        cache_hits = stats.cache_hits,
        faces = session.target().len(),
        "fonts loaded"
    );

    Ok(())
}

async fn load_catalog(config: &Config, fetcher: &HttpFetcher) -> anyhow::Result<CategorizedCatalog> {
    let url = api::catalog_url(&config.api_url, &config.api_key, config.sort)?;

    tracing::info!(sort = config.sort.as_str(), "fetching font catalog");
    let body = fetcher.fetch(url.as_str()).await.context("fetching font catalog")?;

    let catalog = normalize_catalog(api::parse_response(&body)?);
    for key in CategoryKey::ALL {
        tracing::info!(category = key.as_str(), fonts = catalog.fonts(key).len());
    }

    Ok(catalog)
}
