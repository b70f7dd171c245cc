//! Job Board Server
//!
//! Serves the job catalog over a JSON API using Axum: search and facet
//! filtering, featured and latest postings, related suggestions and a
//! demo application endpoint.

mod apply;
mod display;
mod error;
mod handlers;
mod router;
mod settings;
mod state;
mod telemetry;

use anyhow::Context;
use catalog::{JobCatalogQuery, load_from_path, seed};
use tokio::net::TcpListener;

use crate::settings::{CatalogSettings, Settings};
use crate::state::AppState;

/// Builds the catalog from the configured data file, or from the built-in
/// postings when the file does not exist.
fn load_catalog(settings: &CatalogSettings) -> anyhow::Result<JobCatalogQuery> {
    let path = &settings.data_path;
    let jobs = if path.exists() {
        tracing::info!(path = %path.display(), "loading postings from file");
        load_from_path(path)?
    } else {
        tracing::warn!(
            path = %path.display(),
            "no postings file found, serving built-in postings"
        );
        seed::jobs()
    };

    JobCatalogQuery::new(jobs).with_context(|| format!("invalid postings in {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load().context("failed to load configuration")?;
    telemetry::init_tracing(&settings.logging);

    let catalog = load_catalog(&settings.catalog)?;
    tracing::info!(jobs = catalog.len(), "catalog ready");

    let app = router::create_router(AppState::new(catalog, &settings.catalog));

    let addr = settings.server.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_catalog_falls_back_to_built_in_postings() {
        let settings = CatalogSettings {
            data_path: PathBuf::from("does/not/exist.json"),
            latest_limit: 10,
            related_limit: 3,
        };
        let catalog = load_catalog(&settings).unwrap();
        assert_eq!(catalog.len(), seed::jobs().len());
    }

    #[test]
    fn test_load_catalog_rejects_duplicate_ids_in_file() {
        let mut jobs = seed::jobs();
        jobs.push(jobs[0].clone());
        let path = std::env::temp_dir().join(format!("server-dup-{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&jobs).unwrap()).unwrap();

        let settings = CatalogSettings {
            data_path: path.clone(),
            latest_limit: 10,
            related_limit: 3,
        };
        assert!(load_catalog(&settings).is_err());
        std::fs::remove_file(path).unwrap();
    }
}
