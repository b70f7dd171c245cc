use catalog::JobCatalogQuery;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::display::DisplayPolicy;
use crate::settings::CatalogSettings;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<JobCatalogQuery>,
    pub display: Arc<DisplayPolicy>,
    /// Reference date for relative posting ages.
    pub today: fn() -> NaiveDate,
    pub latest_limit: usize,
    pub related_limit: usize,
}

impl AppState {
    pub fn new(catalog: JobCatalogQuery, settings: &CatalogSettings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            display: Arc::new(DisplayPolicy::default()),
            today: local_today,
            latest_limit: settings.latest_limit,
            related_limit: settings.related_limit,
        }
    }
}
