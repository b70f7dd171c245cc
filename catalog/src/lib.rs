//! Job catalog
//!
//! In-memory job postings and the pure queries the listing pages are built
//! from: facet values, filtered search, featured and latest postings, and
//! same-industry suggestions.

pub mod board;
pub mod criteria;
pub mod error;
pub mod model;
pub mod query;
pub mod salary;
pub mod seed;
pub mod source;

pub use board::{BoardView, DEFAULT_LATEST_LIMIT, DEFAULT_RELATED_LIMIT};
pub use criteria::FilterCriteria;
pub use error::CatalogError;
pub use model::{Industry, JobRecord, JobType};
pub use query::{Facets, JobCatalogQuery};
pub use salary::SalaryRange;
pub use source::load_from_path;
