//! Read-only queries over an explicitly constructed job collection.
//!
//! The collection is validated once in [`JobCatalogQuery::new`] and never
//! mutated afterwards, so every query is a pure function of the collection
//! and its arguments.

use crate::criteria::FilterCriteria;
use crate::error::CatalogError;
use crate::model::JobRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Distinct values of every facet, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub industries: Vec<String>,
    pub locations: Vec<String>,
    pub job_types: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct JobCatalogQuery {
    jobs: Vec<JobRecord>,
}

impl JobCatalogQuery {
    /// Take ownership of `jobs` after checking ids are unique and the
    /// required text fields are non-empty.
    pub fn new(jobs: Vec<JobRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            validate_required(job)?;
            if !seen.insert(job.id.as_str()) {
                return Err(CatalogError::DuplicateId(job.id.clone()));
            }
        }
        tracing::debug!(jobs = jobs.len(), "catalog constructed");
        Ok(Self { jobs })
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn distinct_industries(&self) -> Vec<String> {
        distinct(self.jobs.iter().map(|job| job.industry.as_str()))
    }

    pub fn distinct_locations(&self) -> Vec<String> {
        distinct(self.jobs.iter().map(|job| job.location.as_str()))
    }

    pub fn distinct_job_types(&self) -> Vec<String> {
        distinct(self.jobs.iter().map(|job| job.job_type.as_str()))
    }

    pub fn facets(&self) -> Facets {
        Facets {
            industries: self.distinct_industries(),
            locations: self.distinct_locations(),
            job_types: self.distinct_job_types(),
        }
    }

    /// Records satisfying every active predicate, newest first. Records
    /// posted on the same day keep their collection order.
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&JobRecord> {
        let mut results: Vec<&JobRecord> =
            self.jobs.iter().filter(|job| criteria.matches(job)).collect();
        newest_first(&mut results);
        tracing::debug!(
            search_text = %criteria.search_text,
            results = results.len(),
            "search"
        );
        results
    }

    pub fn featured(&self) -> Vec<&JobRecord> {
        self.jobs.iter().filter(|job| job.is_featured).collect()
    }

    pub fn latest(&self, n: usize) -> Vec<&JobRecord> {
        let mut all: Vec<&JobRecord> = self.jobs.iter().collect();
        newest_first(&mut all);
        all.truncate(n);
        all
    }

    /// Same-industry suggestions for a result set.
    ///
    /// The industry of the first result drives the suggestion; records whose
    /// id is in `exclude_ids` are skipped. Output keeps collection order.
    pub fn related_to(
        &self,
        results: &[&JobRecord],
        exclude_ids: &HashSet<&str>,
        limit: usize,
    ) -> Vec<&JobRecord> {
        let Some(primary) = results.first().map(|job| job.industry) else {
            return Vec::new();
        };
        self.jobs
            .iter()
            .filter(|job| job.industry == primary && !exclude_ids.contains(job.id.as_str()))
            .take(limit)
            .collect()
    }
}

fn validate_required(job: &JobRecord) -> Result<(), CatalogError> {
    let fields = [
        ("id", &job.id),
        ("title", &job.title),
        ("company", &job.company),
        ("location", &job.location),
    ];
    match fields.into_iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(CatalogError::EmptyField {
            id: job.id.clone(),
            field,
        }),
        None => Ok(()),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| !value.is_empty() && seen.insert(*value))
        .map(str::to_string)
        .collect()
}

// `sort_by` is stable, which keeps same-day records in collection order.
fn newest_first(jobs: &mut [&JobRecord]) {
    jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
}
