use crate::model::JobRecord;
use serde::{Deserialize, Serialize};

/// Query input for [`JobCatalogQuery::search`](crate::JobCatalogQuery::search).
///
/// Every field defaults to "no constraint". An empty facet string counts as
/// unset, matching the "All" choice of a facet dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
}

impl FilterCriteria {
    pub fn text(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..Self::default()
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    /// True when any predicate constrains the result set.
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty()
            || facet(&self.industry).is_some()
            || facet(&self.location).is_some()
            || facet(&self.job_type).is_some()
    }

    pub fn matches(&self, job: &JobRecord) -> bool {
        self.matches_text(job)
            && facet_matches(&self.industry, job.industry.as_str())
            && facet_matches(&self.location, &job.location)
            && facet_matches(&self.job_type, job.job_type.as_str())
    }

    fn matches_text(&self, job: &JobRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        [
            job.title.as_str(),
            job.company.as_str(),
            job.description.as_str(),
            job.industry.as_str(),
            job.location.as_str(),
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn facet(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// Exact, case-sensitive comparison; labels that name nothing match nothing.
fn facet_matches(wanted: &Option<String>, actual: &str) -> bool {
    facet(wanted).is_none_or(|wanted| wanted == actual)
}
