//! Display defaults for postings.
//!
//! Every fallback for an optional or oversized field is decided here, in one
//! policy, instead of at each place a posting is rendered.

use catalog::{JobRecord, SalaryRange};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct DisplayPolicy {
    pub excerpt_chars: usize,
    pub ellipsis: &'static str,
    /// Glyph shown when neither a logo nor a company initial is available.
    pub missing_glyph: char,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            excerpt_chars: 150,
            ellipsis: "...",
            missing_glyph: '?',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Logo {
    Image { url: String },
    Initial { glyph: String },
}

/// A posting ready for a listing card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub industry: &'static str,
    pub job_type: &'static str,
    pub excerpt: String,
    pub posted_date: NaiveDate,
    pub posted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    pub logo: Logo,
    pub featured: bool,
}

impl DisplayPolicy {
    pub fn render(&self, job: &JobRecord, today: NaiveDate) -> JobView {
        JobView {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            industry: job.industry.as_str(),
            job_type: job.job_type.as_str(),
            excerpt: self.excerpt(&job.description),
            posted_date: job.posted_date,
            posted: posted_label(job.posted_date, today),
            salary: job.salary.clone().filter(|salary| !salary.trim().is_empty()),
            salary_range: job.salary.as_deref().and_then(SalaryRange::parse),
            logo: self.logo(job),
            featured: job.is_featured,
        }
    }

    pub fn render_all(&self, jobs: &[&JobRecord], today: NaiveDate) -> Vec<JobView> {
        jobs.iter().map(|job| self.render(job, today)).collect()
    }

    fn excerpt(&self, description: &str) -> String {
        if description.chars().count() <= self.excerpt_chars {
            return description.to_string();
        }
        let mut excerpt: String = description.chars().take(self.excerpt_chars).collect();
        excerpt.push_str(self.ellipsis);
        excerpt
    }

    fn logo(&self, job: &JobRecord) -> Logo {
        match job.logo_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => Logo::Image {
                url: url.to_string(),
            },
            None => {
                let initial = job.company.trim().chars().next().unwrap_or(self.missing_glyph);
                Logo::Initial {
                    glyph: initial.to_uppercase().collect(),
                }
            }
        }
    }
}

/// Coarse age of a posting relative to `today`. Future dates read as today.
pub fn posted_label(posted: NaiveDate, today: NaiveDate) -> String {
    let days = (today - posted).num_days();
    if days > 365 {
        format!("{}y ago", days / 365)
    } else if days > 30 {
        format!("{}mo ago", days / 30)
    } else if days >= 1 {
        format!("{days}d ago")
    } else {
        "today".to_string()
    }
}
