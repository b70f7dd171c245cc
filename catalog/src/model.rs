use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sector a posting belongs to. Serialized with the labels shown in the
/// industry facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Alternative Protein")]
    AlternativeProtein,
    #[serde(rename = "Fintech")]
    Fintech,
    #[serde(rename = "iGaming")]
    IGaming,
    #[serde(rename = "Other")]
    Other,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Ai => "AI",
            Industry::AlternativeProtein => "Alternative Protein",
            Industry::Fintech => "Fintech",
            Industry::IGaming => "iGaming",
            Industry::Other => "Other",
        }
    }
}

/// Employment arrangement of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
        }
    }
}

/// One job posting. Immutable once it is part of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub industry: Industry,
    #[serde(alias = "type")]
    pub job_type: JobType,
    #[serde(default)]
    pub description: String,
    pub posted_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Facet values come from `as_str`, filters from JSON; both must agree.
    #[test]
    fn test_as_str_matches_serialized_label() {
        let industries = [
            Industry::Ai,
            Industry::AlternativeProtein,
            Industry::Fintech,
            Industry::IGaming,
            Industry::Other,
        ];
        for industry in industries {
            assert_eq!(serde_json::to_value(industry).unwrap(), industry.as_str());
        }
        for job_type in [JobType::FullTime, JobType::PartTime, JobType::Contract] {
            assert_eq!(serde_json::to_value(job_type).unwrap(), job_type.as_str());
        }
    }

    #[test]
    fn test_record_deserializes_with_type_alias_and_defaults() {
        let json = r#"{
            "id": "ig-1",
            "title": "Game Developer (Unity)",
            "company": "LuckyStreak Games",
            "location": "Remote",
            "industry": "iGaming",
            "type": "Contract",
            "postedDate": "2024-07-15"
        }"#;
        let job: JobRecord = serde_json::from_str(json).unwrap();

        assert_eq!(job.industry, Industry::IGaming);
        assert_eq!(job.job_type, JobType::Contract);
        assert_eq!(job.posted_date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(job.description, "");
        assert!(job.salary.is_none());
        assert!(!job.is_featured);
    }

    #[test]
    fn test_record_serializes_without_absent_optionals() {
        let job = JobRecord {
            id: "ft-2".to_string(),
            title: "Frontend Developer (React)".to_string(),
            company: "PaySphere".to_string(),
            location: "Remote".to_string(),
            industry: Industry::Fintech,
            job_type: JobType::FullTime,
            description: String::new(),
            posted_date: NaiveDate::from_ymd_opt(2024, 7, 23).unwrap(),
            salary: None,
            logo_url: None,
            is_featured: false,
        };
        let value = serde_json::to_value(&job).unwrap();

        assert_eq!(value["jobType"], "Full-time");
        assert_eq!(value["postedDate"], "2024-07-23");
        assert!(value.get("salary").is_none());
        assert!(value.get("logoUrl").is_none());
    }
}
