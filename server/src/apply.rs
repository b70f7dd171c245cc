//! Mock "apply to job" workflow. Applications are validated and
//! acknowledged but never stored or forwarded.

use catalog::JobRecord;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const RESUME_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub full_name: String,
    pub email: String,
    pub resume_file_name: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationAck {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub message: String,
}

impl ApplicationRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.full_name.trim().is_empty() {
            return Err(ApiError::Validation("full name is required".to_string()));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ApiError::Validation(format!(
                "invalid email address: '{}'",
                self.email
            )));
        }
        let resume = self.resume_file_name.to_lowercase();
        if !RESUME_EXTENSIONS.iter().any(|ext| resume.ends_with(ext)) {
            return Err(ApiError::Validation(
                "resume must be a .pdf, .doc or .docx file".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn acknowledge(
    job: &JobRecord,
    request: &ApplicationRequest,
) -> Result<ApplicationAck, ApiError> {
    request.validate()?;
    let has_cover_letter = request
        .cover_letter
        .as_deref()
        .is_some_and(|letter| !letter.trim().is_empty());
    tracing::info!(
        job_id = %job.id,
        has_cover_letter,
        "application acknowledged, not stored"
    );
    Ok(ApplicationAck {
        job_id: job.id.clone(),
        job_title: job.title.clone(),
        company: job.company.clone(),
        message: format!("Application submitted for {}! (This is a demo)", job.title),
    })
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::seed;

    fn request() -> ApplicationRequest {
        ApplicationRequest {
            full_name: "Sam Rivera".to_string(),
            email: "sam@example.com".to_string(),
            resume_file_name: "Resume.PDF".to_string(),
            cover_letter: None,
        }
    }

    #[test]
    fn test_valid_request_is_acknowledged() {
        let job = seed::jobs().remove(0);
        let ack = acknowledge(&job, &request()).unwrap();

        assert_eq!(ack.job_id, "ai-1");
        assert_eq!(
            ack.message,
            "Application submitted for Machine Learning Engineer! (This is a demo)"
        );
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut req = request();
        req.full_name = "   ".to_string();
        assert!(matches!(req.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_email_needs_local_part_and_dotted_domain() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("sam@localhost"));
        assert!(!is_plausible_email("sam@example."));
        assert!(!is_plausible_email("sam example@x.com"));
        assert!(!is_plausible_email("sam.example.com"));
    }

    #[test]
    fn test_resume_extension_is_checked() {
        let mut req = request();
        req.resume_file_name = "resume.docx".to_string();
        assert!(req.validate().is_ok());

        req.resume_file_name = "resume.txt".to_string();
        assert!(req.validate().is_err());
    }
}
