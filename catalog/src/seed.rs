//! Built-in postings used when no data file is configured.

use crate::model::{Industry, JobRecord, JobType};
use chrono::NaiveDate;

const LOGO_SIZE: u32 = 40;

/// Initials avatar used as a stand-in company logo.
pub fn placeholder_logo(seed: &str, size: u32) -> String {
    format!(
        "https://api.dicebear.com/7.x/initials/svg?seed={}&size={}&backgroundType=gradientLinear&radius=50",
        urlencoding::encode(seed),
        size
    )
}

struct Posting {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    industry: Industry,
    job_type: JobType,
    description: &'static str,
    posted: (i32, u32, u32),
    salary: Option<&'static str>,
    logo_seed: Option<&'static str>,
    featured: bool,
}

const POSTINGS: [Posting; 10] = [
    Posting {
        id: "ai-1",
        title: "Machine Learning Engineer",
        company: "Innovate AI Solutions",
        location: "San Francisco, CA",
        industry: Industry::Ai,
        job_type: JobType::FullTime,
        description: "Develop cutting-edge machine learning models for various applications. Strong Python and TensorFlow/PyTorch skills required.",
        posted: (2024, 7, 20),
        salary: Some("$120,000 - $160,000"),
        logo_seed: Some("Innovate AI"),
        featured: true,
    },
    Posting {
        id: "ft-1",
        title: "Senior Backend Engineer (Payments)",
        company: "FinSecure Inc.",
        location: "London, UK",
        industry: Industry::Fintech,
        job_type: JobType::FullTime,
        description: "Build and maintain scalable backend systems for our payment processing platform. Expertise in Java/Kotlin and microservices.",
        posted: (2024, 7, 22),
        salary: Some("£80,000 - £100,000"),
        logo_seed: Some("FinSecure"),
        featured: true,
    },
    Posting {
        id: "ap-1",
        title: "Food Scientist - Plant-Based Meats",
        company: "GreenBite Foods",
        location: "New York, NY",
        industry: Industry::AlternativeProtein,
        job_type: JobType::FullTime,
        description: "Lead research and development for new plant-based meat alternatives. Experience in food chemistry and product formulation needed.",
        posted: (2024, 7, 18),
        salary: Some("$90,000 - $110,000"),
        logo_seed: Some("GreenBite"),
        featured: false,
    },
    Posting {
        id: "ig-1",
        title: "Game Developer (Unity)",
        company: "LuckyStreak Games",
        location: "Remote",
        industry: Industry::IGaming,
        job_type: JobType::Contract,
        description: "Develop engaging casino games using the Unity engine. Strong C# skills and experience with mobile game development.",
        posted: (2024, 7, 15),
        salary: None,
        logo_seed: Some("LuckyStreak"),
        featured: false,
    },
    Posting {
        id: "ai-2",
        title: "Data Scientist",
        company: "Cognitive Systems Ltd.",
        location: "Austin, TX",
        industry: Industry::Ai,
        job_type: JobType::FullTime,
        description: "Analyze large datasets to extract meaningful insights and build predictive models. Proficiency in SQL, Python (Pandas, Scikit-learn).",
        posted: (2024, 7, 21),
        salary: None,
        logo_seed: Some("Cognitive"),
        featured: false,
    },
    Posting {
        id: "ap-2",
        title: "Marketing Manager - Alt Protein",
        company: "Future Farms Co.",
        location: "Berlin, Germany",
        industry: Industry::AlternativeProtein,
        job_type: JobType::FullTime,
        description: "Develop and execute marketing strategies for our innovative alternative protein products.",
        posted: (2024, 7, 19),
        salary: Some("€70,000 - €90,000"),
        logo_seed: Some("Future Farms"),
        featured: true,
    },
    Posting {
        id: "ft-2",
        title: "Frontend Developer (React)",
        company: "PaySphere",
        location: "Remote",
        industry: Industry::Fintech,
        job_type: JobType::FullTime,
        description: "Create intuitive user interfaces for our financial applications using React and TypeScript.",
        posted: (2024, 7, 23),
        salary: None,
        logo_seed: Some("PaySphere"),
        featured: false,
    },
    Posting {
        id: "ig-2",
        title: "Compliance Officer",
        company: "Global Gaming Group",
        location: "Malta",
        industry: Industry::IGaming,
        job_type: JobType::FullTime,
        description: "Ensure the company adheres to all relevant gaming regulations and licensing requirements.",
        posted: (2024, 7, 17),
        salary: None,
        logo_seed: Some("Global Gaming"),
        featured: false,
    },
    Posting {
        id: "ai-3",
        title: "AI Research Scientist",
        company: "DeepMind (Google)",
        location: "Mountain View, CA",
        industry: Industry::Ai,
        job_type: JobType::FullTime,
        description: "Conduct fundamental research in artificial intelligence and machine learning.",
        posted: (2024, 7, 24),
        salary: None,
        logo_seed: Some("DeepMind"),
        featured: false,
    },
    Posting {
        id: "ft-3",
        title: "Product Manager - Trading Platform",
        company: "Quantum Capital",
        location: "New York, NY",
        industry: Industry::Fintech,
        job_type: JobType::FullTime,
        description: "Define and manage the product roadmap for our next-generation trading platform.",
        posted: (2024, 7, 16),
        salary: None,
        logo_seed: Some("Quantum"),
        featured: false,
    },
];

pub fn jobs() -> Vec<JobRecord> {
    POSTINGS
        .iter()
        .filter_map(|posting| {
            let (year, month, day) = posting.posted;
            let posted_date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(JobRecord {
                id: posting.id.to_string(),
                title: posting.title.to_string(),
                company: posting.company.to_string(),
                location: posting.location.to_string(),
                industry: posting.industry,
                job_type: posting.job_type,
                description: posting.description.to_string(),
                posted_date,
                salary: posting.salary.map(str::to_string),
                logo_url: posting.logo_seed.map(|seed| placeholder_logo(seed, LOGO_SIZE)),
                is_featured: posting.featured,
            })
        })
        .collect()
}
