use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Freelance,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
    ];

    /// Canonical label, also the fixture spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
        }
    }

    pub fn parse(s: &str) -> Option<JobType> {
        let norm: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match norm.as_str() {
            "fulltime" => Some(JobType::FullTime),
            "parttime" => Some(JobType::PartTime),
            "contract" => Some(JobType::Contract),
            "freelance" => Some(JobType::Freelance),
            _ => None,
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub category: String, // free-text label, matched exactly
    pub location: String,
    pub country: String,
    pub salary_range: String, // display only
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    pub requirements: Vec<String>,
    pub company_name: String,
    pub company_logo: String,
    pub posted_date: String, // display only, e.g. "2 days ago"
    #[serde(default)]
    pub is_hot: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub name: String,
    pub icon: String,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_parse_accepts_loose_spellings() {
        assert_eq!(JobType::parse("Full-time"), Some(JobType::FullTime));
        assert_eq!(JobType::parse("full_time"), Some(JobType::FullTime));
        assert_eq!(JobType::parse("PART TIME"), Some(JobType::PartTime));
        assert_eq!(JobType::parse("contract"), Some(JobType::Contract));
        assert_eq!(JobType::parse("Freelance"), Some(JobType::Freelance));
        assert_eq!(JobType::parse("internship"), None);
    }

    #[test]
    fn test_job_posting_deserializes_fixture_shape() {
        let json = r#"{
            "id": "7",
            "title": "Senior Driver",
            "category": "Logistics",
            "location": "Vientiane",
            "country": "Laos",
            "salaryRange": "4,000,000 LAK",
            "type": "Contract",
            "description": "Drive.",
            "requirements": ["Licence"],
            "companyName": "ABC Co",
            "companyLogo": "https://example.com/logo.png",
            "postedDate": "1 day ago"
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_type, JobType::Contract);
        assert_eq!(job.company_name, "ABC Co");
        assert!(!job.is_hot);
    }
}
