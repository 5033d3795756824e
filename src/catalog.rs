use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::models::{Category, JobPosting};

const EMBEDDED: &str = include_str!("../data/jobs.json");

/// Read-only job and category fixture, loaded once at start-up.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub jobs: Vec<JobPosting>,
}

impl Catalog {
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED).context("Embedded job fixture is invalid")
    }

    pub fn open(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job fixture: {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Invalid job fixture: {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.validate()?;
        info!(
            jobs = catalog.jobs.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for job in &self.jobs {
            if !seen.insert(job.id.as_str()) {
                bail!("Duplicate job id '{}'", job.id);
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Closest known category name, for "did you mean" hints.
    pub fn suggest_category(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.categories
            .iter()
            .map(|c| (c, strsim::jaro_winkler(&wanted, &c.name.to_lowercase())))
            .filter(|(_, score)| *score >= 0.8)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(c, _)| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_fixture_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.jobs.is_empty());
        assert!(!catalog.categories.is_empty());
        for job in &catalog.jobs {
            assert!(
                catalog.has_category(&job.category),
                "job {} has unknown category {}",
                job.id,
                job.category
            );
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"{
            "categories": [],
            "jobs": [
                {"id": "1", "title": "A", "category": "X", "location": "L", "country": "C",
                 "salaryRange": "-", "type": "Contract", "description": "", "requirements": [],
                 "companyName": "Co", "companyLogo": "", "postedDate": ""},
                {"id": "1", "title": "B", "category": "X", "location": "L", "country": "C",
                 "salaryRange": "-", "type": "Freelance", "description": "", "requirements": [],
                 "companyName": "Co", "companyLogo": "", "postedDate": ""}
            ]
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate job id '1'"));
    }

    #[test]
    fn test_unknown_job_type_is_rejected() {
        let json = r#"{
            "categories": [],
            "jobs": [
                {"id": "1", "title": "A", "category": "X", "location": "L", "country": "C",
                 "salaryRange": "-", "type": "Internship", "description": "", "requirements": [],
                 "companyName": "Co", "companyLogo": "", "postedDate": ""}
            ]
        }"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::embedded().unwrap();
        let first = &catalog.jobs[0];
        assert_eq!(catalog.get(&first.id), Some(first));
        assert!(catalog.get("no-such-id").is_none());
    }

    #[test]
    fn test_suggest_category() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.suggest_category("logistic"), Some("Logistics"));
        assert_eq!(catalog.suggest_category("hospitalty"), Some("Hospitality"));
        assert_eq!(catalog.suggest_category("quantum basket weaving"), None);
    }

    #[test]
    fn test_open_missing_file_has_context() {
        let err = Catalog::open(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read job fixture"));
    }
}
