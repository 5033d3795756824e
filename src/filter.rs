use crate::models::{Category, JobPosting, JobType};

pub const FEATURED_LIMIT: usize = 4;
pub const RECENT_LIMIT: usize = 8;

/// Inputs of the listing page. `None` means "all" for both selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub job_type: Option<JobType>,
    pub category: Option<String>,
}

impl FilterState {
    pub fn seeded(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Self::default()
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.job_type.is_none() && self.category.is_none()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// All -> Full-time -> Part-time -> Contract -> Freelance -> All
    pub fn cycle_job_type(&mut self) {
        self.job_type = match self.job_type {
            None => Some(JobType::ALL[0]),
            Some(current) => {
                let idx = JobType::ALL.iter().position(|t| *t == current).unwrap_or(0);
                JobType::ALL.get(idx + 1).copied()
            }
        };
    }

    /// All -> each category in fixture order -> All
    pub fn cycle_category(&mut self, categories: &[Category]) {
        let next = match &self.category {
            None => categories.first(),
            Some(current) => categories
                .iter()
                .position(|c| &c.name == current)
                .and_then(|idx| categories.get(idx + 1)),
        };
        self.category = next.map(|c| c.name.clone());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, job: &JobPosting) -> bool {
        matches_query(job, &self.query)
            && self.job_type.is_none_or(|t| job.job_type == t)
            && self
                .category
                .as_deref()
                .is_none_or(|c| job.category == c)
    }
}

fn matches_query(job: &JobPosting, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    job.title.to_lowercase().contains(&needle) || job.company_name.to_lowercase().contains(&needle)
}

/// Visible subset of `jobs` under `state`, in collection order.
pub fn filter_jobs<'a, I>(jobs: I, state: &FilterState) -> Vec<&'a JobPosting>
where
    I: IntoIterator<Item = &'a JobPosting>,
{
    let visible: Vec<&JobPosting> = jobs.into_iter().filter(|job| state.matches(job)).collect();
    tracing::trace!(
        query = %state.query,
        job_type = ?state.job_type,
        category = ?state.category,
        visible = visible.len(),
        "filter recomputed"
    );
    visible
}

pub fn featured(jobs: &[JobPosting], limit: usize) -> Vec<&JobPosting> {
    jobs.iter().filter(|j| j.is_hot).take(limit).collect()
}

pub fn recent(jobs: &[JobPosting], limit: usize) -> Vec<&JobPosting> {
    jobs.iter().take(limit).collect()
}
