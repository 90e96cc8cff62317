//! Job filtering: narrow the catalog by query, category, and immediacy.
//!
//! A stable linear scan. The catalog is small and read-only, so there is no
//! index; [`FilterCache`] only skips rescans while the inputs stay the same.

use crate::model::{FilterState, Job};

/// Whether `job` passes every predicate in `filter`.
///
/// The query matches title or company, case-insensitively. An empty query
/// matches everything. Callers lower the query once per scan.
fn passes(job: &Job, lowered_query: &str, filter: &FilterState) -> bool {
    let text_match = lowered_query.is_empty()
        || job.title.to_lowercase().contains(lowered_query)
        || job.company.to_lowercase().contains(lowered_query);

    text_match
        && filter.category.admits(job.category)
        && (!filter.immediate_only || job.is_immediate)
}

/// Jobs passing `filter`, in catalog order.
pub fn filter_jobs<'a>(jobs: &'a [Job], filter: &FilterState) -> Vec<&'a Job> {
    let query = filter.query.to_lowercase();
    jobs.iter().filter(|job| passes(job, &query, filter)).collect()
}

/// Remembers the last filter result over one catalog.
///
/// Keyed on the whole [`FilterState`]: a change to query, category, or
/// immediate-only triggers a rescan, nothing else does.
#[derive(Debug, Default)]
pub struct FilterCache {
    key: Option<FilterState>,
    indices: Vec<usize>,
    scans: usize,
}

impl FilterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices into `jobs` of the jobs passing `filter`.
    ///
    /// `jobs` must be the same catalog on every call.
    pub fn get(&mut self, jobs: &[Job], filter: &FilterState) -> &[usize] {
        if self.key.as_ref() != Some(filter) {
            let query = filter.query.to_lowercase();
            self.indices = jobs
                .iter()
                .enumerate()
                .filter(|(_, job)| passes(job, &query, filter))
                .map(|(i, _)| i)
                .collect();
            self.key = Some(filter.clone());
            self.scans += 1;
            tracing::trace!(
                scans = self.scans,
                matched = self.indices.len(),
                "filtered catalog"
            );
        }
        &self.indices
    }

    /// Resolve [`get`](Self::get) into job references.
    pub fn jobs<'a>(&mut self, jobs: &'a [Job], filter: &FilterState) -> Vec<&'a Job> {
        self.get(jobs, filter).iter().map(|&i| &jobs[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::catalog::generate_jobs;
    use crate::model::{Category, CategoryFilter, Coordinates, PayFrequency};

    fn job(id: &str, title: &str, company: &str, category: Category, is_immediate: bool) -> Job {
        Job {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            category,
            pay: 30,
            pay_frequency: PayFrequency::Hour,
            description: String::new(),
            tags: Vec::new(),
            location: Coordinates::new(33.68, -117.82),
            address: String::new(),
            distance_km: 1.0,
            shift: "08:00 - 16:00".into(),
            spots: 1,
            image_url: String::new(),
            is_immediate,
            contact_number: String::new(),
            icon: "•".into(),
        }
    }

    fn three_jobs() -> Vec<Job> {
        vec![
            job("1", "Drone Operator", "Neural Dynamics", Category::Technical, true),
            job("2", "Cyber-Barista", "Cyber-Bite", Category::Service, false),
            job("3", "Exo-Loader", "Neon Pulse", Category::Physical, true),
        ]
    }

    fn filter(query: &str, category: CategoryFilter, immediate_only: bool) -> FilterState {
        FilterState {
            query: query.into(),
            category,
            immediate_only,
        }
    }

    fn ids(jobs: &[&Job]) -> Vec<String> {
        jobs.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn cyber_query_finds_barista_in_any_case() {
        let jobs = three_jobs();
        for query in ["cyber", "CYBER", "Cyber"] {
            let result = filter_jobs(&jobs, &filter(query, CategoryFilter::All, false));
            assert_eq!(ids(&result), vec!["2"], "query {query}");
        }
    }

    #[test]
    fn empty_filter_returns_whole_catalog() {
        let jobs = generate_jobs(&mut StdRng::seed_from_u64(8));
        let result = filter_jobs(&jobs, &FilterState::default());
        assert_eq!(result.len(), jobs.len());
        assert!(result.iter().zip(&jobs).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn query_matches_company_only() {
        let jobs = three_jobs();
        let result = filter_jobs(&jobs, &filter("neon", CategoryFilter::All, false));
        assert_eq!(ids(&result), vec!["3"]);
    }

    #[test]
    fn query_without_match_is_empty() {
        let jobs = three_jobs();
        assert!(filter_jobs(&jobs, &filter("plumber", CategoryFilter::All, false)).is_empty());
    }

    #[test]
    fn category_narrows() {
        let jobs = three_jobs();
        let result = filter_jobs(
            &jobs,
            &filter("", CategoryFilter::Only(Category::Physical), false),
        );
        assert_eq!(ids(&result), vec!["3"]);
    }

    #[test]
    fn immediate_only_narrows() {
        let jobs = three_jobs();
        let result = filter_jobs(&jobs, &filter("", CategoryFilter::All, true));
        assert_eq!(ids(&result), vec!["1", "3"]);
        let barista = std::slice::from_ref(&jobs[1]);
        assert!(filter_jobs(barista, &filter("", CategoryFilter::All, true)).is_empty());
        assert_eq!(filter_jobs(barista, &filter("", CategoryFilter::All, false)).len(), 1);
    }

    #[test]
    fn result_is_ordered_subsequence_with_exact_membership() {
        let jobs = generate_jobs(&mut StdRng::seed_from_u64(21));
        let filters = [
            filter("", CategoryFilter::All, true),
            filter("night", CategoryFilter::All, false),
            filter("o", CategoryFilter::Only(Category::Service), false),
            filter("tech", CategoryFilter::Only(Category::Technical), true),
        ];
        for f in &filters {
            let result = filter_jobs(&jobs, f);
            // Order preserved: numeric ids strictly increase.
            let numbers: Vec<u32> = result.iter().map(|j| j.id.parse().unwrap()).collect();
            assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            // Membership: every job meeting all three conditions, no others.
            let expected: Vec<String> = jobs
                .iter()
                .filter(|j| {
                    let haystack = format!("{}\n{}", j.title, j.company).to_ascii_lowercase();
                    let category_ok = match f.category {
                        CategoryFilter::All => true,
                        CategoryFilter::Only(c) => j.category == c,
                    };
                    haystack.contains(&f.query.to_ascii_lowercase())
                        && category_ok
                        && (j.is_immediate || !f.immediate_only)
                })
                .map(|j| j.id.clone())
                .collect();
            assert_eq!(ids(&result), expected, "filter {f:?}");
        }
    }

    #[test]
    fn cache_rescans_only_on_input_change() {
        let jobs = three_jobs();
        let mut cache = FilterCache::new();
        let f = filter("cyber", CategoryFilter::All, false);

        assert_eq!(cache.get(&jobs, &f), &[1]);
        assert_eq!(cache.get(&jobs, &f), &[1]);
        assert_eq!(cache.scans, 1);

        let f2 = filter("", CategoryFilter::All, true);
        assert_eq!(ids(&cache.jobs(&jobs, &f2)), vec!["1", "3"]);
        assert_eq!(cache.scans, 2);
    }
}
