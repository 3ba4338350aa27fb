use super::search_result::SearchResult;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(raw.to_lowercase())
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => c == category,
        }
    }
}

/// Client-side narrowing of an already fetched result list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFilter {
    pub category: CategoryFilter,
    pub name_contains: String,
}

impl SearchFilter {
    pub fn matches(&self, result: &SearchResult) -> bool {
        self.category.matches(&result.category)
            && result
                .name
                .to_lowercase()
                .contains(&self.name_contains.to_lowercase())
    }

    pub fn apply(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        results.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, category: &str) -> SearchResult {
        SearchResult {
            id: 0,
            name: name.to_string(),
            category: category.to_string(),
            lat: 0.0,
            lon: 0.0,
            address: "Somewhere".to_string(),
            distance_km: None,
        }
    }

    fn results() -> Vec<SearchResult> {
        vec![
            result("Sadar Hospital", "hospital"),
            result("Dr. Shweta Clinic", "doctors"),
            result("Orchid Medical Centre", "hospital"),
        ]
    }

    #[test]
    fn hospital_filter_keeps_only_hospitals() {
        let filter = SearchFilter {
            category: CategoryFilter::parse("Hospital"),
            ..Default::default()
        };

        let kept = filter.apply(results());

        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.category == "hospital"));
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let filter = SearchFilter {
            name_contains: "SHWETA".to_string(),
            ..Default::default()
        };

        let kept = filter.apply(results());

        assert_eq!(kept, vec![result("Dr. Shweta Clinic", "doctors")]);
    }

    #[test]
    fn filters_combine() {
        let filter = SearchFilter {
            category: CategoryFilter::parse("doctors"),
            name_contains: "hospital".to_string(),
        };

        assert!(filter.apply(results()).is_empty());
    }

    #[test]
    fn all_and_empty_keep_everything() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(SearchFilter::default().apply(results()), results());
    }
}
