use crate::domain::model::{Course, SearchQuery, UserProfile};
use crate::domain::services::matcher::{recommend_courses, MatchOptions};

/// Request payload for an external course search.
pub fn build_search_query(profile: &UserProfile) -> SearchQuery {
    let mut keywords = profile.interested_topics.clone();
    keywords.push(profile.learning_goal.clone());

    SearchQuery {
        keywords: keywords.join(", "),
        level: profile.current_level.as_str().to_string(),
        providers: profile.provider_requirements.join(", "),
    }
}

/// Filter external search results to the learner's level and topics. Never falls back.
pub fn filter_searched_courses(
    profile: &UserProfile,
    search_results: &[Course],
    limit: usize,
) -> Vec<Course> {
    recommend_courses(
        profile,
        Some(search_results),
        MatchOptions {
            limit,
            use_builtin_fallback: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::catalog::builtin_catalog;
    use crate::domain::services::profile::build_profile;
    use std::collections::HashMap;

    fn profile(pairs: &[(&str, &str)]) -> UserProfile {
        let answers: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        build_profile("x", &answers)
    }

    #[test]
    fn test_query_joins_topics_and_goal() {
        let query = build_search_query(&profile(&[
            ("interested_topics", "sql, pandas"),
            ("learning_goal", "analyst role"),
            ("current_level", "Advanced"),
            ("provider_requirements", "DataCamp, edX"),
        ]));

        assert_eq!(query.keywords, "sql, pandas, analyst role");
        assert_eq!(query.level, "advanced");
        assert_eq!(query.providers, "DataCamp, edX");
    }

    #[test]
    fn test_query_without_providers_is_blank() {
        let query = build_search_query(&profile(&[]));
        assert_eq!(query.keywords, "python, Grow data skills");
        assert_eq!(query.providers, "");
    }

    #[test]
    fn test_filter_does_not_substitute_builtin_courses() {
        let results = builtin_catalog();
        let none = filter_searched_courses(&profile(&[("interested_topics", "rust")]), &results, 3);
        assert!(none.is_empty());

        let sql = filter_searched_courses(&profile(&[("interested_topics", "databases")]), &results, 3);
        assert_eq!(sql.len(), 1);
        assert_eq!(sql[0].title, "SQL Fundamentals");
    }
}
