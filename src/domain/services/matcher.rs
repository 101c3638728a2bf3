use crate::domain::model::{Course, Level, UserProfile};
use crate::domain::services::catalog::builtin_catalog;
use std::collections::HashSet;

pub const DEFAULT_LIMIT: usize = 3;

/// Options for a single recommendation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub limit: usize,
    pub use_builtin_fallback: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            use_builtin_fallback: false,
        }
    }
}

fn lowercase_set(items: &[String]) -> HashSet<String> {
    items.iter().map(|item| item.to_lowercase()).collect()
}

fn provider_allowed(course: &Course, providers: &HashSet<String>) -> bool {
    providers.is_empty() || providers.contains(&course.provider.to_lowercase())
}

fn matches_topic(course: &Course, topics: &HashSet<String>) -> bool {
    course
        .topics
        .iter()
        .any(|topic| topics.contains(&topic.to_lowercase()))
}

// 允許比學習者高一級的課程，但不能高兩級
fn matches_level(course: &Course, level: Level) -> bool {
    course.level_rank() <= level.rank() + 1
}

/// Filter a catalog down to the courses that suit `profile`, in catalog order.
///
/// With no catalog the built-in one is used only when `use_builtin_fallback`
/// is set; otherwise the result is empty. When nothing passes the full filter
/// and fallback is enabled, the filter relaxes to beginner courses from an
/// allowed provider.
pub fn recommend_courses(
    profile: &UserProfile,
    catalog: Option<&[Course]>,
    options: MatchOptions,
) -> Vec<Course> {
    let builtin;
    let catalog = match catalog {
        Some(catalog) => catalog,
        None if options.use_builtin_fallback => {
            builtin = builtin_catalog();
            builtin.as_slice()
        }
        None => {
            tracing::debug!("No catalog supplied and builtin fallback disabled");
            return Vec::new();
        }
    };

    let providers = lowercase_set(&profile.provider_requirements);
    let topics = lowercase_set(&profile.interested_topics);

    let mut matches: Vec<&Course> = catalog
        .iter()
        .filter(|course| {
            provider_allowed(course, &providers)
                && matches_topic(course, &topics)
                && matches_level(course, profile.current_level)
        })
        .collect();

    if matches.is_empty() && options.use_builtin_fallback {
        tracing::warn!("No course matched the profile, relaxing to beginner starter set");
        matches = catalog
            .iter()
            .filter(|course| {
                provider_allowed(course, &providers)
                    && course.level.trim().eq_ignore_ascii_case(Level::Beginner.as_str())
            })
            .collect();
    }

    tracing::debug!(
        "Matched {} of {} courses (limit {})",
        matches.len(),
        catalog.len(),
        options.limit
    );

    matches
        .into_iter()
        .take(options.limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::profile::build_profile;
    use std::collections::HashMap;

    fn profile(topics: &str, level: &str, providers: &str) -> UserProfile {
        let answers: HashMap<String, String> = [
            ("interested_topics", topics),
            ("current_level", level),
            ("provider_requirements", providers),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        build_profile("Tester", &answers)
    }

    fn course(title: &str, provider: &str, topics: &[&str], level: &str) -> Course {
        Course {
            title: title.to_string(),
            provider: provider.to_string(),
            url: format!("https://example.com/{}", title.to_lowercase()),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            level: level.to_string(),
            summary: String::new(),
            est_hours: None,
        }
    }

    fn titles(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.title.as_str()).collect()
    }

    fn with_fallback() -> MatchOptions {
        MatchOptions {
            use_builtin_fallback: true,
            ..MatchOptions::default()
        }
    }

    #[test]
    fn test_no_catalog_without_fallback_is_empty() {
        let result = recommend_courses(&profile("python", "", ""), None, MatchOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_python_beginner_with_builtin_fallback() {
        let result = recommend_courses(&profile("python", "beginner", ""), None, with_fallback());
        assert_eq!(
            titles(&result),
            vec![
                "Data Scientist with Python",
                "Data Analyst with Python",
                "Machine Learning Scientist with Python",
            ]
        );
    }

    #[test]
    fn test_topic_and_provider_match_ignore_case() {
        let catalog = vec![
            course("A", "DataCamp", &["SQL"], "beginner"),
            course("B", "Coursera", &["sql"], "beginner"),
        ];
        let result = recommend_courses(
            &profile("sql", "beginner", "datacamp"),
            Some(&catalog),
            MatchOptions::default(),
        );
        assert_eq!(titles(&result), vec!["A"]);
    }

    #[test]
    fn test_level_allows_one_tier_above() {
        let catalog = vec![
            course("Easy", "X", &["sql"], "beginner"),
            course("Middle", "X", &["sql"], "Intermediate"),
            course("Hard", "X", &["sql"], "advanced"),
        ];
        let options = MatchOptions {
            limit: 10,
            use_builtin_fallback: false,
        };

        let beginner = recommend_courses(&profile("sql", "beginner", ""), Some(&catalog), options);
        assert_eq!(titles(&beginner), vec!["Easy", "Middle"]);

        let intermediate =
            recommend_courses(&profile("sql", "intermediate", ""), Some(&catalog), options);
        assert_eq!(titles(&intermediate), vec!["Easy", "Middle", "Hard"]);
    }

    #[test]
    fn test_unknown_course_level_ranks_as_beginner() {
        let catalog = vec![course("Odd", "X", &["sql"], "all levels")];
        let result = recommend_courses(
            &profile("sql", "beginner", ""),
            Some(&catalog),
            MatchOptions::default(),
        );
        assert_eq!(titles(&result), vec!["Odd"]);
    }

    #[test]
    fn test_fallback_relaxes_to_allowed_beginner_courses() {
        let catalog = vec![
            course("Intro R", "DataCamp", &["r"], "beginner"),
            course("Advanced R", "DataCamp", &["r"], "advanced"),
            course("Intro Go", "Other", &["go"], "beginner"),
        ];
        let profile = profile("rust", "beginner", "DataCamp");

        let strict = recommend_courses(&profile, Some(&catalog), MatchOptions::default());
        assert!(strict.is_empty());

        let relaxed = recommend_courses(&profile, Some(&catalog), with_fallback());
        assert_eq!(titles(&relaxed), vec!["Intro R"]);
    }

    #[test]
    fn test_fallback_floor_on_builtin_catalog() {
        for (topics, level) in [("rust", "advanced"), ("cooking", ""), ("sql", "intermediate")] {
            let result = recommend_courses(&profile(topics, level, ""), None, with_fallback());
            assert!(!result.is_empty(), "no starter set for {}", topics);
        }
    }

    #[test]
    fn test_limit_preserves_catalog_order() {
        let result = recommend_courses(
            &profile("python", "advanced", ""),
            None,
            MatchOptions {
                limit: 2,
                use_builtin_fallback: true,
            },
        );
        assert_eq!(
            titles(&result),
            vec!["Data Scientist with Python", "Data Analyst with Python"]
        );
    }

    #[test]
    fn test_recommendation_is_idempotent() {
        let catalog = crate::domain::services::catalog::builtin_catalog();
        let profile = profile("python, sql", "beginner", "");
        let first = recommend_courses(&profile, Some(&catalog), with_fallback());
        let second = recommend_courses(&profile, Some(&catalog), with_fallback());
        assert_eq!(first, second);
    }
}
