use crate::domain::model::Course;
use crate::domain::ports::CourseSource;
use crate::utils::error::Result;

fn course(
    title: &str,
    url: &str,
    topics: &[&str],
    level: &str,
    summary: &str,
    est_hours: u32,
) -> Course {
    Course {
        title: title.to_string(),
        provider: "DataCamp".to_string(),
        url: url.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        level: level.to_string(),
        summary: summary.to_string(),
        est_hours: Some(est_hours),
    }
}

/// Tiny offline catalog used when fallback is requested and no catalog is supplied.
pub fn builtin_catalog() -> Vec<Course> {
    vec![
        course(
            "Data Scientist with Python",
            "https://www.datacamp.com/tracks/data-scientist-with-python",
            &["python", "data analysis", "statistics", "machine learning"],
            "beginner",
            "End-to-end track that introduces Python, data wrangling, and basic ML.",
            88,
        ),
        course(
            "Data Analyst with Python",
            "https://www.datacamp.com/tracks/data-analyst-with-python",
            &["python", "pandas", "visualization"],
            "beginner",
            "Core data analysis skills with pandas, visualization, and SQL foundations.",
            62,
        ),
        course(
            "Machine Learning Scientist with Python",
            "https://www.datacamp.com/tracks/machine-learning-scientist-with-python",
            &["machine learning", "modeling", "python"],
            "intermediate",
            "Deep dive into ML workflows, model tuning, and advanced techniques.",
            80,
        ),
        course(
            "SQL Fundamentals",
            "https://www.datacamp.com/courses/introduction-to-sql",
            &["sql", "databases"],
            "beginner",
            "Introductory SQL for data querying and analysis.",
            4,
        ),
        course(
            "Deep Learning in Python",
            "https://www.datacamp.com/courses/deep-learning-in-python",
            &["deep learning", "neural networks", "python"],
            "intermediate",
            "Neural network foundations with Keras and practical projects.",
            16,
        ),
    ]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CourseSource for BuiltinCatalog {
    fn courses(&self) -> Result<Vec<Course>> {
        Ok(builtin_catalog())
    }
}
