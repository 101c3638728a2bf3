use crate::domain::model::Course;
use crate::domain::ports::CourseSource;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_courses;
use std::path::{Path, PathBuf};

/// Course list read from a JSON array, e.g. a saved search response.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(content: &str) -> Result<Vec<Course>> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if !value.is_array() {
            return Err(PlannerError::CatalogError {
                message: "expected a JSON array of courses".to_string(),
            });
        }

        let courses: Vec<Course> = serde_json::from_value(value)?;
        validate_courses("catalog", &courses)?;
        Ok(courses)
    }
}

impl CourseSource for JsonCatalog {
    fn courses(&self) -> Result<Vec<Course>> {
        let content = std::fs::read_to_string(&self.path)?;
        let courses = Self::parse(&content)?;
        tracing::info!(
            "📚 Loaded {} courses from {}",
            courses.len(),
            self.path.display()
        );
        Ok(courses)
    }
}
