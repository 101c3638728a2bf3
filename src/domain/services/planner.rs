use crate::domain::model::{Course, LearningPlan, LearningPlanStep, UserProfile};

pub const CLARIFY_TITLE: &str = "Step 0: Clarify success";
pub const APPLY_TITLE: &str = "Step final: Apply your skills";

const PORTFOLIO_RESOURCES: [&str; 2] = [
    "https://www.kaggle.com/datasets",
    "https://github.com/trending/python?since=monthly",
];

const COACHING_NOTES: [&str; 3] = [
    "Aim for consistent daily progress (30-60 minutes).",
    "Take quick notes after each session to capture insights and blockers.",
    "Celebrate wins: course checkpoints, projects completed, or concepts mastered.",
];

fn step_from_course(course: &Course, index: usize) -> LearningPlanStep {
    LearningPlanStep {
        title: format!("Step {}: {}", index + 1, course.title),
        description: format!(
            "Work through {} on {}. Focus on modules matching your goal.",
            course.title, course.provider
        ),
        resources: vec![course.url.clone()],
        est_time_hours: course.est_hours,
    }
}

/// Compose an ordered plan: a clarify step, one step per course, then a project step.
pub fn build_learning_plan(profile: &UserProfile, courses: &[Course]) -> LearningPlan {
    let mut steps = Vec::with_capacity(courses.len() + 2);

    steps.push(LearningPlanStep {
        title: CLARIFY_TITLE.to_string(),
        description: format!(
            "Write a 2-3 sentence description of what success looks like for {}. \
             Keep it visible during study sessions.",
            profile.learning_goal
        ),
        resources: Vec::new(),
        est_time_hours: Some(1),
    });

    steps.extend(
        courses
            .iter()
            .enumerate()
            .map(|(index, course)| step_from_course(course, index)),
    );

    steps.push(LearningPlanStep {
        title: APPLY_TITLE.to_string(),
        description: "Complete a small portfolio project that applies what you learned. \
                      Share it with a peer or mentor for feedback."
            .to_string(),
        resources: PORTFOLIO_RESOURCES.iter().map(|r| r.to_string()).collect(),
        est_time_hours: Some(8),
    });

    let mut notes: Vec<String> = COACHING_NOTES.iter().map(|n| n.to_string()).collect();
    if !profile.phased_focus.is_empty() {
        notes.push(format!(
            "Phased focus provided: {}. Align steps with these phases.",
            profile.phased_focus.join(", ")
        ));
    }

    tracing::debug!("Composed plan with {} steps", steps.len());

    LearningPlan {
        goal: profile.learning_goal.clone(),
        steps,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::catalog::builtin_catalog;
    use crate::domain::services::profile::build_profile;
    use std::collections::HashMap;

    fn profile_with_phases(phases: &str) -> UserProfile {
        let mut answers = HashMap::new();
        answers.insert("learning_goal".to_string(), "become a data analyst".to_string());
        answers.insert("phased_focus".to_string(), phases.to_string());
        build_profile("Kim", &answers)
    }

    #[test]
    fn test_empty_course_list_keeps_bookends() {
        let plan = build_learning_plan(&profile_with_phases(""), &[]);

        assert_eq!(plan.steps.len(), 2);
        assert_eq!(plan.steps[0].title, CLARIFY_TITLE);
        assert_eq!(plan.steps[0].est_time_hours, Some(1));
        assert!(plan.steps[0].resources.is_empty());
        assert!(plan.steps[0].description.contains("become a data analyst"));
        assert_eq!(plan.steps[1].title, APPLY_TITLE);
        assert_eq!(plan.steps[1].est_time_hours, Some(8));
        assert_eq!(plan.steps[1].resources.len(), 2);
        assert_eq!(plan.goal, "become a data analyst");
    }

    #[test]
    fn test_one_step_per_course_in_order() {
        let catalog = builtin_catalog();
        let plan = build_learning_plan(&profile_with_phases(""), &catalog);

        assert_eq!(plan.steps.len(), catalog.len() + 2);
        assert_eq!(plan.steps[1].title, "Step 1: Data Scientist with Python");
        assert_eq!(plan.steps[4].title, "Step 4: SQL Fundamentals");
        assert_eq!(plan.steps[4].resources, vec![catalog[3].url.clone()]);
        assert_eq!(plan.steps[4].est_time_hours, Some(4));
        assert_eq!(plan.steps.last().unwrap().title, APPLY_TITLE);
    }

    #[test]
    fn test_course_without_estimate_leaves_step_unset() {
        let mut course = builtin_catalog().remove(0);
        course.est_hours = None;
        let plan = build_learning_plan(&profile_with_phases(""), &[course]);
        assert_eq!(plan.steps[1].est_time_hours, None);
    }

    #[test]
    fn test_phase_note_only_when_phases_present() {
        let without = build_learning_plan(&profile_with_phases(""), &[]);
        assert_eq!(without.notes.len(), 3);

        let with = build_learning_plan(&profile_with_phases("SQL; dashboards"), &[]);
        assert_eq!(with.notes.len(), 4);
        assert_eq!(
            with.notes[3],
            "Phased focus provided: SQL, dashboards. Align steps with these phases."
        );
    }
}
