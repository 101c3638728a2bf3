use crate::domain::model::{LearningPlan, LearningPlanStep, WeeklyPlan};

pub const MIN_DEFAULT_WEEKS: usize = 4;

/// Number of weeks the schedule covers.
pub fn effective_weeks(step_count: usize, timeframe_weeks: Option<u32>) -> usize {
    match timeframe_weeks {
        Some(weeks) if weeks > 0 => weeks as usize,
        _ => step_count.max(MIN_DEFAULT_WEEKS),
    }
}

/// Map plan steps onto weeks.
///
/// Week `w` takes step `w % steps.len()`: steps repeat when the horizon is
/// longer than the plan, and later steps are never reached when it is shorter.
pub fn build_weekly_plan(
    plan: &LearningPlan,
    weekly_time_hours: Option<u32>,
    timeframe_weeks: Option<u32>,
) -> WeeklyPlan {
    let total_steps = plan.steps.len();
    if total_steps == 0 {
        return Vec::new();
    }

    let weeks = effective_weeks(total_steps, timeframe_weeks);
    tracing::debug!("Slicing {} steps across {} weeks", total_steps, weeks);

    (0..weeks)
        .map(|week| {
            let step = &plan.steps[week % total_steps];
            LearningPlanStep {
                title: format!("Week {}: {}", week + 1, step.title),
                description: step.description.clone(),
                resources: step.resources.clone(),
                est_time_hours: step.est_time_hours.or(weekly_time_hours),
            }
        })
        .collect()
}
