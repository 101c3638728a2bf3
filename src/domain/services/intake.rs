use crate::domain::model::IntakeQuestion;

const INTAKE_QUESTIONS: [IntakeQuestion; 8] = [
    IntakeQuestion {
        key: "name",
        prompt: "What name would you like me to use?",
        guidance: "A nickname is perfect.",
    },
    IntakeQuestion {
        key: "learning_goal",
        prompt: "What outcome are you aiming for (e.g., land a data analyst role, build ML projects)?",
        guidance: "Keep this concrete so the plan can be focused.",
    },
    IntakeQuestion {
        key: "interested_topics",
        prompt: "Which topics or skills do you want to cover first?",
        guidance: "Examples: Python, SQL, pandas, data visualization, machine learning.",
    },
    IntakeQuestion {
        key: "current_level",
        prompt: "How would you describe your current level?",
        guidance: "Choose from beginner, intermediate, or advanced.",
    },
    IntakeQuestion {
        key: "provider_requirements",
        prompt: "Do you have preferred course providers or requirements?",
        guidance: "Examples: DataCamp-only, short courses (<10h), project-focused.",
    },
    IntakeQuestion {
        key: "timeframe_weeks",
        prompt: "How many weeks do you want this plan to run?",
        guidance: "Use a number (e.g., 8 for two months).",
    },
    IntakeQuestion {
        key: "weekly_time_hours",
        prompt: "How many hours per week can you study?",
        guidance: "A ballpark number helps break down the weekly schedule.",
    },
    IntakeQuestion {
        key: "phased_focus",
        prompt: "Do you want phases (e.g., Month 1: data analysis; Month 2: finance)?",
        guidance: "Separate phases with semicolons. Optional, leave blank if you prefer a straight path.",
    },
];

/// Ordered intake questions to ask a new learner.
pub fn intake_questions() -> &'static [IntakeQuestion] {
    &INTAKE_QUESTIONS
}
