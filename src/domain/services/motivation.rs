use crate::domain::model::UserProfile;
use rand::seq::IndexedRandom;
use rand::Rng;

const ENCOURAGEMENTS: [&str; 3] = [
    "Every small session compounds into big gains.",
    "Momentum beats perfection, so show up for today's session.",
    "Remember why you started and celebrate each checkpoint.",
];

/// Build a supportive message from the profile and optional progress signals.
///
/// The random source is supplied by the caller; pass a seeded generator for
/// reproducible output.
pub fn build_motivation_message<R: Rng + ?Sized>(
    profile: &UserProfile,
    progress_percent: Option<u8>,
    last_action: Option<&str>,
    rng: &mut R,
) -> String {
    let openers = [
        format!("Hey {}, you've got this!", profile.name),
        format!("Keep it up, {}!", profile.name),
        format!("Great work staying committed, {}!", profile.name),
    ];

    let mut encouragements: Vec<String> = ENCOURAGEMENTS.iter().map(|e| e.to_string()).collect();

    if let Some(percent) = progress_percent {
        encouragements.push(format!(
            "Nice! You're {}% into your plan already.",
            percent
        ));
    }

    if let Some(action) = last_action.filter(|a| !a.is_empty()) {
        encouragements.push(format!("Your last win: {}. Let's build on it.", action));
    }

    let opener = openers.choose(rng).map(String::as_str).unwrap_or_default();
    let encouragement = encouragements
        .choose(rng)
        .map(String::as_str)
        .unwrap_or(ENCOURAGEMENTS[0]);

    format!("{} {}", opener, encouragement)
}

/// Same as [`build_motivation_message`] using the thread-local generator.
pub fn motivate(
    profile: &UserProfile,
    progress_percent: Option<u8>,
    last_action: Option<&str>,
) -> String {
    build_motivation_message(profile, progress_percent, last_action, &mut rand::rng())
}
