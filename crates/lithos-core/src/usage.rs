//! Contextualized usage instructions.

use crate::catalog::Scenario;
use crate::energy::TimeBucket;

fn time_clause(bucket: TimeBucket) -> Option<&'static str> {
    match bucket {
        TimeBucket::Morning => Some("Use it in the morning to set an intention for the day."),
        TimeBucket::Evening => Some("In the evening, keep it beside your bed to help you unwind."),
        TimeBucket::Afternoon | TimeBucket::Night => None,
    }
}

fn focus_clause(focus: Scenario) -> &'static str {
    match focus {
        Scenario::Meditation => "Hold it in your palm through ten slow breaths of meditation.",
        Scenario::Daily => "Carry it with you so it stays within reach all day.",
        Scenario::Healing => "Rest it on the area that needs care for about fifteen minutes.",
        Scenario::Protection => "Place it near the entrance of your room or workspace.",
    }
}

/// Compose usage instructions from an entry's template.
///
/// Appends the time-of-day clause, then the focus clause, each separated by a space.
pub fn usage_for(template: &str, bucket: TimeBucket, focus: Option<Scenario>) -> String {
    let mut text = template.trim_end().to_string();
    for clause in time_clause(bucket).into_iter().chain(focus.map(focus_clause)) {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(clause);
    }
    text
}
