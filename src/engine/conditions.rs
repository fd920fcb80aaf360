//! Condition evaluation
//!
//! Single home for condition comparison: both the content-visibility path and
//! the redirection resolver call into `conditions_match`, so country aliasing
//! and case-folding cannot drift between the two.

use crate::models::{
    CombineOperator, Condition, ConditionOperator, ConditionType, LocationRecord,
    VisibilityAction,
};

/// Normalized form used for every condition comparison: trimmed, lower-cased.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Evaluate a single condition against a location.
///
/// Country conditions are aliased: the configured value satisfies `is` when
/// it equals either the country display name or the ISO code, so "US" and
/// "United States" behave identically. `is-not` is satisfied only when
/// neither matches.
pub fn condition_matches(condition: &Condition, location: &LocationRecord) -> bool {
    let value = normalize(&condition.value);

    let matched = match condition.kind {
        ConditionType::Country => {
            normalize(&location.country) == value || normalize(&location.country_code) == value
        }
        kind => normalize(location.field(kind)) == value,
    };

    match condition.operator {
        ConditionOperator::Is => matched,
        ConditionOperator::IsNot => !matched,
    }
}

/// Evaluate a condition list under an AND/OR combination.
///
/// An empty list vacuously matches: redirection uses this to mean
/// "match any visitor".
pub fn conditions_match(
    conditions: &[Condition],
    operator: CombineOperator,
    location: &LocationRecord,
) -> bool {
    if conditions.is_empty() {
        return true;
    }

    match operator {
        CombineOperator::And => conditions.iter().all(|c| condition_matches(c, location)),
        CombineOperator::Or => conditions.iter().any(|c| condition_matches(c, location)),
    }
}

/// Evaluate a condition set for content visibility.
///
/// The action is applied to the combined match result: a matching set shows
/// content under `show` and hides it under `hide`; a non-matching set does
/// the opposite.
pub fn evaluate_condition_set(
    conditions: &[Condition],
    operator: CombineOperator,
    action: VisibilityAction,
    location: &LocationRecord,
) -> bool {
    let matched = conditions_match(conditions, operator, location);

    match action {
        VisibilityAction::Show => matched,
        VisibilityAction::Hide => !matched,
    }
}
