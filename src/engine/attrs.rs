//! Shortcode-style attribute parsing
//!
//! Turns free-text attributes like `country = "US, !CA"` into a
//! `ConditionSet`. This is authoring sugar layered on top of the evaluator;
//! it only builds the set, evaluation stays in `conditions`.

use crate::models::{
    CombineOperator, Condition, ConditionOperator, ConditionSet, ConditionType, VisibilityAction,
};

fn condition_type_for(key: &str) -> Option<ConditionType> {
    match key.trim().to_lowercase().as_str() {
        "continent" => Some(ConditionType::Continent),
        "country" => Some(ConditionType::Country),
        "region" => Some(ConditionType::Region),
        "city" => Some(ConditionType::City),
        "ip" => Some(ConditionType::Ip),
        _ => None,
    }
}

/// Build a `ConditionSet` from attribute key/value pairs.
///
/// Each location-field attribute holds comma-separated values; a leading `!`
/// negates a value (`is-not`). Empty values are dropped. A `match` attribute
/// of `all` combines with AND, anything else (or absence) with OR. Unknown
/// attribute keys are ignored, so presentation attributes can ride along.
pub fn parse_condition_attrs<'a, I>(attrs: I, action: VisibilityAction) -> ConditionSet
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut conditions = Vec::new();
    let mut operator = CombineOperator::Or;

    for (key, raw) in attrs {
        if key.trim().eq_ignore_ascii_case("match") {
            if raw.trim().eq_ignore_ascii_case("all") {
                operator = CombineOperator::And;
            }
            continue;
        }

        let Some(kind) = condition_type_for(key) else {
            continue;
        };

        for part in raw.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (value, op) = match part.strip_prefix('!') {
                Some(rest) => (rest.trim(), ConditionOperator::IsNot),
                None => (part, ConditionOperator::Is),
            };
            if value.is_empty() {
                continue;
            }
            conditions.push(Condition::new(kind, value, op));
        }
    }

    ConditionSet {
        id: String::new(),
        conditions,
        operator,
        action,
    }
}
