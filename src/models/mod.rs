mod location;
mod rules;

pub use location::LocationRecord;
pub use rules::{
    CombineOperator, Condition, ConditionOperator, ConditionSet, ConditionType, Exclusion,
    ExclusionType, PageTargeting, RedirectMapping, RedirectionRule, RuleLocation,
    VisibilityAction,
};
