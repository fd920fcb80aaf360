//! Rule configuration model
//!
//! These types mirror the persisted configuration format: camelCase field
//! names and the string enum values are preserved via serde renames so that
//! existing stored rule documents deserialize unchanged. Implicit defaults
//! (combination operator, condition operator, forwarding toggles) are applied
//! here at the deserialization boundary, never inside the evaluator.

use serde::{Deserialize, Serialize};

/// Which location field a condition compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionType {
    Continent,
    Country,
    Region,
    City,
    Ip,
}

/// Equality or negated equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionOperator {
    #[default]
    Is,
    IsNot,
}

/// How the conditions of a set combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CombineOperator {
    And,
    /// Stored documents that omit the operator mean OR.
    #[default]
    Or,
}

/// What a matching condition set does to the guarded content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityAction {
    #[default]
    Show,
    Hide,
}

/// One atomic predicate over a location field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: ConditionType,
    pub value: String,
    #[serde(default)]
    pub operator: ConditionOperator,
}

impl Condition {
    pub fn new(kind: ConditionType, value: impl Into<String>, operator: ConditionOperator) -> Self {
        Self {
            kind,
            value: value.into(),
            operator,
        }
    }
}

/// A list of conditions combined by AND/OR, paired with a show/hide action.
///
/// An empty condition list is valid and matches trivially.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub operator: CombineOperator,
    #[serde(default)]
    pub action: VisibilityAction,
}

/// Whether a redirect location applies to every page or to mapped pages only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTargeting {
    #[default]
    All,
    Specific,
}

/// One source-page to destination mapping for specific-page targeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectMapping {
    #[serde(rename = "fromUrl")]
    pub from_url: String,
    #[serde(rename = "toUrl")]
    pub to_url: String,
}

/// URL-shape predicate that vetoes an otherwise-matching redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionType {
    UrlEquals,
    UrlContains,
    QueryContains,
    HashContains,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    #[serde(rename = "type")]
    pub kind: ExclusionType,
    pub value: String,
}

/// One geo-targeted redirect behavior within a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleLocation {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub operator: CombineOperator,

    #[serde(rename = "pageTargetingType", default)]
    pub page_targeting: PageTargeting,

    /// Destination base URL; used when `page_targeting` is `all`.
    #[serde(rename = "redirectUrl", default)]
    pub redirect_url: String,

    /// Per-page destinations; used when `page_targeting` is `specific`.
    #[serde(rename = "redirectMappings", default)]
    pub redirect_mappings: Vec<RedirectMapping>,

    #[serde(default)]
    pub exclusions: Vec<Exclusion>,

    /// Forward the request path onto the destination (`all` targeting only).
    #[serde(rename = "passPath", default = "default_true")]
    pub pass_path: bool,

    /// Forward the request query string onto the destination.
    #[serde(rename = "passQuery", default = "default_true")]
    pub pass_query: bool,
}

impl Default for RuleLocation {
    fn default() -> Self {
        Self {
            id: String::new(),
            conditions: Vec::new(),
            operator: CombineOperator::default(),
            page_targeting: PageTargeting::default(),
            redirect_url: String::new(),
            redirect_mappings: Vec::new(),
            exclusions: Vec::new(),
            pass_path: true,
            pass_query: true,
        }
    }
}

/// A named, enable-able container of geo-conditional redirect locations.
///
/// Rules are evaluated in list order; the first matching location wins. A
/// disabled rule contributes nothing to matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectionRule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Stored rules that predate the toggle were live, so absence means enabled.
    #[serde(rename = "isEnabled", default = "default_true")]
    pub is_enabled: bool,
    #[serde(default)]
    pub locations: Vec<RuleLocation>,
}

const fn default_true() -> bool {
    true
}
