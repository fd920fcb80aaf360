//! Resolved visitor location

use serde::{Deserialize, Serialize};

use super::rules::ConditionType;

/// Geographic attributes resolved for one request.
///
/// Constructed once per request by a location resolver and passed by
/// reference into evaluation; the engine never mutates it. Fields that the
/// resolver could not determine are empty strings, which simply never
/// compare equal to a configured condition value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Continent name (e.g., "North America")
    #[serde(default)]
    pub continent: String,

    /// Country display name (e.g., "United States")
    #[serde(default)]
    pub country: String,

    /// ISO 3166-1 alpha-2 country code (e.g., "US")
    #[serde(default)]
    pub country_code: String,

    /// Region/state/province name
    #[serde(default)]
    pub region: String,

    /// City name
    #[serde(default)]
    pub city: String,

    /// Client IP address, in display form
    #[serde(default)]
    pub ip: String,
}

impl LocationRecord {
    /// The field a condition of the given type compares against.
    pub fn field(&self, kind: ConditionType) -> &str {
        match kind {
            ConditionType::Continent => &self.continent,
            ConditionType::Country => &self.country,
            ConditionType::Region => &self.region,
            ConditionType::City => &self.city,
            ConditionType::Ip => &self.ip,
        }
    }
}
