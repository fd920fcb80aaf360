use ipnet::IpNet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rules: RulesConfig,
    pub geoip: GeoIpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Path to the JSON rule document
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoIpConfig {
    /// Path to the MaxMind City .mmdb file
    /// If None, location resolution is disabled
    pub city_db_path: Option<String>,

    /// CIDRs of proxies whose X-Forwarded-For headers are trusted
    #[serde(default)]
    pub trusted_proxies: Vec<IpNet>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let rules_path =
            std::env::var("GEOSTEER_RULES_PATH").unwrap_or_else(|_| "./rules.json".to_string());

        let city_db_path = std::env::var("GEOSTEER_GEOIP_DB").ok();

        let trusted_proxies = std::env::var("GEOSTEER_TRUSTED_PROXIES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .filter_map(|s| match s.parse::<IpNet>() {
                        Ok(net) => Some(net),
                        Err(_) => {
                            tracing::warn!(
                                "Ignoring invalid CIDR '{s}' in GEOSTEER_TRUSTED_PROXIES"
                            );
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            rules: RulesConfig { path: rules_path },
            geoip: GeoIpConfig {
                city_db_path,
                trusted_proxies,
            },
        })
    }
}
