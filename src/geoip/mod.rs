//! Visitor location resolution using MaxMind GeoLite2/GeoIP2 MMDB
//!
//! The engine never resolves locations itself; callers resolve once per
//! request through a `LocationResolver` and pass the record in. This module
//! provides the memory-mapped MaxMind adapter.

pub mod client_ip;

use anyhow::{Context, Result};
use maxminddb::{geoip2, Mmap, Reader};
use std::net::IpAddr;
use std::sync::Arc;

use crate::models::LocationRecord;

/// Resolves an IP address to a location record.
///
/// `None` means "cannot evaluate": callers treat it as no-redirect / hidden
/// content without ever calling into the engine.
pub trait LocationResolver: Send + Sync {
    fn resolve(&self, ip: IpAddr) -> Option<LocationRecord>;
}

/// MaxMind-backed resolver over a memory-mapped City database.
pub struct GeoIpResolver {
    city_reader: Option<Arc<Reader<Mmap>>>,
}

impl GeoIpResolver {
    /// Create a resolver from an optional MMDB file path.
    ///
    /// With no path, `resolve` always returns `None`; evaluation is then
    /// skipped by callers rather than failing.
    pub fn new(city_path: Option<&str>) -> Result<Self> {
        let city_reader = if let Some(path) = city_path {
            let reader = unsafe { Reader::open_mmap(path) }
                .with_context(|| format!("Failed to open GeoIP City database at {}", path))?;
            Some(Arc::new(reader))
        } else {
            None
        };

        Ok(Self { city_reader })
    }

    fn extract_from_city(ip: IpAddr, city: &geoip2::City) -> LocationRecord {
        let continent = city
            .continent
            .names
            .english
            .or(city.continent.code)
            .unwrap_or_default()
            .to_string();

        let region = city
            .subdivisions
            .first()
            .and_then(|s| s.names.english)
            .unwrap_or_default()
            .to_string();

        LocationRecord {
            continent,
            country: city.country.names.english.unwrap_or_default().to_string(),
            country_code: city.country.iso_code.unwrap_or_default().to_string(),
            region,
            city: city.city.names.english.unwrap_or_default().to_string(),
            ip: ip.to_string(),
        }
    }

    fn extract_from_country(ip: IpAddr, country: &geoip2::Country) -> LocationRecord {
        LocationRecord {
            continent: country
                .continent
                .names
                .english
                .or(country.continent.code)
                .unwrap_or_default()
                .to_string(),
            country: country.country.names.english.unwrap_or_default().to_string(),
            country_code: country.country.iso_code.unwrap_or_default().to_string(),
            ip: ip.to_string(),
            ..Default::default()
        }
    }
}

impl LocationResolver for GeoIpResolver {
    fn resolve(&self, ip: IpAddr) -> Option<LocationRecord> {
        let reader = self.city_reader.as_ref()?;
        let result = reader.lookup(ip).ok()?;

        // City lookup first; fall back to Country, which any GeoIP2 database
        // can satisfy since City is a superset of Country data.
        if let Ok(Some(city)) = result.decode::<geoip2::City>() {
            return Some(Self::extract_from_city(ip, &city));
        }
        if let Ok(Some(country)) = result.decode::<geoip2::Country>() {
            return Some(Self::extract_from_country(ip, &country));
        }

        None
    }
}

// Implement Clone by cloning the Arc
impl Clone for GeoIpResolver {
    fn clone(&self) -> Self {
        Self {
            city_reader: self.city_reader.clone(),
        }
    }
}
