//! Redirection resolution
//!
//! Scans a prioritized rule list against the current request URL and the
//! visitor's resolved location. First match wins; disabled rules and
//! excluded locations contribute nothing. The resolver only computes the
//! destination URL; issuing the HTTP redirect is the caller's job.

use tracing::debug;

use crate::engine::conditions::conditions_match;
use crate::engine::url::{build_redirect_url, url_matches_pattern, RequestUrl};
use crate::models::{
    Exclusion, ExclusionType, LocationRecord, PageTargeting, RedirectionRule, RuleLocation,
};

/// Compute the redirect destination for a request, if any rule applies.
///
/// Rules are scanned in list order, their locations in order within each
/// rule; the first location that survives exclusions, matches its
/// conditions, and targets the request produces the destination. An
/// unparseable request URL never redirects.
pub fn resolve_redirect(
    rules: &[RedirectionRule],
    location: &LocationRecord,
    request_url: &str,
) -> Option<String> {
    let request = RequestUrl::parse(request_url)?;

    for rule in rules.iter().filter(|r| r.is_enabled) {
        for loc in &rule.locations {
            if is_excluded(&loc.exclusions, &request) {
                continue;
            }
            if !conditions_match(&loc.conditions, loc.operator, location) {
                continue;
            }
            if let Some(destination) = redirect_target(loc, &request) {
                debug!(
                    rule_id = %rule.id,
                    location_id = %loc.id,
                    destination = %destination,
                    "redirect rule matched"
                );
                return Some(destination);
            }
        }
    }

    None
}

/// Cheap pre-check: could this URL redirect for *some* visitor?
///
/// Repeats the resolution scan but skips condition evaluation entirely, so
/// callers can avoid resolving the visitor's location (an expensive,
/// rate-limited upstream call) when no rule could apply to the URL anyway.
pub fn has_potential_redirect(rules: &[RedirectionRule], request_url: &str) -> bool {
    let Some(request) = RequestUrl::parse(request_url) else {
        return false;
    };

    rules
        .iter()
        .filter(|r| r.is_enabled)
        .flat_map(|r| &r.locations)
        .any(|loc| !is_excluded(&loc.exclusions, &request) && targets_request(loc, &request))
}

/// Destination for a matching location, or None when the location is inert
/// for this request (no targeting hit, or under-specified configuration).
fn redirect_target(loc: &RuleLocation, request: &RequestUrl) -> Option<String> {
    match loc.page_targeting {
        PageTargeting::All => {
            // An all-pages location without a destination never matches.
            if loc.redirect_url.trim().is_empty() {
                return None;
            }
            Some(build_redirect_url(
                &loc.redirect_url,
                request,
                loc.pass_path,
                loc.pass_query,
            ))
        }
        PageTargeting::Specific => loc
            .redirect_mappings
            .iter()
            .find(|m| url_matches_pattern(request, &m.from_url))
            // Mapped destinations are used as-is: no path append.
            .map(|m| build_redirect_url(&m.to_url, request, false, loc.pass_query)),
    }
}

/// Targeting check alone, for the potential-match pre-filter.
fn targets_request(loc: &RuleLocation, request: &RequestUrl) -> bool {
    match loc.page_targeting {
        PageTargeting::All => !loc.redirect_url.trim().is_empty(),
        PageTargeting::Specific => loc
            .redirect_mappings
            .iter()
            .any(|m| url_matches_pattern(request, &m.from_url)),
    }
}

fn is_excluded(exclusions: &[Exclusion], request: &RequestUrl) -> bool {
    // An exclusion without a value cannot veto anything; `contains("")`
    // would otherwise match every request.
    exclusions
        .iter()
        .filter(|e| !e.value.is_empty())
        .any(|e| match e.kind {
            ExclusionType::UrlEquals => request.path == e.value,
            ExclusionType::UrlContains => request.path.contains(&e.value),
            ExclusionType::QueryContains => request.query.contains(&e.value),
            ExclusionType::HashContains => request.fragment.contains(&e.value),
        })
}
