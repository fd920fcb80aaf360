//! Engine integration tests
//!
//! These tests drive the evaluator and resolver through rules deserialized
//! from the stored JSON document format, the same way a host loads them.

use geosteer::engine::{
    evaluate_condition_set, has_potential_redirect, resolve_redirect,
};
use geosteer::models::{LocationRecord, RedirectionRule};
use geosteer::storage::{JsonFileStore, RuleStore, StoreError};

fn california_visitor() -> LocationRecord {
    LocationRecord {
        continent: "North America".to_string(),
        country: "United States".to_string(),
        country_code: "US".to_string(),
        region: "California".to_string(),
        city: "Los Angeles".to_string(),
        ip: "203.0.113.40".to_string(),
    }
}

fn rules_from_json(raw: &str) -> Vec<RedirectionRule> {
    serde_json::from_str(raw).unwrap()
}

fn region_rule(base: &str, pass_path: bool, pass_query: bool) -> Vec<RedirectionRule> {
    rules_from_json(&format!(
        r#"[{{
            "id": "regional",
            "name": "Regional storefront",
            "isEnabled": true,
            "locations": [{{
                "conditions": [{{"type": "region", "value": "California"}}],
                "redirectUrl": "{base}",
                "passPath": {pass_path},
                "passQuery": {pass_query}
            }}]
        }}]"#
    ))
}

const REQUEST: &str = "https://example.com/products/?color=red#details";

#[test]
fn test_url_building_pass_both() {
    let rules = region_rule("https://cali.example.com/", true, true);
    let dest = resolve_redirect(&rules, &california_visitor(), REQUEST);
    assert_eq!(
        dest.as_deref(),
        Some("https://cali.example.com/products/?color=red#details")
    );
}

#[test]
fn test_url_building_pass_path_only() {
    let rules = region_rule("https://ca.example.com/", true, false);
    let dest = resolve_redirect(&rules, &california_visitor(), REQUEST);
    assert_eq!(dest.as_deref(), Some("https://ca.example.com/products/#details"));
}

#[test]
fn test_url_building_pass_query_only() {
    let rules = region_rule("https://us.example.com/", false, true);
    let dest = resolve_redirect(&rules, &california_visitor(), REQUEST);
    assert_eq!(dest.as_deref(), Some("https://us.example.com/?color=red#details"));
}

#[test]
fn test_url_building_pass_neither() {
    let rules = region_rule("https://tx.example.com/", false, false);
    let dest = resolve_redirect(&rules, &california_visitor(), REQUEST);
    assert_eq!(dest.as_deref(), Some("https://tx.example.com/#details"));
}

#[test]
fn test_first_enabled_matching_rule_wins_across_rules() {
    let raw = r#"[
        {
            "id": "disabled",
            "name": "Old redirect",
            "isEnabled": false,
            "locations": [{
                "conditions": [],
                "redirectUrl": "https://old.example.com"
            }]
        },
        {
            "id": "us",
            "name": "US storefront",
            "isEnabled": true,
            "locations": [{
                "conditions": [{"type": "country", "value": "US"}],
                "redirectUrl": "https://us.example.com",
                "passPath": false,
                "passQuery": false
            }]
        },
        {
            "id": "catch-all",
            "name": "Everyone else",
            "isEnabled": true,
            "locations": [{
                "conditions": [],
                "redirectUrl": "https://www.example.net",
                "passPath": false,
                "passQuery": false
            }]
        }
    ]"#;
    let rules = rules_from_json(raw);

    let dest = resolve_redirect(&rules, &california_visitor(), "https://example.com/");
    assert_eq!(dest.as_deref(), Some("https://us.example.com"));

    let elsewhere = LocationRecord {
        country: "France".to_string(),
        country_code: "FR".to_string(),
        ..Default::default()
    };
    let dest = resolve_redirect(&rules, &elsewhere, "https://example.com/");
    assert_eq!(dest.as_deref(), Some("https://www.example.net"));
}

#[test]
fn test_specific_mapping_redirects_verbatim() {
    let raw = r#"[{
        "id": "mapped",
        "name": "Per-page mapping",
        "isEnabled": true,
        "locations": [{
            "conditions": [{"type": "country", "value": "United States"}],
            "pageTargetingType": "specific",
            "redirectMappings": [
                {"fromUrl": "/products/", "toUrl": "https://us-store.example.com/products/"}
            ],
            "passQuery": false
        }]
    }]"#;
    let rules = rules_from_json(raw);

    let dest = resolve_redirect(
        &rules,
        &california_visitor(),
        "https://example.com/products/",
    );
    assert_eq!(dest.as_deref(), Some("https://us-store.example.com/products/"));

    let none = resolve_redirect(&rules, &california_visitor(), "https://example.com/contact/");
    assert_eq!(none, None);
}

#[test]
fn test_exclusion_vetoes_matching_rule() {
    let raw = r#"[{
        "id": "excluded",
        "name": "Redirect except checkout",
        "isEnabled": true,
        "locations": [{
            "conditions": [{"type": "country", "value": "US"}],
            "redirectUrl": "https://us.example.com",
            "exclusions": [
                {"type": "url_contains", "value": "/checkout"},
                {"type": "query_contains", "value": "noredirect=1"}
            ]
        }]
    }]"#;
    let rules = rules_from_json(raw);
    let visitor = california_visitor();

    assert!(resolve_redirect(&rules, &visitor, "https://example.com/shop/").is_some());
    assert_eq!(
        resolve_redirect(&rules, &visitor, "https://example.com/checkout/payment"),
        None
    );
    assert_eq!(
        resolve_redirect(&rules, &visitor, "https://example.com/shop/?noredirect=1"),
        None
    );
}

#[test]
fn test_potential_redirect_prefilter() {
    let raw = r#"[
        {
            "id": "mapped",
            "name": "Per-page mapping",
            "isEnabled": true,
            "locations": [{
                "conditions": [{"type": "country", "value": "FR"}],
                "pageTargetingType": "specific",
                "redirectMappings": [
                    {"fromUrl": "/products/", "toUrl": "https://fr.example.com/products/"}
                ]
            }]
        }
    ]"#;
    let rules = rules_from_json(raw);

    // Conditions are irrelevant to the pre-check; only targeting counts.
    assert!(has_potential_redirect(&rules, "https://example.com/products/"));
    assert!(!has_potential_redirect(&rules, "https://example.com/contact/"));

    let mut disabled = rules.clone();
    disabled[0].is_enabled = false;
    assert!(!has_potential_redirect(&disabled, "https://example.com/products/"));
}

#[test]
fn test_visibility_through_stored_condition_set() {
    let store = JsonFileStore::from_json_str(
        r#"{
            "conditionSets": [
                {
                    "id": "us-promo",
                    "conditions": [{"type": "country", "value": "US"}],
                    "operator": "OR",
                    "action": "show"
                },
                {
                    "id": "hide-from-eu",
                    "conditions": [{"type": "continent", "value": "Europe"}],
                    "action": "hide"
                }
            ]
        }"#,
    )
    .unwrap();
    let visitor = california_visitor();

    let promo = store.load_condition_set("us-promo").unwrap();
    assert!(evaluate_condition_set(
        &promo.conditions,
        promo.operator,
        promo.action,
        &visitor
    ));

    let eu_block = store.load_condition_set("hide-from-eu").unwrap();
    assert!(evaluate_condition_set(
        &eu_block.conditions,
        eu_block.operator,
        eu_block.action,
        &visitor
    ));

    let missing = store.load_condition_set("absent").unwrap_err();
    assert!(matches!(missing, StoreError::NotFound(_)));
}

#[test]
fn test_unparseable_request_url_never_redirects() {
    let raw = r#"[
        {
            "id": "everyone",
            "name": "Catch-all",
            "isEnabled": true,
            "locations": [{
                "conditions": [],
                "redirectUrl": "https://www.example.net"
            }]
        },
        {
            "id": "mapped",
            "name": "Per-page mapping",
            "isEnabled": true,
            "locations": [{
                "pageTargetingType": "specific",
                "redirectMappings": [
                    {"fromUrl": "/products/", "toUrl": "https://x.example.com/"}
                ]
            }]
        }
    ]"#;
    let rules = rules_from_json(raw);

    // The catch-all would match any parseable URL, so first prove it does.
    assert!(resolve_redirect(&rules, &california_visitor(), "https://example.com/").is_some());

    assert_eq!(
        resolve_redirect(&rules, &california_visitor(), ":::not-a-url"),
        None
    );
    assert!(!has_potential_redirect(&rules, ":::not-a-url"));
}
