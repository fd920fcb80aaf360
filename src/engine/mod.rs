//! The decision engine: pure, synchronous functions over caller-supplied
//! rules and a resolved location. No I/O, no shared state.

mod attrs;
mod conditions;
mod redirect;
mod url;

pub use attrs::parse_condition_attrs;
pub use conditions::{condition_matches, conditions_match, evaluate_condition_set};
pub use redirect::{has_potential_redirect, resolve_redirect};
pub use url::{build_redirect_url, url_matches_pattern, RequestUrl};
