//! Request URL parsing, pattern matching, and redirect URL construction

use tracing::debug;
use url::Url;

/// The parts of the current request URL the resolver cares about.
///
/// `parse` returns `None` for anything without a scheme and host. The
/// resolver treats that as "no redirect" rather than failing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    /// Path component, e.g. "/products/"
    pub path: String,
    /// Raw query string without the leading '?'
    pub query: String,
    /// Fragment without the leading '#'
    pub fragment: String,
    /// scheme://host[:port]/path, the request URL stripped of query and fragment
    pub without_query: String,
}

impl RequestUrl {
    pub fn parse(raw: &str) -> Option<Self> {
        let parsed = match Url::parse(raw.trim()) {
            Ok(url) if url.has_host() => url,
            Ok(_) | Err(_) => {
                debug!(url = raw, "request URL not parseable, skipping evaluation");
                return None;
            }
        };

        let path = parsed.path().to_string();
        let mut without_query = format!(
            "{}://{}",
            parsed.scheme(),
            parsed.host_str().unwrap_or_default()
        );
        if let Some(port) = parsed.port() {
            without_query.push(':');
            without_query.push_str(&port.to_string());
        }
        without_query.push_str(&path);

        Some(Self {
            path,
            query: parsed.query().unwrap_or_default().to_string(),
            fragment: parsed.fragment().unwrap_or_default().to_string(),
            without_query,
        })
    }
}

/// Test a request against a configured page pattern.
///
/// Absolute patterns (`http://` or `https://`) must equal the full request
/// URL without its query; anything else is a path pattern and must equal the
/// request path exactly. No wildcards, no trailing-slash normalization.
pub fn url_matches_pattern(request: &RequestUrl, pattern: &str) -> bool {
    let pattern = pattern.trim();
    if pattern.starts_with("http://") || pattern.starts_with("https://") {
        request.without_query == pattern
    } else {
        request.path == pattern
    }
}

/// Compose the destination URL from a base and the request's parts.
///
/// The path is appended only when `pass_path` is set (the resolver passes
/// false for specific-page mappings, whose destinations are used verbatim),
/// with exactly one `/` at the join point. The query rides along under
/// `pass_query`; the fragment is always forwarded unless the base already
/// carries one.
pub fn build_redirect_url(
    base: &str,
    request: &RequestUrl,
    pass_path: bool,
    pass_query: bool,
) -> String {
    let mut out = base.trim().to_string();

    if pass_path && !request.path.is_empty() {
        if request.path == "/" {
            if !out.ends_with('/') {
                out.push('/');
            }
        } else {
            match (out.ends_with('/'), request.path.starts_with('/')) {
                (true, true) => {
                    out.pop();
                    out.push_str(&request.path);
                }
                (false, false) => {
                    out.push('/');
                    out.push_str(&request.path);
                }
                _ => out.push_str(&request.path),
            }
        }
    }

    if pass_query && !request.query.is_empty() {
        out.push(if out.contains('?') { '&' } else { '?' });
        out.push_str(&request.query);
    }

    if !request.fragment.is_empty() && !out.contains('#') {
        out.push('#');
        out.push_str(&request.fragment);
    }

    out
}
