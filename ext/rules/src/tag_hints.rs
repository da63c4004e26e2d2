//! Tag-manager payload hints.
//!
//! Tag Manager containers sometimes deliver their event stream through
//! generic ad-network endpoints (DoubleClick, AdSense). By URL alone those
//! requests fall into the catch-all rule; the body, however, carries
//! unmistakable container markers. Callers feeding intercepted requests to
//! the detector can use these hints to reroute such requests to the Tag
//! Manager rule before processing.
//!
//! # Example
//!
//! ```
//! use pixhound::{Detector, RequestContext};
//! use pixhound_rules::{builtin_catalogue, tag_hints};
//!
//! let detector = Detector::new(builtin_catalogue());
//! let url = "https://stats.g.doubleclick.net/j/collect";
//! let body = r#"{"gtm":"45je4580","en":"scroll"}"#;
//!
//! let effective_url = if tag_hints::should_reroute(url, body) {
//!     tag_hints::TAG_MANAGER_REROUTE_URL
//! } else {
//!     url
//! };
//!
//! let ctx = RequestContext::new(effective_url, "POST").with_body(body);
//! let matched = detector.process(&ctx, |rule, _, _| {
//!     assert_eq!(rule.name(), tag_hints::TAG_MANAGER_RULE);
//! });
//! assert!(matched);
//! ```

use serde_json::Value;

/// Name of the built-in rule tag-manager traffic should be processed under.
pub const TAG_MANAGER_RULE: &str = "Google Tag Manager";

/// Substitute URL that routes a request to the Tag Manager rule.
///
/// Deliberately bare of query parameters: the rerouted request's payload
/// lives in its body, and the original ad-network query string is noise.
pub const TAG_MANAGER_REROUTE_URL: &str = "https://www.googletagmanager.com/gtm";

/// Ad-network hosts known to carry tag-manager event streams.
const REROUTE_HOSTS: &[&str] = &["doubleclick.net", "googlesyndication.com"];

/// True when `body` is a JSON document carrying tag-manager container
/// markers.
///
/// Markers: a meaningful `gtm`, `gtag`, or `tag_exp` key, `guid == "ON"`,
/// `_tu == "JA"`, or `pscdl == "noapi"`. Non-JSON bodies carry no markers.
#[must_use]
pub fn is_tag_manager_payload(body: &str) -> bool {
    let Ok(Value::Object(doc)) = serde_json::from_str::<Value>(body) else {
        return false;
    };

    doc.get("gtm").is_some_and(meaningful)
        || doc.get("gtag").is_some_and(meaningful)
        || doc.get("tag_exp").is_some_and(meaningful)
        || doc.get("guid").and_then(Value::as_str) == Some("ON")
        || doc.get("_tu").and_then(Value::as_str) == Some("JA")
        || doc.get("pscdl").and_then(Value::as_str) == Some("noapi")
}

/// True when a request to `url` with `body` should be processed under the
/// Tag Manager rule instead of the ad-network catch-all.
#[must_use]
pub fn should_reroute(url: &str, body: &str) -> bool {
    REROUTE_HOSTS.iter().any(|host| url.contains(host)) && is_tag_manager_payload(body)
}

/// A value that counts as a container marker: present, non-null, non-empty.
fn meaningful(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}
