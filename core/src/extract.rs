//! Extraction operators: URL query and request body → [`Extraction`].
//!
//! Both operators are total over their inputs: malformed URLs, JSON, and
//! form payloads degrade to "nothing extracted from this source" and never
//! surface an error.

use serde_json::Value;
use tracing::trace;
use url::form_urlencoded;
use url::Url;

use crate::flatten::flatten_json;
use crate::{BodyParser, Extraction, Parameter, TrackerRule};

/// Extract tracking data from a URL's query string.
///
/// Pairs are visited in document order. A key listed in the rule's
/// event-name fields sets the event name, else a key in the tracker-id
/// fields sets the identifier, else the pair joins the parameter list.
/// Each pair lands in exactly one of the three; for repeated keys the
/// last occurrence wins.
///
/// Returns `None` when the URL cannot be parsed at all — the caller
/// treats such a request as matching no rule.
#[must_use]
pub fn extract_from_url(url: &str, rule: &TrackerRule) -> Option<Extraction> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(error) => {
            trace!(%url, %error, "unparseable URL, treating request as unmatched");
            return None;
        }
    };

    let mut extraction = Extraction::default();
    for (key, value) in parsed.query_pairs() {
        if rule.is_event_name_field(&key) {
            extraction.event_name = value.into_owned();
        } else if rule.is_tracker_id_field(&key) {
            extraction.tracker_id = value.into_owned();
        } else {
            extraction
                .parameters
                .push(Parameter::new(key.into_owned(), value.into_owned()));
        }
    }
    Some(extraction)
}

/// Extract tracking data from a request body.
///
/// Parsers are consulted in the fixed precedence JSON-then-form, gated on
/// the rule's declared parser set:
///
/// 1. A body that parses as JSON is handled by the JSON path and never
///    falls through to form parsing, even when no field was recognized.
/// 2. Otherwise, if the rule reads form bodies, the body is parsed as
///    urlencoded pairs with the same membership logic as the URL step.
/// 3. Anything else yields an empty extraction.
#[must_use]
pub fn extract_from_body(body: &str, rule: &TrackerRule) -> Extraction {
    if rule.has_body_parser(BodyParser::Json) {
        match serde_json::from_str::<Value>(body) {
            Ok(doc) => return extract_from_json(&doc, rule),
            Err(error) => {
                trace!(rule = rule.name(), %error, "body is not JSON");
            }
        }
    }

    if rule.has_body_parser(BodyParser::Form) {
        return extract_from_form(body, rule);
    }

    Extraction::default()
}

/// JSON path: flatten, resolve the field priority lists, then collect
/// parameters.
///
/// The priority lists are resolved against the flattened map — the first
/// listed field with a non-empty value wins. Top-level scalar keys appear
/// in the flattened map under their own names, so this also resolves
/// nested identifier paths such as `context_pixel_code`.
///
/// Parameters are the flattened pairs minus every tracker-id field and
/// minus the one key consumed as the event name.
fn extract_from_json(doc: &Value, rule: &TrackerRule) -> Extraction {
    let flat = flatten_json(doc);

    let event = first_present(rule.event_name_fields(), &flat);
    let tracker = first_present(rule.tracker_id_fields(), &flat);
    let consumed_event_key = event.map(|(key, _)| key);

    let parameters = flat
        .iter()
        .filter(|(key, _)| {
            !rule.is_tracker_id_field(key) && Some(key.as_str()) != consumed_event_key
        })
        .map(|(key, value)| Parameter::new(key.clone(), value.clone()))
        .collect();

    Extraction {
        event_name: event.map(|(_, value)| value.to_owned()).unwrap_or_default(),
        tracker_id: tracker
            .map(|(_, value)| value.to_owned())
            .unwrap_or_default(),
        parameters,
    }
}

/// Form path: urlencoded pairs with URL-step membership semantics.
///
/// Parsing urlencoded text cannot fail; arbitrary bytes simply decode to
/// fewer (or stranger) pairs.
fn extract_from_form(body: &str, rule: &TrackerRule) -> Extraction {
    let mut extraction = Extraction::default();
    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        if rule.is_event_name_field(&key) {
            extraction.event_name = value.into_owned();
        } else if rule.is_tracker_id_field(&key) {
            extraction.tracker_id = value.into_owned();
        } else {
            extraction
                .parameters
                .push(Parameter::new(key.into_owned(), value.into_owned()));
        }
    }
    extraction
}

/// Resolve a field priority list against flattened pairs.
///
/// Returns the first field in `fields` present with a non-empty value.
/// When flattening produced duplicate paths the last occurrence wins,
/// matching map-overwrite semantics.
fn first_present<'a>(fields: &'a [String], flat: &'a [(String, String)]) -> Option<(&'a str, &'a str)> {
    for field in fields {
        if let Some((key, value)) = flat.iter().rev().find(|(key, _)| key == field) {
            if !value.is_empty() {
                return Some((key.as_str(), value.as_str()));
            }
        }
    }
    None
}
