//! Extraction output types: `Parameter`, `Extraction`, `ExtractedEvent`.
//!
//! `Extraction` is the partial result of reading one source (URL query or
//! request body); `ExtractedEvent` is the merged, caller-facing result.
//! Empty strings mean "nothing found" in the partial form — mirroring the
//! wire, where a field can be present but empty and still carries no
//! signal.

use crate::UNKNOWN_EVENT;

/// One extracted `(name, value)` pair, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Raw field name as seen on the wire (or the flattened path for
    /// nested JSON, e.g. `context_pixel_code`).
    pub name: String,
    /// Stringified value.
    pub value: String,
}

impl Parameter {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Partial extraction from a single source.
///
/// `event_name` and `tracker_id` are empty until a matching field with a
/// non-empty value is seen. `parameters` collects every other pair in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub(crate) event_name: String,
    pub(crate) tracker_id: String,
    pub(crate) parameters: Vec<Parameter>,
}

impl Extraction {
    /// The event name found in this source, empty if none.
    #[must_use]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// The tracker identifier found in this source, empty if none.
    #[must_use]
    pub fn tracker_id(&self) -> &str {
        &self.tracker_id
    }

    /// The leftover parameters, in document order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// True when this source yielded nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event_name.is_empty() && self.tracker_id.is_empty() && self.parameters.is_empty()
    }
}

/// The normalized event produced by one successful detection.
///
/// Built by [`ExtractedEvent::merged`]; `event_name` falls back to the
/// [`UNKNOWN_EVENT`] sentinel and `tracker_id` to the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEvent {
    event_name: String,
    tracker_id: String,
    parameters: Vec<Parameter>,
}

impl ExtractedEvent {
    /// Merge a URL-query extraction with a body extraction.
    ///
    /// The body wins for `event_name` and `tracker_id` — POST bodies carry
    /// the authoritative payload, while query parameters on the same
    /// request are often redundant or truncated. Parameters are kept from
    /// both sources in full: URL parameters first, body parameters after,
    /// with no cross-source de-duplication.
    #[must_use]
    pub fn merged(url_part: Extraction, body_part: Extraction) -> Self {
        let event_name = first_non_empty(body_part.event_name, url_part.event_name)
            .unwrap_or_else(|| UNKNOWN_EVENT.to_owned());
        let tracker_id =
            first_non_empty(body_part.tracker_id, url_part.tracker_id).unwrap_or_default();

        let mut parameters = url_part.parameters;
        parameters.extend(body_part.parameters);

        Self {
            event_name,
            tracker_id,
            parameters,
        }
    }

    /// The event name, or [`UNKNOWN_EVENT`] when no source supplied one.
    #[must_use]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// The tracker identifier, empty when no source supplied one.
    #[must_use]
    pub fn tracker_id(&self) -> &str {
        &self.tracker_id
    }

    /// All parameters: URL-sourced first, then body-sourced.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Whether this event carries any meaningful signal.
    ///
    /// A rule match whose extraction produced no parameters, no tracker
    /// identifier, and no real event name is treated as a non-detection.
    #[must_use]
    pub fn has_signal(&self) -> bool {
        !self.parameters.is_empty()
            || !self.tracker_id.is_empty()
            || (!self.event_name.is_empty() && self.event_name != UNKNOWN_EVENT)
    }
}

fn first_non_empty(preferred: String, fallback: String) -> Option<String> {
    if !preferred.is_empty() {
        Some(preferred)
    } else if !fallback.is_empty() {
        Some(fallback)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extraction(event: &str, id: &str, params: &[(&str, &str)]) -> Extraction {
        Extraction {
            event_name: event.to_owned(),
            tracker_id: id.to_owned(),
            parameters: params.iter().map(|(n, v)| Parameter::new(*n, *v)).collect(),
        }
    }

    #[test]
    fn body_wins_the_merge() {
        let url = extraction("url_event", "url_id", &[("a", "1")]);
        let body = extraction("body_event", "body_id", &[("b", "2")]);

        let event = ExtractedEvent::merged(url, body);
        assert_eq!(event.event_name(), "body_event");
        assert_eq!(event.tracker_id(), "body_id");
        assert_eq!(
            event.parameters(),
            &[Parameter::new("a", "1"), Parameter::new("b", "2")]
        );
    }

    #[test]
    fn url_fills_in_when_body_is_silent() {
        let url = extraction("url_event", "url_id", &[]);
        let event = ExtractedEvent::merged(url, Extraction::default());
        assert_eq!(event.event_name(), "url_event");
        assert_eq!(event.tracker_id(), "url_id");
    }

    #[test]
    fn defaults_apply_when_both_sources_are_silent() {
        let event = ExtractedEvent::merged(Extraction::default(), Extraction::default());
        assert_eq!(event.event_name(), crate::UNKNOWN_EVENT);
        assert_eq!(event.tracker_id(), "");
        assert!(!event.has_signal());
    }

    #[test]
    fn signal_detection() {
        // Sentinel name alone is not signal.
        let none = ExtractedEvent::merged(Extraction::default(), Extraction::default());
        assert!(!none.has_signal());

        // A real event name is.
        let named = ExtractedEvent::merged(extraction("view", "", &[]), Extraction::default());
        assert!(named.has_signal());

        // So is a tracker id alone, or parameters alone.
        let id_only = ExtractedEvent::merged(extraction("", "T-1", &[]), Extraction::default());
        assert!(id_only.has_signal());

        let params_only =
            ExtractedEvent::merged(extraction("", "", &[("k", "v")]), Extraction::default());
        assert!(params_only.has_signal());
    }

    #[test]
    fn overlapping_keys_are_kept_from_both_sources() {
        let url = extraction("", "", &[("k", "from_url")]);
        let body = extraction("", "", &[("k", "from_body")]);
        let event = ExtractedEvent::merged(url, body);
        assert_eq!(
            event.parameters(),
            &[
                Parameter::new("k", "from_url"),
                Parameter::new("k", "from_body")
            ]
        );
    }
}
