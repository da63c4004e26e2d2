//! `Detector` — the detection engine entry point.
//!
//! One call per intercepted request: find the rule, extract from URL and
//! body, merge, and hand anything meaningful to the caller's sink.

use tracing::debug;

use crate::{extract, Catalogue, ExtractedEvent, Extraction, RequestContext, TrackerRule};

/// Runs requests through a [`Catalogue`] and reports detections to a sink.
///
/// The detector holds no mutable state; [`process`](Self::process) takes
/// `&self` and is safe to call concurrently from any number of threads.
/// Catalogue registration through [`Catalogue::add_rule`] is already
/// serialized against lookups, so no further synchronization is needed.
///
/// # Example
///
/// ```
/// use pixhound::prelude::*;
///
/// let rule = TrackerRule::builder("TikTok", EventCategory::ShortVideo)
///     .url_patterns(["analytics.tiktok.com/api/v2/pixel"])
///     .event_name_fields(["event"])
///     .tracker_id_fields(["context_pixel_code"])
///     .request_body([BodyParser::Json])
///     .build()
///     .unwrap();
/// let detector = Detector::new(Catalogue::with_rules(vec![rule]).unwrap());
///
/// let ctx = RequestContext::new("https://analytics.tiktok.com/api/v2/pixel", "POST")
///     .with_body(r#"{"event":"ViewContent","context":{"pixel_code":"XYZ"}}"#)
///     .with_token("tab-3");
///
/// let matched = detector.process(&ctx, |rule, event, token| {
///     assert_eq!(rule.name(), "TikTok");
///     assert_eq!(event.tracker_id(), "XYZ");
///     assert_eq!(*token, "tab-3");
/// });
/// assert!(matched);
/// ```
#[derive(Debug)]
pub struct Detector {
    catalogue: Catalogue,
}

impl Detector {
    /// Create a detector over the given catalogue.
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        Self { catalogue }
    }

    /// The underlying catalogue (e.g. for runtime rule registration).
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Process one intercepted request.
    ///
    /// Returns `true` and invokes `on_detected` exactly once — synchronously,
    /// with the matched rule, the merged event, and the caller's correlation
    /// token — when a rule matched and extraction produced meaningful
    /// signal. Returns `false` otherwise:
    ///
    /// - no rule pattern matched the URL,
    /// - the URL could not be parsed (the request is treated as unmatched),
    /// - or the matched rule extracted nothing (no parameters, no tracker
    ///   id, no real event name).
    ///
    /// Never panics and never errors on request content; malformed bodies
    /// degrade to empty extraction. Delivery is at-least-once per observed
    /// request attempt — de-duplication of retried requests is the
    /// caller's concern.
    pub fn process<T, F>(&self, ctx: &RequestContext<T>, mut on_detected: F) -> bool
    where
        F: FnMut(&TrackerRule, ExtractedEvent, &T),
    {
        let Some(rule) = self.catalogue.find_matching_rule(ctx.url()) else {
            return false;
        };

        let Some(url_part) = extract::extract_from_url(ctx.url(), &rule) else {
            debug!(rule = rule.name(), url = ctx.url(), "unparseable URL, skipping");
            return false;
        };

        let body_part = match ctx.body() {
            Some(body) if rule.supports_request_body() => {
                extract::extract_from_body(body, &rule)
            }
            _ => Extraction::default(),
        };

        let event = ExtractedEvent::merged(url_part, body_part);
        if !event.has_signal() {
            return false;
        }

        debug!(
            rule = rule.name(),
            event = event.event_name(),
            tracker_id = event.tracker_id(),
            parameters = event.parameters().len(),
            "tracker detected"
        );
        on_detected(&rule, event, ctx.token());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BodyParser, EventCategory, TrackerRule, UNKNOWN_EVENT};

    fn detector() -> Detector {
        let rules = vec![
            TrackerRule::builder("Google Analytics", EventCategory::Analytics)
                .url_patterns(["google-analytics.com/g/collect", "google-analytics.com/collect"])
                .event_name_fields(["en", "t"])
                .tracker_id_fields(["tid", "tracking_id"])
                .build()
                .unwrap(),
            TrackerRule::builder("Meta/Facebook", EventCategory::SocialPixel)
                .url_patterns(["facebook.com/tr", "connect.facebook.net"])
                .event_name_fields(["ev", "event", "event_name", "event_type"])
                .tracker_id_fields(["id", "pixel_id", "pixelId"])
                .request_body([BodyParser::Json, BodyParser::Form])
                .build()
                .unwrap(),
        ];
        Detector::new(Catalogue::with_rules(rules).unwrap())
    }

    #[test]
    fn url_only_hit() {
        let detector = detector();
        let ctx = RequestContext::new(
            "https://www.google-analytics.com/g/collect?en=page_view&tid=G-ABC123&dl=https%3A%2F%2Fexample.com",
            "GET",
        );

        let mut calls = 0;
        let matched = detector.process(&ctx, |rule, event, _| {
            calls += 1;
            assert_eq!(rule.name(), "Google Analytics");
            assert_eq!(event.event_name(), "page_view");
            assert_eq!(event.tracker_id(), "G-ABC123");
            assert_eq!(event.parameters().len(), 1);
            assert_eq!(event.parameters()[0].value, "https://example.com");
        });

        assert!(matched);
        assert_eq!(calls, 1);
    }

    #[test]
    fn body_overrides_url_in_merge() {
        let detector = detector();
        let ctx = RequestContext::new("https://www.facebook.com/tr/?ev=PageView&id=111", "POST")
            .with_body(r#"{"event":"Purchase","pixel_id":"222"}"#);

        let matched = detector.process(&ctx, |_, event, _| {
            assert_eq!(event.event_name(), "Purchase");
            assert_eq!(event.tracker_id(), "222");
        });
        assert!(matched);
    }

    #[test]
    fn unmatched_url_returns_false_without_sink() {
        let detector = detector();
        let ctx = RequestContext::new("https://example.com/static/app.js", "GET");

        let mut called = false;
        let matched = detector.process(&ctx, |_, _, _| called = true);

        assert!(!matched);
        assert!(!called);
    }

    #[test]
    fn match_with_zero_signal_returns_false() {
        let detector = detector();
        // Pattern hit, but no query string and no body.
        let ctx = RequestContext::new("https://www.facebook.com/tr", "GET");

        let mut called = false;
        assert!(!detector.process(&ctx, |_, _, _| called = true));
        assert!(!called);
    }

    #[test]
    fn sentinel_event_name_is_not_signal_but_parameters_are() {
        let detector = detector();
        // No event field, but a leftover parameter: still a detection,
        // with the sentinel name.
        let ctx = RequestContext::new("https://www.facebook.com/tr?cb=12345", "GET");

        let matched = detector.process(&ctx, |_, event, _| {
            assert_eq!(event.event_name(), UNKNOWN_EVENT);
        });
        assert!(matched);
    }

    #[test]
    fn body_ignored_when_rule_does_not_support_it() {
        let detector = detector();
        // GA rule has no body parsers; the JSON body must not contribute.
        let ctx = RequestContext::new(
            "https://www.google-analytics.com/collect?en=view",
            "POST",
        )
        .with_body(r#"{"en":"from_body"}"#);

        detector.process(&ctx, |_, event, _| {
            assert_eq!(event.event_name(), "view");
            assert!(event.parameters().is_empty());
        });
    }

    #[test]
    fn token_is_passed_through_untouched() {
        let detector = detector();
        let ctx = RequestContext::new("https://www.facebook.com/tr?cb=1", "GET").with_token(77u64);

        detector.process(&ctx, |_, _, token| {
            assert_eq!(*token, 77);
        });
    }

    #[test]
    fn runtime_registration_extends_detection() {
        let detector = detector();
        assert!(!detector.process(
            &RequestContext::new("https://pixel.example-new.test/p?e=hi", "GET"),
            |_, _, _| {},
        ));

        detector
            .catalogue()
            .add_rule(
                TrackerRule::builder("New Tracker", EventCategory::Pixel)
                    .url_patterns(["pixel.example-new.test"])
                    .event_name_fields(["e"])
                    .build()
                    .unwrap(),
            )
            .unwrap();

        let matched = detector.process(
            &RequestContext::new("https://pixel.example-new.test/p?e=hi", "GET"),
            |rule, event, _| {
                assert_eq!(rule.name(), "New Tracker");
                assert_eq!(event.event_name(), "hi");
            },
        );
        assert!(matched);
    }
}
