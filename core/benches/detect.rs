//! Detection benchmarks — the hot path.
//!
//! Measures: catalogue lookup (hit/miss, scan cost by rule count), URL
//! query extraction, JSON body flattening + extraction, and end-to-end
//! `process` on the built-in catalogue.

use pixhound::prelude::*;
use pixhound_rules::builtin_catalogue;

fn main() {
    divan::main();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Test fixtures
// ═══════════════════════════════════════════════════════════════════════════════

fn rule(name: &str, pattern: &str) -> TrackerRule {
    TrackerRule::builder(name, EventCategory::Other)
        .url_patterns([pattern])
        .event_name_fields(["event"])
        .tracker_id_fields(["id"])
        .build()
        .unwrap()
}

const GA_URL: &str =
    "https://www.google-analytics.com/g/collect?v=2&en=page_view&tid=G-ABC123&dl=https%3A%2F%2Fexample.com&dt=Example&sr=2560x1440&ul=en-us";

const META_BODY: &str = r#"{"event":"Purchase","pixel_id":"123456","custom_data":{"value":"9.99","currency":"USD","contents":[{"id":"SKU-1","quantity":1}]}}"#;

// ═══════════════════════════════════════════════════════════════════════════════
// Catalogue lookup
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn builtin_lookup_hit(bencher: divan::Bencher) {
    let catalogue = builtin_catalogue();
    bencher.bench_local(|| catalogue.find_matching_rule(GA_URL));
}

#[divan::bench]
fn builtin_lookup_miss(bencher: divan::Bencher) {
    let catalogue = builtin_catalogue();
    // Production pattern: the overwhelming majority of page requests are
    // not trackers and scan the whole catalogue.
    bencher.bench_local(|| catalogue.find_matching_rule("https://example.com/static/app.js"));
}

#[divan::bench(args = [10, 50, 100, 500])]
fn lookup_last_rule(bencher: divan::Bencher, n: usize) {
    let mut rules: Vec<TrackerRule> = (0..n - 1)
        .map(|i| rule(&format!("Rule {i}"), &format!("tracker-{i}.test")))
        .collect();
    rules.push(rule("Target", "target.test"));
    let catalogue = Catalogue::with_rules(rules).unwrap();

    // Worst case: match at the end of the scan.
    bencher.bench_local(|| catalogue.find_matching_rule("https://target.test/collect"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Extraction
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn url_extraction(bencher: divan::Bencher) {
    let rule = rule("GA", "google-analytics.com");
    bencher.bench_local(|| pixhound::extract_from_url(GA_URL, &rule));
}

#[divan::bench]
fn json_body_extraction(bencher: divan::Bencher) {
    let rule = TrackerRule::builder("Meta", EventCategory::SocialPixel)
        .url_patterns(["facebook.com/tr"])
        .event_name_fields(["ev", "event"])
        .tracker_id_fields(["id", "pixel_id"])
        .request_body([BodyParser::Json, BodyParser::Form])
        .build()
        .unwrap();

    bencher.bench_local(|| pixhound::extract_from_body(META_BODY, &rule));
}

#[divan::bench]
fn flatten_nested_document(bencher: divan::Bencher) {
    let doc: serde_json::Value = serde_json::from_str(META_BODY).unwrap();
    bencher.bench_local(|| pixhound::flatten_json(&doc));
}

// ═══════════════════════════════════════════════════════════════════════════════
// End-to-end process
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn process_url_hit(bencher: divan::Bencher) {
    let detector = Detector::new(builtin_catalogue());
    let ctx = RequestContext::new(GA_URL, "GET");
    bencher.bench_local(|| detector.process(&ctx, |_, _, _| {}));
}

#[divan::bench]
fn process_body_hit(bencher: divan::Bencher) {
    let detector = Detector::new(builtin_catalogue());
    let ctx = RequestContext::new("https://www.facebook.com/tr/", "POST").with_body(META_BODY);
    bencher.bench_local(|| detector.process(&ctx, |_, _, _| {}));
}

#[divan::bench]
fn process_miss(bencher: divan::Bencher) {
    let detector = Detector::new(builtin_catalogue());
    let ctx = RequestContext::new("https://example.com/static/app.js", "GET");
    bencher.bench_local(|| detector.process(&ctx, |_, _, _| {}));
}
