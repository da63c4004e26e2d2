//! pixhound-rules: the built-in tracker catalogue.
//!
//! This crate is pure domain data: the production rule table for the
//! trackers pixhound recognizes out of the box, the parameter dictionaries
//! used for display grouping on the majors, and the tag-manager payload
//! hints for requests that smuggle container events through generic
//! ad-network endpoints.
//!
//! # Example
//!
//! ```
//! use pixhound::{Detector, RequestContext};
//! use pixhound_rules::builtin_catalogue;
//!
//! let detector = Detector::new(builtin_catalogue());
//! let ctx = RequestContext::new(
//!     "https://www.google-analytics.com/g/collect?en=page_view&tid=G-ABC123",
//!     "GET",
//! );
//!
//! let matched = detector.process(&ctx, |rule, event, _| {
//!     assert_eq!(rule.name(), "Google Analytics");
//!     assert_eq!(event.event_name(), "page_view");
//! });
//! assert!(matched);
//! ```
//!
//! # Ordering
//!
//! The table is a priority list: specific vendor rules first, the generic
//! ad-network catch-all last. [`builtin_catalogue`] preserves this order,
//! and rules registered at runtime via
//! [`Catalogue::add_rule`](pixhound::Catalogue::add_rule) append after the
//! catch-all.

mod builtin;
mod dictionaries;
pub mod tag_hints;

pub use builtin::builtin_catalogue;
pub use dictionaries::{
    ga_dictionary, gtm_dictionary, meta_dictionary, pixel_dictionary, tiktok_dictionary,
};
