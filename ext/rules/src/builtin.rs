//! The built-in rule table.
//!
//! One entry per recognized tracker, in priority order. Patterns are plain
//! URL substrings; field lists name where each vendor carries the event
//! name and the account/pixel identifier. The generic ad-network catch-all
//! must stay last — it shadows nothing, everything shadows it.

use pixhound::EventCategory::{Ads, Analytics, Other, Pixel, ShortVideo, SocialPixel, TagManager};
use pixhound::{BodyParser::Form, BodyParser::Json, Catalogue, CatalogueError, TrackerRule};

use crate::dictionaries::{
    ga_dictionary, gtm_dictionary, meta_dictionary, pixel_dictionary, tiktok_dictionary,
};

/// The built-in catalogue, specific vendors first, catch-all last.
///
/// # Panics
///
/// Never in practice: the table is static and validated by tests; a rule
/// that fails to build here is a programming error, not an input error.
#[must_use]
pub fn builtin_catalogue() -> Catalogue {
    try_catalogue().expect("built-in rule table is internally consistent")
}

fn try_catalogue() -> Result<Catalogue, CatalogueError> {
    Catalogue::with_rules(rules()?)
}

#[allow(clippy::too_many_lines)] // A table, not logic
fn rules() -> Result<Vec<TrackerRule>, CatalogueError> {
    Ok(vec![
        TrackerRule::builder("EventRICH.AI", Pixel)
            .description("EventRICH.AI tracking pixel detection")
            .url_patterns(["/e/", "/i/"])
            .event_name_fields(["e", "event"])
            .tracker_id_fields(["i", "visitor_id"])
            .dictionary(pixel_dictionary())
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Google Analytics", Analytics)
            .description("Google Analytics 4 (GA4) tracking detection")
            .url_patterns([
                "google-analytics.com/g/collect",
                "google-analytics.com/collect",
                "analytics.google.com",
                "ssl.google-analytics.com",
            ])
            .event_name_fields(["en", "t"])
            .tracker_id_fields(["tid", "tracking_id"])
            .dictionary(ga_dictionary())
            .build()?,
        TrackerRule::builder("Google Tag Manager", TagManager)
            .description("Google Tag Manager tracking detection")
            .url_patterns([
                "googletagmanager.com/gtm",
                "googletagmanager.com/gtag",
                "googletagmanager.com/collect",
                "googletagmanager.com",
                "gtm",
                "gtag",
            ])
            .event_name_fields(["en", "event"])
            .tracker_id_fields(["gtm", "tid"])
            .dictionary(gtm_dictionary())
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Meta/Facebook", SocialPixel)
            .description("Meta (Facebook) Pixel tracking detection")
            .url_patterns([
                "facebook.com/tr",
                "fbevents.js",
                "graph.facebook.com",
                "connect.facebook.net",
            ])
            .event_name_fields(["ev", "event", "event_name", "event_type"])
            .tracker_id_fields(["id", "pixel_id", "pixelId"])
            .dictionary(meta_dictionary())
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("TikTok", ShortVideo)
            .description("TikTok Pixel tracking detection")
            .url_patterns(["analytics.tiktok.com/api/v2/pixel"])
            .event_name_fields(["event"])
            .tracker_id_fields(["context_pixel_code"])
            .dictionary(tiktok_dictionary())
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Google Ads", Ads)
            .description("Google Ads conversion tracking detection")
            .url_patterns([
                "googleadservices.com/pagead/conversion",
                "googlesyndication.com/pagead/conversion",
            ])
            .event_name_fields(["event"])
            .tracker_id_fields(["id", "conversion_id"])
            // Shares the GA parameter dictionary; the conversion endpoint
            // speaks the same measurement-protocol dialect.
            .dictionary(ga_dictionary())
            .build()?,
        TrackerRule::builder("Microsoft Clarity", Other)
            .description("Microsoft Clarity session recording and analytics")
            .url_patterns(["clarity.ms", "m.clarity.ms", "www.clarity.ms", "scripts.clarity.ms"])
            .event_name_fields(["event", "type"])
            .tracker_id_fields(["project", "tag"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Hotjar", Other)
            .description("Hotjar session recording and heatmaps")
            .url_patterns(["hotjar.com", "static.hotjar.com", "script.hotjar.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["sv", "site_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("VWO", Other)
            .description("VWO A/B testing and optimization platform")
            .url_patterns([
                "visualwebsiteoptimizer.com",
                "dev.visualwebsiteoptimizer.com",
                "vwo.com",
                "vwo",
            ])
            .event_name_fields(["event"])
            .tracker_id_fields(["account_id", "a"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Klaviyo", Other)
            .description("Klaviyo email marketing and customer analytics")
            .url_patterns([
                "klaviyo.com",
                "www.klaviyo.com",
                "static.klaviyo.com",
                "static-tracking.klaviyo.com",
                "static-forms.klaviyo.com",
                "a.klaviyo.com",
                "static.klaviyo.com/onsite/js",
                "klaviyo.js",
                "klaviyo_subscribe.js",
                "klaviyo_subscribe.css",
                "in_app_forms",
                "signup_forms",
                "onsite-triggering",
                "forms/api",
                "client/profiles",
                "groups-targeting",
                "full-forms",
            ])
            .event_name_fields(["event", "track", "type", "data_type"])
            .tracker_id_fields(["company_id", "token", "cb", "data"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Amplitude", Analytics)
            .description("Amplitude product analytics")
            .url_patterns([
                "amplitude.com",
                "cdn.amplitude.com",
                "api.amplitude.com",
                "api2.amplitude.com",
            ])
            .event_name_fields(["event_type", "event"])
            .tracker_id_fields(["api_key", "user_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Twitter/X Ads", SocialPixel)
            .description("Twitter/X advertising pixel")
            .url_patterns(["ads-twitter.com", "static.ads-twitter.com", "analytics.twitter.com"])
            .event_name_fields(["event", "tw_evt"])
            .tracker_id_fields(["txn_id", "pixel_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Pinterest", SocialPixel)
            .description("Pinterest conversion tracking")
            .url_patterns(["pinit.min.js", "pinterest.com/ct", "analytics.pinterest.com"])
            .event_name_fields(["event", "em"])
            .tracker_id_fields(["tid", "pin_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Taboola", Ads)
            .description("Taboola content recommendation and advertising")
            .url_patterns(["taboola.com", "cdn.taboola.com", "trc.taboola.com"])
            .event_name_fields(["name", "event", "en"])
            .tracker_id_fields(["id", "user-id", "tim", "pubit"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Outbrain", Ads)
            .description("Outbrain content recommendation and advertising")
            .url_patterns(["outbrain.com", "amplify.outbrain.com", "widgets.outbrain.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["mrkrid", "publisher_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Quantcast", Ads)
            .description("Quantcast audience measurement and advertising")
            .url_patterns(["quantserve.com", "secure.quantserve.com", "rules.quantcount.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["p", "site_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Affirm", Other)
            .description("Affirm payment financing analytics")
            .url_patterns(["affirm.com", "cdn1.affirm.com", "api.affirm.com"])
            .event_name_fields(["event", "type"])
            .tracker_id_fields(["public_api_key", "merchant_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("ShareASale", Ads)
            .description("ShareASale affiliate marketing tracking")
            .url_patterns(["shareasale.com", "static.shareasale.com", "www.dwin1.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["sasmid", "ssmtid", "merchantID"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("TriplePixel", Other)
            .description("TriplePixel marketing analytics platform")
            .url_patterns(["config-security.com", "api.config-security.com", "TriplePixel"])
            .event_name_fields(["action", "event"])
            .tracker_id_fields(["id", "host"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("LeadsRX", Analytics)
            .description("LeadsRX attribution and analytics")
            .url_patterns(["leadsrx.com", "app.leadsrx.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["_lab", "acctTag"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("The Offer", Other)
            .description("The Offer conversion tracking")
            .url_patterns(["secureoffer.io", "api.secureoffer.io", "theoffer.io"])
            .event_name_fields(["e", "event"])
            .tracker_id_fields(["s", "config"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Mountain", Ads)
            .description("Mountain performance marketing analytics")
            .url_patterns(["mountain.com", "dx.mountain.com", "px.mountain.com"])
            .event_name_fields(["event", "evt"])
            .tracker_id_fields(["shaid", "dxver", "ga_tracking_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Shopify Analytics", Analytics)
            .description("Shopify native analytics and tracking")
            .url_patterns([
                "monorail-edge.shopifysvc.com",
                "trekkie.storefront",
                "ShopifyAnalytics",
            ])
            .event_name_fields(["event", "schema_id"])
            .tracker_id_fields(["shop_id", "theme_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Rebuy Engine", Other)
            .description("Rebuy personalization and upsell engine")
            .url_patterns(["rebuyengine.com", "cdn.rebuyengine.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["shop", "rebuy_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Attentive", Other)
            .description("Attentive SMS and email marketing")
            .url_patterns(["attn.tv", "cdn.attn.tv", ".attn.tv"])
            .event_name_fields(["event"])
            .tracker_id_fields(["dtag", "source", "id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Curalate", Other)
            .description("Curalate visual commerce platform")
            .url_patterns(["curalate.com", "cdn.curalate.com"])
            .event_name_fields(["event", "pixel"])
            .tracker_id_fields(["sitename", "crl8"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("USBrowserSpeed", Other)
            .description("USBrowserSpeed tracking service")
            .url_patterns(["usbrowserspeed.com", "a.usbrowserspeed.com"])
            .event_name_fields(["purpose"])
            .tracker_id_fields(["pid", "client_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("CookieYes", Other)
            .description("CookieYes GDPR consent management")
            .url_patterns(["cookieyes.com", "cdn-cookieyes.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["client_data", "config"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Snapchat Pixel", SocialPixel)
            .description("Snapchat Ads conversion tracking")
            .url_patterns(["tr.snapchat.com", "sc-static.net", "snapchat.com/tr"])
            .event_name_fields(["event", "et"])
            .tracker_id_fields(["pixel_id", "u"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("LinkedIn Insight Tag", SocialPixel)
            .description("LinkedIn Ads conversion tracking")
            .url_patterns([
                "linkedin.com/li/track",
                "snap.licdn.com",
                "www.linkedin.com/psettings/guest-controls/retargeting-opt-out",
            ])
            .event_name_fields(["event", "conversionType"])
            .tracker_id_fields(["partnerId", "conversionId"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Reddit Pixel", SocialPixel)
            .description("Reddit Ads conversion tracking")
            .url_patterns(["rdt.li", "redditstatic.com", "reddit.com/api/v2/pixel"])
            .event_name_fields(["event", "action"])
            .tracker_id_fields(["advertiser_id", "pixel_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Google Optimize", Other)
            .description("Google Optimize A/B testing platform")
            .url_patterns(["optimize.google.com", "googleoptimize.com", "gtm/optimize"])
            .event_name_fields(["event"])
            .tracker_id_fields(["container_id", "experiment_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Segment", Analytics)
            .description("Segment customer data platform")
            .url_patterns(["api.segment.io", "cdn.segment.com", "segment.com/v1"])
            .event_name_fields(["event", "type"])
            .tracker_id_fields(["writeKey", "userId"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Mixpanel", Analytics)
            .description("Mixpanel product analytics")
            .url_patterns(["api.mixpanel.com", "cdn.mxpnl.com", "mixpanel.com/track"])
            .event_name_fields(["event"])
            .tracker_id_fields(["token", "distinct_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Heap Analytics", Analytics)
            .description("Heap digital insights platform")
            .url_patterns(["heapanalytics.com", "cdn.heapanalytics.com"])
            .event_name_fields(["event", "k"])
            .tracker_id_fields(["h", "app_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Adobe Analytics", Analytics)
            .description("Adobe Analytics (formerly Omniture)")
            .url_patterns(["adobe.com/b/ss", "omtrdc.net", "2o7.net", "demdex.net"])
            .event_name_fields(["events", "pe"])
            .tracker_id_fields(["rsid", "vid"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Bing Ads", Ads)
            .description("Microsoft Bing Ads conversion tracking")
            .url_patterns(["bat.bing.com", "bing.com/msads", "microsoft.com/msads"])
            .event_name_fields(["event", "ea", "evt"])
            .tracker_id_fields(["ti", "tag_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Intercom", Other)
            .description("Intercom customer messaging platform")
            .url_patterns(["api.intercom.io", "js.intercomcdn.com", "intercom.com/track"])
            .event_name_fields(["event_name", "type"])
            .tracker_id_fields(["app_id", "user_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Drift", Other)
            .description("Drift conversational marketing platform")
            .url_patterns(["driftt.com", "js.driftt.com", "api.drift.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["org_id", "end_user_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Zendesk Chat", Other)
            .description("Zendesk Chat customer support")
            .url_patterns(["zopim.com", "v2.zopim.com", "zendesk.com/api"])
            .event_name_fields(["type", "event"])
            .tracker_id_fields(["account_key", "session_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Mailchimp", Other)
            .description("Mailchimp email marketing analytics")
            .url_patterns(["mailchimp.com/track", "chimpstatic.com", "list-manage.com"])
            .event_name_fields(["goal", "event"])
            .tracker_id_fields(["u", "id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("HubSpot", Other)
            .description("HubSpot marketing automation")
            .url_patterns(["hs-analytics.net", "hubspot.com/api", "hs-scripts.com"])
            .event_name_fields(["_n", "event"])
            .tracker_id_fields(["portalId", "utk"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Pardot", Other)
            .description("Salesforce Pardot B2B marketing automation")
            .url_patterns(["pardot.com", "pi.pardot.com"])
            .event_name_fields(["event", "activity"])
            .tracker_id_fields(["account_id", "visitor_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Marketo", Other)
            .description("Adobe Marketo marketing automation")
            .url_patterns(["marketo.net", "mktoresp.com", "marketo.com/api"])
            .event_name_fields(["event", "activity_type"])
            .tracker_id_fields(["leadId", "munchkinId"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Salesforce DMP", Other)
            .description("Salesforce Data Management Platform")
            .url_patterns(["krxd.net", "salesforce.com/audience", "sfmc.co"])
            .event_name_fields(["event", "type"])
            .tracker_id_fields(["site_id", "user_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Eloqua", Other)
            .description("Oracle Eloqua marketing automation")
            .url_patterns(["eloqua.com", "elqtrk.com", "oracle.com/cx/marketing"])
            .event_name_fields(["event", "pps"])
            .tracker_id_fields(["siteId", "visitorId"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Crazy Egg", Other)
            .description("Crazy Egg heatmap and A/B testing")
            .url_patterns(["crazyegg.com", "script.crazyegg.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["CE_SNAPSHOT_NAME", "account_number"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Lucky Orange", Other)
            .description("Lucky Orange session recording and analytics")
            .url_patterns(["luckyorange.com", "luckyorange.net", "settings.luckyorange.net"])
            .event_name_fields(["event"])
            .tracker_id_fields(["site_id", "session_id", "d"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("FullStory", Other)
            .description("FullStory digital experience platform")
            .url_patterns(["fullstory.com", "fs.org"])
            .event_name_fields(["event", "eventName"])
            .tracker_id_fields(["org", "uid"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("LogRocket", Other)
            .description("LogRocket session replay and monitoring")
            .url_patterns(["logrocket.io", "lr-ingest.com"])
            .event_name_fields(["event", "type"])
            .tracker_id_fields(["appID", "sessionID"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Smartlook", Other)
            .description("Smartlook visitor recordings and analytics")
            .url_patterns(["smartlook.com", "smartlook.cloud"])
            .event_name_fields(["event"])
            .tracker_id_fields(["key", "project_key"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Mouseflow", Other)
            .description("Mouseflow session replay and heatmaps")
            .url_patterns(["mouseflow.com", "cdn-test.mouseflow.com"])
            .event_name_fields(["event"])
            .tracker_id_fields(["website_id", "session_id"])
            .request_body([Json])
            .build()?,
        TrackerRule::builder("Yandex Metrica", Analytics)
            .description("Yandex Metrica web analytics")
            .url_patterns(["mc.yandex.ru", "metrica.yandex.com"])
            .event_name_fields(["page-url", "event"])
            .tracker_id_fields(["browser-info", "counter-id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Baidu Analytics", Analytics)
            .description("Baidu web analytics")
            .url_patterns(["hm.baidu.com", "tongji.baidu.com"])
            .event_name_fields(["et", "event"])
            .tracker_id_fields(["si", "site_id"])
            .request_body([Json, Form])
            .build()?,
        TrackerRule::builder("Naver Analytics", Analytics)
            .description("Naver web analytics (South Korea)")
            .url_patterns(["wcs.naver.net", "naver.com/wcslog"])
            .event_name_fields(["event", "action"])
            .tracker_id_fields(["m", "wlog_id"])
            .request_body([Json, Form])
            .build()?,
        // Keep last: broad ad-network domains that would shadow every
        // vendor-specific rule above.
        TrackerRule::builder("Other Trackers", Other)
            .description("Generic detection for other advertising and tracking services")
            .url_patterns([
                "doubleclick.net",
                "googlesyndication.com",
                "amazon-adsystem.com",
                "bing.com/msads",
                "googleadservices.com",
                "googletagservices.com",
                "google.com/pagead",
                "adsystem.amazon-adsystem.com",
            ])
            .event_name_fields(["event", "en"])
            .tracker_id_fields(["id", "tracker_id"])
            .request_body([Json, Form])
            .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_builds_and_validates() {
        let catalogue = try_catalogue().expect("table must build");
        assert!(catalogue.len() > 50);
    }

    #[test]
    fn catch_all_is_last() {
        let catalogue = builtin_catalogue();
        let snapshot = catalogue.snapshot();
        assert_eq!(snapshot.last().unwrap().name(), "Other Trackers");
    }
}
