//! End-to-end rendering through the public helper API.

use gaq_core::{AnalyticsConfig, GaqError};
use gaq_web_sdk::{EventQueue, InitOptions, TrackingEvent, Transaction, ViewHelpers};

fn helpers() -> ViewHelpers {
    ViewHelpers::new(AnalyticsConfig::with_tracker("UA-5555-1"))
}

fn calls(html: &str) -> Vec<String> {
    html.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("_gaq.push("))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_init_renders_exactly_three_bootstrap_calls() {
    let html = helpers()
        .analytics_init(Vec::new(), &InitOptions::default())
        .unwrap();
    let calls = calls(html.as_str());
    assert_eq!(calls.len(), 3);
    assert!(calls[0].contains("\"_setAccount\",\"UA-5555-1\""));
    assert!(calls[1].contains("\"_trackPageview\""));
    assert!(calls[2].contains("\"_trackPageLoadTime\""));
}

#[test]
fn test_local_init_appends_two_calls_after_caller_events() {
    let events = vec![
        TrackingEvent::set_custom_var(1, "Plan", "Pro", None).unwrap(),
        TrackingEvent::track_event("Signup", "Complete", None, Some(1)).unwrap(),
    ];
    let html = helpers()
        .analytics_init(events, &InitOptions::local(true))
        .unwrap();
    let calls = calls(html.as_str());
    assert_eq!(calls.len(), 7);
    assert_eq!(calls[3], r#"_gaq.push(["_setCustomVar",1,"Plan","Pro"]);"#);
    assert_eq!(
        calls[4],
        r#"_gaq.push(["_trackEvent","Signup","Complete","",1]);"#
    );
    assert_eq!(calls[5], r#"_gaq.push(["_setDomainName","none"]);"#);
    assert_eq!(calls[6], r#"_gaq.push(["_setAllowLinker",true]);"#);
}

#[test]
fn test_ecommerce_flow() {
    let helpers = helpers();

    let transaction = helpers
        .analytics_add_transaction(
            "1234",
            "Acme Clothing",
            "11.99",
            "1.29",
            "5",
            "San Jose",
            "California",
            "USA",
        )
        .unwrap();
    assert_eq!(
        calls(transaction.as_str()),
        [r#"_gaq.push(["_addTrans","1234","Acme Clothing","11.99","1.29","5","San Jose","California","USA"]);"#]
    );

    let item = helpers
        .analytics_add_item("1234", "DD44", "T-Shirt", "Green Medium", "11.99", "1")
        .unwrap();
    assert_eq!(
        calls(item.as_str()),
        [r#"_gaq.push(["_addItem","1234","DD44","T-Shirt","Green Medium","11.99","1"]);"#]
    );

    let submit = helpers.analytics_track_transaction().unwrap();
    assert_eq!(calls(submit.as_str()), [r#"_gaq.push(["_trackTrans"]);"#]);
}

#[test]
fn test_ecommerce_batched_into_init() {
    let events = [
        TrackingEvent::add_transaction(Transaction {
            order_id: "77".into(),
            total: "20.00".into(),
            ..Default::default()
        })
        .unwrap(),
        TrackingEvent::track_transaction(),
    ];
    let html = helpers()
        .analytics_init(events, &InitOptions::default())
        .unwrap();
    let calls = calls(html.as_str());
    assert_eq!(
        calls[3],
        r#"_gaq.push(["_addTrans","77","","20.00","","","","",""]);"#
    );
    assert_eq!(calls[4], r#"_gaq.push(["_trackTrans"]);"#);
}

#[test]
fn test_unconfigured_tracker_produces_no_output() {
    let helpers = ViewHelpers::new(AnalyticsConfig::default());
    let err = helpers
        .analytics_init(Vec::new(), &InitOptions::default())
        .unwrap_err();
    assert!(matches!(err, GaqError::MissingTrackerConfiguration));
    assert!(err.to_string().contains("Tracker must be set"));
}

#[test]
fn test_hostile_label_stays_inside_script() {
    let html = helpers()
        .analytics_track_event("Search", "Query", Some("</script><img src=x>"), None)
        .unwrap();
    assert_eq!(html.as_str().matches("</script>").count(), 1);
    assert!(html.as_str().ends_with("</script>"));
}

#[test]
fn test_queue_order_is_append_order() {
    let a = TrackingEvent::track_event("A", "first", None, None).unwrap();
    let b = TrackingEvent::track_event("B", "second", None, None).unwrap();
    let rendered = EventQueue::new().with(a).with(b).render().unwrap();
    let first = rendered.find("\"A\"").unwrap();
    let second = rendered.find("\"B\"").unwrap();
    assert!(first < second);
}
