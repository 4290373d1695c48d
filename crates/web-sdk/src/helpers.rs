//! View helpers that render `_gaq` tracking snippets as `<script>` tags.
//!
//! # Example
//!
//! ```
//! use gaq_core::AnalyticsConfig;
//! use gaq_web_sdk::{InitOptions, ViewHelpers};
//!
//! let helpers = ViewHelpers::new(AnalyticsConfig::with_tracker("UA-1234-1"));
//! let head = helpers.analytics_init([], &InitOptions::default()).unwrap();
//! assert!(head.as_str().contains(r#"_gaq.push(["_setAccount","UA-1234-1"]);"#));
//!
//! // e-commerce: transaction, then its items, then submit
//! helpers
//!     .analytics_add_transaction(
//!         "1234", "Acme Clothing", "11.99", "1.29", "5", "San Jose", "California", "USA",
//!     )
//!     .unwrap();
//! helpers
//!     .analytics_add_item("1234", "DD44", "T-Shirt", "Green Medium", "11.99", "1")
//!     .unwrap();
//! helpers.analytics_track_transaction().unwrap();
//! ```

use gaq_core::{AnalyticsConfig, GaqError, GaqResult, TrackerId};
use tracing::{debug, warn};

use crate::events::{Item, TrackingEvent, Transaction};
use crate::markup::{script_tag, SafeHtml};
use crate::queue::EventQueue;

/// Asynchronously loads `ga.js`, which then drains the `_gaq` queue.
const GA_LOADER: &str = "(function() {
  var ga = document.createElement('script'); ga.type = 'text/javascript'; ga.async = true;
  ga.src = ('https:' == document.location.protocol ? 'https://ssl' : 'http://www') + '.google-analytics.com/ga.js';
  var s = document.getElementsByTagName('script')[0]; s.parentNode.insertBefore(ga, s);
})();";

/// Options for [`ViewHelpers::analytics_init`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// Local development mode: appends `_setDomainName("none")` and
    /// `_setAllowLinker(true)` after the caller's events.
    pub local: bool,
    /// Path for the bootstrap pageview instead of the current location.
    pub page: Option<String>,
    /// Inserts `_gat._anonymizeIp` right after the account is set.
    pub anonymize_ip: bool,
}

impl InitOptions {
    pub fn local(local: bool) -> Self {
        Self {
            local,
            ..Default::default()
        }
    }
}

/// Renders tracking snippets for one configured account.
///
/// Holds read-only configuration only, so a single instance can be shared
/// across request handlers.
#[derive(Debug, Clone)]
pub struct ViewHelpers {
    config: AnalyticsConfig,
}

impl ViewHelpers {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Init options seeded from the configured defaults.
    pub fn init_options(&self) -> InitOptions {
        InitOptions {
            local: self.config.local,
            page: None,
            anonymize_ip: self.config.anonymize_ip,
        }
    }

    fn tracker(&self, helper: &'static str) -> GaqResult<TrackerId> {
        self.config.tracker_id().map_err(|err| {
            warn!(helper, error = %err, "analytics helper called without a valid tracker");
            GaqError::MissingTrackerConfiguration
        })
    }

    fn queue(&self) -> EventQueue {
        match self.config.tracker_name() {
            Some(name) => EventQueue::for_tracker(name),
            None => EventQueue::new(),
        }
    }

    /// Initializes the tracking script; belongs in the page `<head>`.
    ///
    /// The account, a pageview and the page load time are always tracked
    /// first, followed by `events` in the given order.
    pub fn analytics_init(
        &self,
        events: impl IntoIterator<Item = TrackingEvent>,
        options: &InitOptions,
    ) -> GaqResult<SafeHtml> {
        let tracker = self.tracker("analytics_init")?;

        let mut queue = self.queue();
        queue.append(TrackingEvent::set_account(tracker.clone()));
        if options.anonymize_ip {
            queue.append(TrackingEvent::anonymize_ip());
        }
        queue.append(match &options.page {
            Some(page) => TrackingEvent::track_pageview_for(page.as_str()),
            None => TrackingEvent::track_pageview(),
        });
        queue.append(TrackingEvent::track_page_load_time());
        queue.extend(events);

        if options.local {
            queue.append(TrackingEvent::set_domain_name("none")?);
            queue.append(TrackingEvent::set_allow_linker(true));
        }

        debug!(
            tracker = %tracker,
            event_count = queue.len(),
            local = options.local,
            "rendering analytics init snippet"
        );

        let body = format!(
            "var _gaq = _gaq || [];\n{}\n{GA_LOADER}",
            queue.render()?
        );
        Ok(script_tag(&body))
    }

    /// Track a custom event, e.g. `("Videos", "Play", Some("Gone With the Wind"), None)`.
    pub fn analytics_track_event(
        &self,
        category: &str,
        action: &str,
        label: Option<&str>,
        value: Option<i64>,
    ) -> GaqResult<SafeHtml> {
        self.tracker("analytics_track_event")?;
        let event =
            TrackingEvent::track_event(category, action, label.map(str::to_string), value)?;
        self.analytics_render_event(event)
    }

    /// Start an e-commerce transaction. `order_id` and `total` are required.
    #[allow(clippy::too_many_arguments)]
    pub fn analytics_add_transaction(
        &self,
        order_id: &str,
        store_name: &str,
        total: &str,
        tax: &str,
        shipping: &str,
        city: &str,
        state: &str,
        country: &str,
    ) -> GaqResult<SafeHtml> {
        self.tracker("analytics_add_transaction")?;
        let event = TrackingEvent::add_transaction(Transaction {
            order_id: order_id.into(),
            store_name: store_name.into(),
            total: total.into(),
            tax: tax.into(),
            shipping: shipping.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
        })?;
        self.analytics_render_event(event)
    }

    /// Add an item to the current transaction.
    pub fn analytics_add_item(
        &self,
        order_id: &str,
        sku: &str,
        name: &str,
        variation: &str,
        unit_price: &str,
        quantity: &str,
    ) -> GaqResult<SafeHtml> {
        self.tracker("analytics_add_item")?;
        let event = TrackingEvent::add_item(Item {
            order_id: order_id.into(),
            sku: sku.into(),
            name: name.into(),
            variation: variation.into(),
            unit_price: unit_price.into(),
            quantity: quantity.into(),
        })?;
        self.analytics_render_event(event)
    }

    /// Submit the current transaction.
    pub fn analytics_track_transaction(&self) -> GaqResult<SafeHtml> {
        self.tracker("analytics_track_transaction")?;
        self.analytics_render_event(TrackingEvent::track_transaction())
    }

    /// Render a single event in its own `<script>` tag.
    pub fn analytics_render_event(&self, event: TrackingEvent) -> GaqResult<SafeHtml> {
        self.tracker("analytics_render_event")?;
        let line = event.render_for(self.config.tracker_name())?;
        debug!(method = event.method(), "rendering standalone analytics event");
        Ok(script_tag(&format!("  {line}")))
    }
}
