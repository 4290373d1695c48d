//! Tracking events understood by the `_gaq` asynchronous queue.
//!
//! Each [`TrackingEvent`] renders as exactly one
//! `_gaq.push(["_method", arg, ...]);` call. Constructors check required
//! arguments up front so rendering never has to.

pub mod ecommerce;

use gaq_core::{GaqError, GaqResult, TrackerId};
use serde_json::Value;

use crate::markup::js_literal;
use ecommerce::require;
pub use ecommerce::{Item, Transaction};

/// Custom variable slots available to a standard GA account.
pub const CUSTOM_VAR_SLOTS: std::ops::RangeInclusive<u8> = 1..=5;

/// Scope of a custom variable, rendered as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomVarScope {
    Visitor = 1,
    Session = 2,
    Page = 3,
}

/// One instruction to the tracking script.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackingEvent {
    SetAccount {
        account: TrackerId,
    },
    TrackPageview {
        page: Option<String>,
    },
    TrackPageLoadTime,
    TrackEvent {
        category: String,
        action: String,
        label: Option<String>,
        value: Option<i64>,
    },
    SetDomainName {
        domain: String,
    },
    SetAllowLinker {
        allow: bool,
    },
    SetCustomVar {
        slot: u8,
        name: String,
        value: String,
        scope: Option<CustomVarScope>,
    },
    DeleteCustomVar {
        slot: u8,
    },
    AnonymizeIp,
    SetSiteSpeedSampleRate {
        percent: u8,
    },
    AddTransaction(Transaction),
    AddItem(Item),
    TrackTransaction,
}

impl TrackingEvent {
    /// The account id is required; holding a [`TrackerId`] already
    /// guarantees it is present and not the placeholder.
    pub fn set_account(account: TrackerId) -> Self {
        Self::SetAccount { account }
    }

    pub fn track_pageview() -> Self {
        Self::TrackPageview { page: None }
    }

    /// Pageview for an explicit path instead of the current location.
    pub fn track_pageview_for(page: impl Into<String>) -> Self {
        let page = page.into();
        Self::TrackPageview {
            page: (!page.trim().is_empty()).then_some(page),
        }
    }

    pub fn track_page_load_time() -> Self {
        Self::TrackPageLoadTime
    }

    pub fn track_event(
        category: impl Into<String>,
        action: impl Into<String>,
        label: Option<String>,
        value: Option<i64>,
    ) -> GaqResult<Self> {
        Self::TrackEvent {
            category: category.into(),
            action: action.into(),
            label,
            value,
        }
        .validated()
    }

    pub fn set_domain_name(domain: impl Into<String>) -> GaqResult<Self> {
        Self::SetDomainName {
            domain: domain.into(),
        }
        .validated()
    }

    pub fn set_allow_linker(allow: bool) -> Self {
        Self::SetAllowLinker { allow }
    }

    pub fn set_custom_var(
        slot: u8,
        name: impl Into<String>,
        value: impl Into<String>,
        scope: Option<CustomVarScope>,
    ) -> GaqResult<Self> {
        Self::SetCustomVar {
            slot,
            name: name.into(),
            value: value.into(),
            scope,
        }
        .validated()
    }

    pub fn delete_custom_var(slot: u8) -> GaqResult<Self> {
        Self::DeleteCustomVar { slot }.validated()
    }

    pub fn anonymize_ip() -> Self {
        Self::AnonymizeIp
    }

    pub fn set_site_speed_sample_rate(percent: u8) -> GaqResult<Self> {
        Self::SetSiteSpeedSampleRate { percent }.validated()
    }

    pub fn add_transaction(transaction: Transaction) -> GaqResult<Self> {
        Self::AddTransaction(transaction).validated()
    }

    pub fn add_item(item: Item) -> GaqResult<Self> {
        Self::AddItem(item).validated()
    }

    pub fn track_transaction() -> Self {
        Self::TrackTransaction
    }

    /// Check required arguments. Variants are public, so rendering runs
    /// this again for events built without a constructor.
    pub fn validate(&self) -> GaqResult<()> {
        match self {
            Self::TrackEvent {
                category, action, ..
            } => {
                require("TrackEvent", "category", category)?;
                require("TrackEvent", "action", action)
            }
            Self::SetDomainName { domain } => require("SetDomainName", "domain", domain),
            Self::SetCustomVar {
                slot, name, value, ..
            } => {
                if !CUSTOM_VAR_SLOTS.contains(slot) {
                    return Err(GaqError::missing("SetCustomVar", "slot"));
                }
                require("SetCustomVar", "name", name)?;
                require("SetCustomVar", "value", value)
            }
            Self::DeleteCustomVar { slot } if !CUSTOM_VAR_SLOTS.contains(slot) => {
                Err(GaqError::missing("DeleteCustomVar", "slot"))
            }
            Self::SetSiteSpeedSampleRate { percent } if !(1..=100).contains(percent) => {
                Err(GaqError::missing("SetSiteSpeedSampleRate", "percent"))
            }
            Self::AddTransaction(transaction) => transaction.validate(),
            Self::AddItem(item) => item.validate(),
            _ => Ok(()),
        }
    }

    fn validated(self) -> GaqResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// The method name the tracking script dispatches on.
    pub fn method(&self) -> &'static str {
        match self {
            Self::SetAccount { .. } => "_setAccount",
            Self::TrackPageview { .. } => "_trackPageview",
            Self::TrackPageLoadTime => "_trackPageLoadTime",
            Self::TrackEvent { .. } => "_trackEvent",
            Self::SetDomainName { .. } => "_setDomainName",
            Self::SetAllowLinker { .. } => "_setAllowLinker",
            Self::SetCustomVar { .. } => "_setCustomVar",
            Self::DeleteCustomVar { .. } => "_deleteCustomVar",
            Self::AnonymizeIp => "_gat._anonymizeIp",
            Self::SetSiteSpeedSampleRate { .. } => "_setSiteSpeedSampleRate",
            Self::AddTransaction(_) => "_addTrans",
            Self::AddItem(_) => "_addItem",
            Self::TrackTransaction => "_trackTrans",
        }
    }

    /// Whether the method addresses a global object rather than a tracker,
    /// in which case a tracker name prefix must not be applied.
    fn is_global(&self) -> bool {
        matches!(self, Self::AnonymizeIp)
    }

    /// Call arguments, without the method name.
    pub fn params(&self) -> Vec<Value> {
        match self {
            Self::SetAccount { account } => vec![account.as_str().into()],
            Self::TrackPageview { page } => page.iter().map(|p| Value::from(p.as_str())).collect(),
            Self::TrackEvent {
                category,
                action,
                label,
                value,
            } => {
                let mut params: Vec<Value> = vec![category.as_str().into(), action.as_str().into()];
                match (label, value) {
                    (Some(label), Some(value)) => {
                        params.push(label.as_str().into());
                        params.push((*value).into());
                    }
                    (Some(label), None) => params.push(label.as_str().into()),
                    (None, Some(value)) => {
                        params.push("".into());
                        params.push((*value).into());
                    }
                    (None, None) => {}
                }
                params
            }
            Self::SetDomainName { domain } => vec![domain.as_str().into()],
            Self::SetAllowLinker { allow } => vec![(*allow).into()],
            Self::SetCustomVar {
                slot,
                name,
                value,
                scope,
            } => {
                let mut params: Vec<Value> =
                    vec![(*slot).into(), name.as_str().into(), value.as_str().into()];
                if let Some(scope) = scope {
                    params.push((*scope as u8).into());
                }
                params
            }
            Self::DeleteCustomVar { slot } => vec![(*slot).into()],
            Self::SetSiteSpeedSampleRate { percent } => vec![(*percent).into()],
            Self::AddTransaction(transaction) => transaction.params(),
            Self::AddItem(item) => item.params(),
            Self::TrackPageLoadTime | Self::AnonymizeIp | Self::TrackTransaction => Vec::new(),
        }
    }

    /// Render as a `_gaq.push` call against the default tracker.
    pub fn render(&self) -> GaqResult<String> {
        self.render_for(None)
    }

    /// Render as a `_gaq.push` call, addressing `tracker_name` when given.
    /// A blank name addresses the default tracker.
    pub fn render_for(&self, tracker_name: Option<&str>) -> GaqResult<String> {
        self.validate()?;
        let tracker_name = tracker_name.map(str::trim).filter(|name| !name.is_empty());
        let method = match tracker_name {
            Some(name) if !self.is_global() => format!("{name}.{}", self.method()),
            _ => self.method().to_string(),
        };
        let mut call = vec![Value::String(method)];
        call.extend(self.params());
        Ok(format!("_gaq.push({});", js_literal(&Value::Array(call))?))
    }
}
