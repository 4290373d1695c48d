//! Ordered queue of tracking events, rendered one `_gaq.push` per line.

use gaq_core::GaqResult;

use crate::events::TrackingEvent;

/// Insertion-ordered events for one page render.
///
/// The queue never reorders, deduplicates or cross-checks events; callers
/// decide the order (account first, transaction before its items).
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<TrackingEvent>,
    tracker_name: Option<String>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue whose calls address a named tracker (`name._method`). A blank
    /// name falls back to the default tracker.
    pub fn for_tracker(tracker_name: impl Into<String>) -> Self {
        let tracker_name = tracker_name.into().trim().to_string();
        Self {
            events: Vec::new(),
            tracker_name: (!tracker_name.is_empty()).then_some(tracker_name),
        }
    }

    pub fn append(&mut self, event: TrackingEvent) -> &mut Self {
        self.events.push(event);
        self
    }

    pub fn with(mut self, event: TrackingEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackingEvent> {
        self.events.iter()
    }

    pub fn tracker_name(&self) -> Option<&str> {
        self.tracker_name.as_deref()
    }

    /// One call per line, in insertion order.
    pub fn render(&self) -> GaqResult<String> {
        let lines = self
            .events
            .iter()
            .map(|event| event.render_for(self.tracker_name()))
            .collect::<GaqResult<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

impl Extend<TrackingEvent> for EventQueue {
    fn extend<I: IntoIterator<Item = TrackingEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl FromIterator<TrackingEvent> for EventQueue {
    fn from_iter<I: IntoIterator<Item = TrackingEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
            tracker_name: None,
        }
    }
}

impl<'a> IntoIterator for &'a EventQueue {
    type Item = &'a TrackingEvent;
    type IntoIter = std::slice::Iter<'a, TrackingEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
