//! Analytics collector contracts and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Event name reported for footer link clicks.
pub const FOOTER_LINK_EVENT: &str = "edx.bi.footer.link";

/// Category attached to links that leave the application.
pub const OUTBOUND_LINK_CATEGORY: &str = "outbound_link";

/// Object-safe boxed future used by [`AnalyticsService`].
pub type AnalyticsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Property payload for outbound-link tracking events.
pub struct OutboundLinkProperties {
    /// Event category.
    pub category: String,
    /// Clicked anchor `href`.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Structured analytics record with a name and property mapping.
pub struct TrackEvent {
    /// Stable event name.
    pub name: String,
    /// Event properties.
    pub properties: OutboundLinkProperties,
}

/// Builds the tracking event for a click on an outbound footer link.
pub fn outbound_link_event(href: &str) -> TrackEvent {
    TrackEvent {
        name: FOOTER_LINK_EVENT.to_string(),
        properties: OutboundLinkProperties {
            category: OUTBOUND_LINK_CATEGORY.to_string(),
            label: href.to_string(),
        },
    }
}

/// Host service that forwards tracking events to an analytics collector.
///
/// Callers treat the returned future as fire-and-forget.
pub trait AnalyticsService {
    /// Sends one tracking event.
    fn send_track_event<'a>(&'a self, event: &'a TrackEvent)
        -> AnalyticsFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op analytics adapter for unsupported targets.
pub struct NoopAnalyticsService;

impl AnalyticsService for NoopAnalyticsService {
    fn send_track_event<'a>(
        &'a self,
        _event: &'a TrackEvent,
    ) -> AnalyticsFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory analytics adapter that records every event it receives.
pub struct MemoryAnalyticsService {
    inner: Rc<RefCell<Vec<TrackEvent>>>,
}

impl MemoryAnalyticsService {
    /// Returns a snapshot of recorded events in send order.
    pub fn events(&self) -> Vec<TrackEvent> {
        self.inner.borrow().clone()
    }
}

impl AnalyticsService for MemoryAnalyticsService {
    fn send_track_event<'a>(
        &'a self,
        event: &'a TrackEvent,
    ) -> AnalyticsFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().push(event.clone());
            Ok(())
        })
    }
}
